use std::path::{Component, Path, PathBuf};

use anyhow::{Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        LocaleTable,
        file_scanner::{ScanResult, scan_locale_files},
        parsers::entry::{extract_locale, parse_locale_file},
    },
    issues::FileErrorIssue,
    rules::allow_list::AllowList,
};

/// Tables read successfully plus the files that could not be read.
#[derive(Debug, Default)]
pub struct LoadedTables {
    /// Sorted by locale.
    pub tables: Vec<LocaleTable>,
    /// Sorted by file path.
    pub errors: Vec<FileErrorIssue>,
}

/// Shared state for one `check` or `repair` run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--reference-locale nl`)
/// 2. `.locguardrc.json` config file
/// 3. Built-in defaults
pub struct AuditContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Locales directory, resolved against `--root`.
    pub locales_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl AuditContext {
    /// Load configuration and apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the config file exists but is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref reference_locale) = common_args.reference_locale {
            config.reference_locale = reference_locale.clone();
        }

        if let Some(ref locales_root) = common_args.locales_root {
            config.locales_root = locales_root.to_string_lossy().to_string();
        }

        let locales_dir = resolve_locales_dir(&root_dir, &config.locales_root);

        Ok(Self {
            config,
            locales_dir,
            verbose,
        })
    }

    /// Find every locale file under the locales directory.
    pub fn discover(&self) -> Result<ScanResult> {
        let result = scan_locale_files(
            &self.locales_dir,
            &self.config.extensions,
            &self.config.ignores,
            self.verbose,
        )?;

        if result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                result.skipped_count,
                if self.verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }

        Ok(result)
    }

    /// Pick the reference file among discovered files by its locale.
    pub fn find_reference(&self, files: &[PathBuf]) -> Result<PathBuf> {
        files
            .iter()
            .find(|path| {
                extract_locale(path).as_deref() == Some(self.config.reference_locale.as_str())
            })
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "Reference locale '{}' not found in '{}'",
                    self.config.reference_locale,
                    self.locales_dir.display()
                )
            })
    }

    /// Allow-list from config plus extra keys given on the command line.
    pub fn allow_list(&self, extra: &[String]) -> AllowList {
        self.config
            .allow_list
            .iter()
            .chain(extra)
            .cloned()
            .collect()
    }

    /// Read and extract `files` in parallel.
    ///
    /// A file that cannot be read becomes a [`FileErrorIssue`]; the other
    /// files still load.
    pub fn load_tables(&self, files: &[PathBuf]) -> LoadedTables {
        let results: Vec<_> = files
            .par_iter()
            .map(|path| {
                let locale = locale_for(path);
                (path, parse_locale_file(path, &locale))
            })
            .collect();

        let mut loaded = LoadedTables::default();
        for (path, result) in results {
            match result {
                Ok(table) => {
                    if self.verbose {
                        eprintln!(
                            "Note: loaded '{}' ({} entries) from {}",
                            table.locale(),
                            table.len(),
                            table.file_path()
                        );
                    }
                    loaded.tables.push(table);
                }
                Err(e) => {
                    let file_path = path.to_string_lossy().to_string();
                    if self.verbose {
                        eprintln!("Warning: {} - {:#}", file_path, e);
                    }
                    loaded.errors.push(FileErrorIssue::new(file_path, &e));
                }
            }
        }

        loaded
            .tables
            .sort_by(|a, b| a.locale().cmp(b.locale()).then(a.file_path().cmp(b.file_path())));
        loaded.errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        loaded
    }
}

/// Locale code for a file, falling back to the path when it has no stem.
pub fn locale_for(path: &Path) -> String {
    extract_locale(path).unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn resolve_locales_dir(root_dir: &Path, locales_root: &str) -> PathBuf {
    let p = Path::new(locales_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
