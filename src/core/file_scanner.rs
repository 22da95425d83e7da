use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning a locales directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Locale files found, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read while walking the directory.
    pub skipped_count: usize,
}

/// Find locale files directly inside `locales_root`.
///
/// A file qualifies when its extension is one of `extensions` and its file
/// name matches none of the `ignores` glob patterns (e.g. `index.*`).
pub fn scan_locale_files(
    locales_root: &Path,
    extensions: &[String],
    ignores: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    if !locales_root.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .locguardrc.json 'localesRoot' setting.",
            locales_root.display()
        );
    }

    if !locales_root.is_dir() {
        bail!("'{}' is not a directory.", locales_root.display());
    }

    let mut ignore_patterns: Vec<Pattern> = Vec::new();
    for p in ignores {
        match Pattern::new(p) {
            Ok(pattern) => ignore_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(locales_root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if verbose {
                    eprintln!("{} {}", "warning:".bold().yellow(), e);
                }
                result.skipped_count += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext));
        if !has_extension {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if ignore_patterns.iter().any(|p| p.matches(&file_name)) {
            if verbose {
                eprintln!("Note: ignoring {}", path.display());
            }
            continue;
        }

        result.files.push(path.to_path_buf());
    }

    result.files.sort();
    Ok(result)
}
