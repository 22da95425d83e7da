use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    reconcile::BlockMarkers,
    rules::heuristics::{TITLE_CASE_MIN_WORDS, Thresholds, UNTRANSLATED_MIN_LENGTH},
};

pub const CONFIG_FILE_NAME: &str = ".locguardrc.json";

/// Helper modules and type declarations that usually live next to locale files.
pub const NON_LOCALE_FILE_PATTERNS: &[&str] = &["index.*", "types.*", "*.d.ts"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub allow_list: Vec<String>,
    #[serde(default = "default_untranslated_min_length")]
    pub untranslated_min_length: usize,
    #[serde(default = "default_title_case_min_words")]
    pub title_case_min_words: usize,
    #[serde(default)]
    pub blocks: Vec<BlockMarkers>,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_extensions() -> Vec<String> {
    ["ts", "js"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    NON_LOCALE_FILE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_untranslated_min_length() -> usize {
    UNTRANSLATED_MIN_LENGTH
}

fn default_title_case_min_words() -> usize {
    TITLE_CASE_MIN_WORDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            reference_locale: default_reference_locale(),
            extensions: default_extensions(),
            ignores: default_ignores(),
            allow_list: Vec::new(),
            untranslated_min_length: default_untranslated_min_length(),
            title_case_min_words: default_title_case_min_words(),
            blocks: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or a
    /// block definition has an empty marker.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.reference_locale.trim().is_empty() {
            bail!("'referenceLocale' must not be empty");
        }

        for (idx, block) in self.blocks.iter().enumerate() {
            block
                .validate()
                .with_context(|| format!("Invalid block definition at 'blocks[{}]'", idx))?;
        }

        Ok(())
    }

    /// Heuristic thresholds configured for the consistency analyzer.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            untranslated_min_length: self.untranslated_min_length,
            title_case_min_words: self.title_case_min_words,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
