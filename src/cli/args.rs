//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare candidate locales against the reference locale
//! - `repair`: Deduplicate and reposition blocks of entries
//! - `init`: Initialize locguard configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by `check` and `repair`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root where the config search starts (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locales directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Reference locale (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Candidate locale files (default: every discovered locale except the reference)
    pub candidates: Vec<PathBuf>,

    /// Reference locale file (default: discovered from the reference locale)
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Key exempt from the untranslated check; may be repeated
    #[arg(long = "allow", value_name = "KEY")]
    pub allow: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RepairCommand {
    /// Locale files to repair (default: every discovered locale file)
    pub files: Vec<PathBuf>,

    /// Substring of the block's first line (overrides config 'blocks')
    #[arg(long, requires_all = ["end", "anchor"])]
    pub start: Option<String>,

    /// Substring of the block's last line
    #[arg(long, requires_all = ["start", "anchor"])]
    pub end: Option<String>,

    /// Substring of the line the block must follow
    #[arg(long, requires_all = ["start", "end"])]
    pub anchor: Option<String>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check candidate locales for missing keys, untranslated values and Title Case
    Check(CheckCommand),
    /// Remove duplicated blocks and move blocks back below their anchor comment
    Repair(RepairCommand),
    /// Initialize a new .locguardrc.json configuration file
    Init,
}
