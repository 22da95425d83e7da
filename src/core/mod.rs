//! Core engine: locale discovery, extraction and loading.
//!
//! ## Module Structure
//!
//! - `context`: Run context (config merge, discovery, parallel loading)
//! - `data`: Locale table and message location types
//! - `file_scanner`: Locale file discovery under the locales root
//! - `parsers`: Table extractor
//! - `utils`: Key patterns and display helpers

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod utils;

pub use context::{AuditContext, LoadedTables};
pub use data::{Entries, LocaleTable, MessageContext, MessageEntry, MessageLocation};
