//! Core data types shared by the extractor, the rules and the reconciler.
//!
//! ## Module Structure
//!
//! - `message`: Locale table types (LocaleTable, MessageEntry, MessageContext)

pub mod message;

pub use message::{Entries, LocaleTable, MessageContext, MessageEntry, MessageLocation};
