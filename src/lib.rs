//! locguard - audit and repair key-value localization tables
//!
//! locguard reads TS/JS locale modules made of `'key': 'value',` lines,
//! compares every candidate language against a reference language, and
//! repairs duplicated or misplaced blocks of entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale discovery, table extraction and loading
//! - `issues`: Issue type definitions and reporting trait
//! - `reconcile`: Duplicate block reconciliation
//! - `rules`: Consistency rules (missing keys, untranslated values, casing)

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod reconcile;
pub mod rules;
