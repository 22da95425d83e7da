//! Locale file parsers.
//!
//! - `entry`: line-oriented `'key': 'value',` extractor for TS/JS locale modules

pub mod entry;
