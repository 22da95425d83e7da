//! Missing key detection rule.
//!
//! Detects translation keys that exist in the reference locale but are
//! missing from a candidate locale.

use crate::{core::LocaleTable, issues::MissingKeyIssue};

/// Check for keys of `reference` absent from `candidate`.
///
/// Issues follow the reference table's order and point at the key's line in
/// the reference file.
pub fn check_missing_keys(reference: &LocaleTable, candidate: &LocaleTable) -> Vec<MissingKeyIssue> {
    reference
        .iter()
        .filter(|(key, _)| !candidate.contains_key(key))
        .map(|(key, entry)| MissingKeyIssue {
            context: reference.context(key, entry),
            locale: candidate.locale().to_string(),
        })
        .collect()
}
