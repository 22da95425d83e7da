//! Untranslated value detection rule.
//!
//! Detects candidate values that are identical to the reference locale,
//! which may indicate that the text was not translated. The predicate lives
//! in [`UntranslatedHeuristic`](crate::rules::heuristics::UntranslatedHeuristic);
//! this module builds the issue for an entry it flags.

use crate::{
    core::{LocaleTable, MessageEntry},
    issues::UntranslatedIssue,
};

/// Build the issue for a candidate entry, pointing at the candidate file.
pub fn untranslated_issue(
    reference: &LocaleTable,
    candidate: &LocaleTable,
    key: &str,
    entry: &MessageEntry,
) -> UntranslatedIssue {
    UntranslatedIssue {
        context: candidate.context(key, entry),
        reference_locale: reference.locale().to_string(),
    }
}
