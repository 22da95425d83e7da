//! Casing anomaly detection rule.
//!
//! Detects values written in Title Case ("Show The Hourly Forecast") where
//! sentence case is expected. Advisory only.

use crate::{
    core::{LocaleTable, MessageEntry},
    issues::CasingAnomalyIssue,
};

pub fn casing_issue(candidate: &LocaleTable, key: &str, entry: &MessageEntry) -> CasingAnomalyIssue {
    CasingAnomalyIssue {
        context: candidate.context(key, entry),
    }
}
