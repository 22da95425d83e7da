//! Consistency rules for locale tables.
//!
//! This module contains pure functions comparing a candidate table against
//! the reference table. Each rule takes only the inputs it needs and returns
//! a specific issue type; [`analyze`] runs them all and bundles the findings
//! into a [`ConsistencyReport`].
//!
//! ## Module Structure
//!
//! - `allow_list`: Keys exempt from the untranslated heuristic
//! - `heuristics`: Value heuristics (rule table and thresholds)
//! - `missing`: Keys in the reference but not in the candidate
//! - `untranslated`: Issues for values identical to the reference
//! - `casing`: Issues for Title Case values

pub mod allow_list;
pub mod casing;
pub mod heuristics;
pub mod missing;
pub mod untranslated;

use serde::Serialize;

use crate::{
    core::LocaleTable,
    issues::{CasingAnomalyIssue, Issue, MissingKeyIssue, Rule, UntranslatedIssue},
};
use allow_list::AllowList;
use heuristics::{Heuristic, Thresholds, ValueHeuristic, ValueProbe, heuristics};

/// Findings for one candidate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub locale: String,
    pub file_path: String,
    pub reference_locale: String,
    pub missing_keys: Vec<MissingKeyIssue>,
    pub suspected_untranslated: Vec<UntranslatedIssue>,
    pub casing_anomalies: Vec<CasingAnomalyIssue>,
}

impl ConsistencyReport {
    /// True when no rule produced a finding.
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty()
            && self.suspected_untranslated.is_empty()
            && self.casing_anomalies.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.missing_keys.len() + self.suspected_untranslated.len() + self.casing_anomalies.len()
    }

    /// Keys missing from the candidate, in reference order.
    pub fn missing_key_names(&self) -> Vec<&str> {
        self.missing_keys
            .iter()
            .map(|i| i.context.key.as_str())
            .collect()
    }

    /// All findings as report issues, grouped by rule.
    pub fn issues(&self) -> Vec<Issue> {
        let missing = self.missing_keys.iter().cloned().map(Issue::MissingKey);
        let untranslated = self
            .suspected_untranslated
            .iter()
            .cloned()
            .map(Issue::Untranslated);
        let casing = self
            .casing_anomalies
            .iter()
            .cloned()
            .map(Issue::CasingAnomaly);
        missing.chain(untranslated).chain(casing).collect()
    }
}

/// Compare `candidate` against `reference` with the default thresholds.
pub fn analyze(
    reference: &LocaleTable,
    candidate: &LocaleTable,
    allow_list: &AllowList,
) -> ConsistencyReport {
    analyze_with(reference, candidate, allow_list, &Thresholds::default())
}

/// Compare `candidate` against `reference`.
///
/// Runs the missing-key pass, then evaluates the rule table against every
/// candidate entry and files each finding under the heuristic's rule.
pub fn analyze_with(
    reference: &LocaleTable,
    candidate: &LocaleTable,
    allow_list: &AllowList,
    thresholds: &Thresholds,
) -> ConsistencyReport {
    let mut report = ConsistencyReport {
        locale: candidate.locale().to_string(),
        file_path: candidate.file_path().to_string(),
        reference_locale: reference.locale().to_string(),
        missing_keys: missing::check_missing_keys(reference, candidate),
        suspected_untranslated: Vec::new(),
        casing_anomalies: Vec::new(),
    };

    let table = heuristics(thresholds, allow_list);
    apply_heuristics(reference, candidate, &table, &mut report);

    report
}

fn apply_heuristics(
    reference: &LocaleTable,
    candidate: &LocaleTable,
    table: &[Heuristic],
    report: &mut ConsistencyReport,
) {
    for (key, entry) in candidate.iter() {
        let probe = ValueProbe {
            key,
            value: &entry.value,
            reference_value: reference.value(key),
        };

        for heuristic in table.iter().filter(|h| h.matches(&probe)) {
            match heuristic.rule() {
                Rule::Untranslated => report
                    .suspected_untranslated
                    .push(untranslated::untranslated_issue(reference, candidate, key, entry)),
                Rule::CasingAnomaly => report
                    .casing_anomalies
                    .push(casing::casing_issue(candidate, key, entry)),
                // Not value heuristics
                Rule::MissingKey | Rule::FileError => {}
            }
        }
    }
}
