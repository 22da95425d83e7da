//! Value heuristics used by the consistency analyzer.
//!
//! Each heuristic is an independent predicate over `(key, value, reference
//! value)` with its own threshold, so it can be configured and tested in
//! isolation. Heuristics are advisory: they direct human review and make no
//! correctness claim.

use enum_dispatch::enum_dispatch;

use crate::{issues::Rule, rules::allow_list::AllowList};

/// Values must be strictly longer than this (in chars) to be reported as
/// untranslated.
pub const UNTRANSLATED_MIN_LENGTH: usize = 5;

/// Values must have strictly more words than this to be reported as Title Case.
pub const TITLE_CASE_MIN_WORDS: usize = 3;

/// Configurable thresholds for the value heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub untranslated_min_length: usize,
    pub title_case_min_words: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            untranslated_min_length: UNTRANSLATED_MIN_LENGTH,
            title_case_min_words: TITLE_CASE_MIN_WORDS,
        }
    }
}

/// One candidate entry as seen by a heuristic.
#[derive(Debug, Clone, Copy)]
pub struct ValueProbe<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// Value of the same key in the reference table, if present.
    pub reference_value: Option<&'a str>,
}

#[enum_dispatch]
pub trait ValueHeuristic {
    /// Rule reported when the heuristic fires.
    fn rule(&self) -> Rule;

    /// Whether the heuristic flags this entry.
    fn matches(&self, probe: &ValueProbe<'_>) -> bool;
}

/// The rule table evaluated for every candidate entry.
#[enum_dispatch(ValueHeuristic)]
#[derive(Debug, Clone)]
pub enum Heuristic {
    Untranslated(UntranslatedHeuristic),
    TitleCase(TitleCaseHeuristic),
}

/// Flags candidate values identical to the reference value.
#[derive(Debug, Clone, Default)]
pub struct UntranslatedHeuristic {
    pub min_length: usize,
    pub allow_list: AllowList,
}

impl UntranslatedHeuristic {
    pub fn new(min_length: usize, allow_list: AllowList) -> Self {
        Self {
            min_length,
            allow_list,
        }
    }
}

impl ValueHeuristic for UntranslatedHeuristic {
    fn rule(&self) -> Rule {
        Rule::Untranslated
    }

    fn matches(&self, probe: &ValueProbe<'_>) -> bool {
        let Some(reference_value) = probe.reference_value else {
            return false;
        };

        probe.value == reference_value
            && probe.value.chars().count() > self.min_length
            && !is_digits_and_spaces(probe.value)
            && !self.allow_list.contains(probe.key)
    }
}

/// Flags values written in Title Case where sentence case is expected.
#[derive(Debug, Clone, Copy)]
pub struct TitleCaseHeuristic {
    pub min_words: usize,
}

impl TitleCaseHeuristic {
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl ValueHeuristic for TitleCaseHeuristic {
    fn rule(&self) -> Rule {
        Rule::CasingAnomaly
    }

    fn matches(&self, probe: &ValueProbe<'_>) -> bool {
        let words: Vec<&str> = probe.value.split_whitespace().collect();
        if words.len() <= self.min_words {
            return false;
        }

        words.iter().all(|w| starts_uppercase(w)) && !is_all_uppercase(probe.value)
    }
}

/// Build the rule table for the given thresholds and allow-list.
pub fn heuristics(thresholds: &Thresholds, allow_list: &AllowList) -> Vec<Heuristic> {
    vec![
        UntranslatedHeuristic::new(thresholds.untranslated_min_length, allow_list.clone()).into(),
        TitleCaseHeuristic::new(thresholds.title_case_min_words).into(),
    ]
}

/// Checks if the text is made only of digits and spaces ("2024", "1 000").
///
/// Text without any digit (including the empty string) does not qualify.
pub fn is_digits_and_spaces(text: &str) -> bool {
    let mut digits = text.chars().filter(|c| *c != ' ').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_numeric())
}

/// Checks if the text contains at least one cased letter and no lowercase ones.
///
/// # Examples
///
/// ```
/// use locguard::rules::heuristics::is_all_uppercase;
///
/// assert!(is_all_uppercase("READ THE MANUAL"));
/// assert!(is_all_uppercase("UV 3"));
/// assert!(!is_all_uppercase("Read The Manual"));
/// assert!(!is_all_uppercase("123"));
/// ```
pub fn is_all_uppercase(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}
