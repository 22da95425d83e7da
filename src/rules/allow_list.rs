use std::collections::HashSet;

use crate::core::utils::{is_glob_pattern, key_matches_pattern};

/// Keys exempt from the untranslated-value heuristic.
///
/// Entries are either literal keys (`bigben.inscription`) or segment
/// patterns (`brands.*`) for families of proper nouns and brand names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    keys: HashSet<String>,
    patterns: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for entry in entries {
            list.insert(entry.into());
        }
        list
    }

    fn insert(&mut self, entry: String) {
        if is_glob_pattern(&entry) {
            if !self.patterns.contains(&entry) {
                self.patterns.push(entry);
            }
        } else {
            self.keys.insert(entry);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key) || self.patterns.iter().any(|p| key_matches_pattern(p, key))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.patterns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
