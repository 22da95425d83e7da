use indexmap::IndexMap;
use serde::Serialize;

/// Position information in a locale file.
///
/// Represents a specific line in a locale file, used for error reporting
/// when there are issues with translation values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./locales/en.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// Position with context information in locale files.
///
/// Contains the key and value at this location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageContext {
    #[serde(flatten)]
    pub location: MessageLocation,
    /// The translation key (e.g., "settings.title").
    pub key: String,
    /// The translation value, outer quotes stripped.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// A single entry extracted from one line of a locale file.
///
/// The value has its surrounding quote characters removed; interior
/// escaping is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    pub value: String,
    /// Line number the entry was read from (1-indexed).
    pub line: usize,
}

impl MessageEntry {
    pub fn new(value: impl Into<String>, line: usize) -> Self {
        Self {
            value: value.into(),
            line,
        }
    }
}

/// Ordered key → entry mapping, in document order of first occurrence.
pub type Entries = IndexMap<String, MessageEntry>;

/// All messages for a single locale.
///
/// Built once by the extractor and never mutated afterwards; the only way to
/// obtain one is [`LocaleTable::new`] or [`LocaleTable::from_source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locale: String,
    file_path: String,
    entries: Entries,
}

impl LocaleTable {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>, entries: Entries) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries,
        }
    }

    /// Extract a table from raw locale file text.
    pub fn from_source(
        locale: impl Into<String>,
        file_path: impl Into<String>,
        text: &str,
    ) -> Self {
        Self::new(
            locale,
            file_path,
            crate::core::parsers::entry::extract_entries(text),
        )
    }

    /// Locale code (e.g., "en", "nl").
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// File path the table was read from.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    /// Get a message entry by key.
    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    /// Get just the value for a key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate `(key, entry)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageEntry)> {
        self.entries.iter()
    }

    /// Get all keys as an iterator.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Build the context (location, key, value) for an entry of this table.
    pub fn context(&self, key: &str, entry: &MessageEntry) -> MessageContext {
        MessageContext::new(
            MessageLocation::new(&self.file_path, entry.line),
            key,
            &entry.value,
        )
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
