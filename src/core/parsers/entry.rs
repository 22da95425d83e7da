//! Line-oriented extractor for `'key': 'value',` locale entries.
//!
//! The extractor is deliberately forgiving: any line that does not look like
//! a single-line entry (comments, braces, section headers, multi-line values)
//! is skipped. Only reading the file can fail.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::{Entries, LocaleTable, MessageEntry};

/// Parse one line as a `'key': <quoted value>` entry.
///
/// Returns `(key, value)` with the value's outer quotes removed. Leading
/// indentation, trailing whitespace and one trailing comma are ignored.
///
/// # Examples
///
/// ```
/// use locguard::core::parsers::entry::parse_entry_line;
///
/// assert_eq!(parse_entry_line("  'a.b': 'Hello',"), Some(("a.b", "Hello")));
/// assert_eq!(parse_entry_line("'a': \"It's\""), Some(("a", "It's")));
/// assert_eq!(parse_entry_line("// 'a': 'Hello',"), None);
/// ```
pub fn parse_entry_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix('\'')?;

    let key_end = rest.find('\'')?;
    let key = &rest[..key_end];
    if key.is_empty() {
        return None;
    }

    let rest = rest[key_end + 1..].trim_start().strip_prefix(':')?;
    let rest = rest.trim_start().trim_end();
    let literal = rest.strip_suffix(',').unwrap_or(rest).trim_end();

    strip_quotes(literal).map(|value| (key, value))
}

/// Strip matching outer quotes (single or double) from a literal.
fn strip_quotes(literal: &str) -> Option<&str> {
    let quote = literal.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    if literal.len() < 2 || !literal.ends_with(quote) {
        return None;
    }
    // Both quote characters are one byte wide.
    Some(&literal[1..literal.len() - 1])
}

/// Extract every entry in `text`, in document order.
///
/// When a key occurs more than once, the later value wins while the key keeps
/// the position of its first occurrence.
pub fn extract_entries(text: &str) -> Entries {
    let mut entries = Entries::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some((key, value)) = parse_entry_line(line) {
            entries.insert(key.to_string(), MessageEntry::new(value, idx + 1));
        }
    }
    entries
}

/// Render a table back into the literal form the extractor reads.
pub fn render(table: &LocaleTable) -> String {
    let mut out = String::from("export default {\n");
    for (key, entry) in table.iter() {
        out.push_str(&format!("  '{}': '{}',\n", key, entry.value));
    }
    out.push_str("};\n");
    out
}

/// Derive the locale code from a locale file path (`./locales/nl.ts` → `nl`).
pub fn extract_locale(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Read a locale file from disk and extract its table.
pub fn parse_locale_file(path: &Path, locale: &str) -> Result<LocaleTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;
    let file_path = path.to_string_lossy().to_string();
    Ok(LocaleTable::from_source(locale, file_path, &content))
}
