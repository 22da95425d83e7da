/// Check if a key pattern contains wildcards.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*')
}

/// Check if a translation key matches a key pattern.
///
/// The `*` wildcard matches within one segment only (doesn't cross `.`
/// boundaries). Patterns without wildcards must equal the key.
///
/// Examples:
/// - `brands.*` matches `brands.bresser`, not `brands.bresser.model`
/// - `station.*.name` matches `station.bilt.name`
pub fn key_matches_pattern(pattern: &str, key: &str) -> bool {
    if !is_glob_pattern(pattern) {
        return pattern == key;
    }

    let pattern_segments: Vec<&str> = pattern.split('.').collect();
    let key_segments: Vec<&str> = key.split('.').collect();

    // Must have same number of segments
    if pattern_segments.len() != key_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(key_segments.iter())
        .all(|(pattern_seg, key_seg)| segment_matches(pattern_seg, key_seg))
}

/// Match a single segment with potential wildcards.
/// `*` matches 0 or more characters (standard glob semantics).
fn segment_matches(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == text;
    }

    let parts: Vec<&str> = pattern.split('*').collect();

    let mut pos = 0;

    // First part must be a prefix
    if !parts[0].is_empty() {
        if !text.starts_with(parts[0]) {
            return false;
        }
        pos = parts[0].len();
    }

    // Last part must be a suffix
    let last = parts[parts.len() - 1];
    let end = if last.is_empty() {
        text.len()
    } else {
        if !text.ends_with(last) {
            return false;
        }
        // Prefix and suffix must not overlap
        if pos + last.len() > text.len() {
            return false;
        }
        text.len() - last.len()
    };

    // Middle parts must appear in order
    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        if let Some(found) = text[pos..end].find(part) {
            pos = pos + found + part.len();
        } else {
            return false;
        }
    }

    true
}
