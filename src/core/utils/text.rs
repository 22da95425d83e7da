use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest value (in terminal columns) shown inline in report notes.
pub const MAX_VALUE_WIDTH: usize = 60;

/// Shorten `text` to at most `max_width` terminal columns, ending with `…`
/// when anything was cut.
///
/// Width is measured in display columns, so CJK text and emoji are not
/// over-counted.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
