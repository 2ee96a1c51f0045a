//! Terminal column widths of text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `s` occupies on screen.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Columns `c` occupies; control characters take none.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Shorten `s` to at most `max_width` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    out.push(ELLIPSIS);
    out
}
