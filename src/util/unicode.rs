use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let mut last_start = 0;
    for (i, _) in s[..byte_offset].grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

/// Convert a byte offset into a display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(s.len());
    display_width(&s[..clamped])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii_and_cjk() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("牛乳"), 4);
        assert_eq!(display_width("buy 牛乳"), 8);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn width_combining_accent() {
        // cafe with a combining acute on the e
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("buy oat milk", 8), "buy oat\u{2026}");
    }

    #[test]
    fn truncate_wide_never_overflows() {
        let result = truncate_to_width("牛乳を買う", 6);
        assert!(display_width(&result) <= 6);
        assert!(result.ends_with('\u{2026}'));
    }

    #[test]
    fn truncate_degenerate_budgets() {
        assert_eq!(truncate_to_width("milk", 0), "");
        assert_eq!(truncate_to_width("milk", 1), "\u{2026}");
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("milk", 0), Some(1));
        assert_eq!(next_grapheme_boundary("milk", 3), Some(4));
        assert_eq!(next_grapheme_boundary("milk", 4), None);
        assert_eq!(prev_grapheme_boundary("milk", 4), Some(3));
        assert_eq!(prev_grapheme_boundary("milk", 0), None);
    }

    #[test]
    fn grapheme_boundaries_emoji() {
        let s = "a🎉b";
        assert_eq!(next_grapheme_boundary(s, 1), Some(5)); // over the emoji
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
    }

    #[test]
    fn grapheme_boundaries_combining() {
        let s = "cafe\u{0301}!"; // é is e + combining accent
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn display_col_from_byte_offset() {
        assert_eq!(byte_offset_to_display_col("milk", 2), 2);
        // 牛 is 3 bytes, 2 cells
        assert_eq!(byte_offset_to_display_col("牛乳", 3), 2);
        assert_eq!(byte_offset_to_display_col("牛乳", 99), 4);
    }
}
