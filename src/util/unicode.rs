use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Display width of a single grapheme cluster in terminal cells.
pub fn grapheme_display_width(g: &str) -> usize {
    UnicodeWidthStr::width(g)
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
        let gw = grapheme_display_width(grapheme);
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
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let prefix = &s[..byte_offset];
    let mut last_start = 0;
    for (i, _) in prefix.grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

/// Word boundary to the left (grapheme-aware, whitespace-delimited).
/// Used for Ctrl-W in edit buffers.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    if byte_offset == 0 {
        return 0;
    }
    let prefix = &s[..byte_offset];
    let graphemes: Vec<(usize, &str)> = prefix.grapheme_indices(true).collect();
    if graphemes.is_empty() {
        return 0;
    }

    let mut idx = graphemes.len() - 1;

    // Skip trailing whitespace
    while idx > 0 && graphemes[idx].1.chars().all(|c| c.is_whitespace()) {
        idx -= 1;
    }
    // Skip the word itself
    while idx > 0 && !graphemes[idx - 1].1.chars().all(|c| c.is_whitespace()) {
        idx -= 1;
    }

    if idx == 0 && !graphemes[0].1.chars().all(|c| c.is_whitespace()) {
        return 0;
    }
    graphemes[idx].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_plain_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn width_of_wide_chars() {
        // CJK characters are two cells each
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncate_fits_unchanged() {
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 1), "…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_char() {
        // "日" is 2 cells; budget of 2 leaves 1 cell after the ellipsis reserve
        assert_eq!(truncate_to_width("日本語", 2), "…");
        assert_eq!(truncate_to_width("日本語", 3), "日…");
    }

    #[test]
    fn grapheme_boundaries() {
        let s = "a日b";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), Some(5));
        assert_eq!(next_grapheme_boundary(s, 5), None);
        assert_eq!(prev_grapheme_boundary(s, 5), Some(4));
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn combining_marks_stay_joined() {
        let s = "e\u{301}x"; // é as combining sequence
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(0));
    }

    #[test]
    fn word_boundary_left_skips_word_and_space() {
        let s = "one two three";
        assert_eq!(word_boundary_left(s, s.len()), 8); // start of "three"
        assert_eq!(word_boundary_left(s, 8), 4); // start of "two"
        assert_eq!(word_boundary_left(s, 4), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
    }
}
