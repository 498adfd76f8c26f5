//! Shared rendering utilities.
//!
//! Components write into a frame buffer rather than stdout so a whole frame
//! can be inspected in tests and printed in one go. Writing to a `String`
//! cannot fail, so the `fmt::Result`s are discarded here.
//!
//! Widths are counted in `char`s, never bytes.

use std::fmt::Write;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Appends `text` as-is.
pub fn put(out: &mut String, text: &str) {
    out.push_str(text);
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Visible width of `text` in columns.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Keeps at most `width` characters of `text`.
#[must_use]
pub fn clip(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Writes `text` centered in a line of `cols` columns, clipped to fit.
pub fn put_centered(out: &mut String, text: &str, cols: usize) {
    let text = clip(text, cols);
    let len = text_width(text);
    let left = cols.saturating_sub(len) / 2;

    pad(out, left);
    put(out, text);
    pad(out, cols.saturating_sub(left + len));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_respects_char_boundaries() {
        assert_eq!(clip("Flabébé", 5), "Flabé");
        assert_eq!(clip("Mew", 10), "Mew");
    }

    #[test]
    fn centered_text_fills_the_line() {
        let mut out = String::new();
        put_centered(&mut out, "abc", 8);
        assert_eq!(out, "  abc   ");
    }

    #[test]
    fn cursor_sequence_is_one_indexed() {
        let mut out = String::new();
        position_cursor(&mut out, 3, 1);
        assert_eq!(out, "\u{1b}[3;1H");
    }
}
