//! Single-line status renderers: the loading indicator and the error line.

use crate::ui::helpers::{clip, pad, position_cursor, put, text_width};
use crate::ui::theme::Theme;

const INDENT: usize = 2;

fn render_status_line(out: &mut String, row: usize, text: &str, style: &str, cols: usize) -> usize {
    let text = clip(text, cols.saturating_sub(INDENT));

    position_cursor(out, row, 1);
    put(out, style);
    pad(out, INDENT);
    put(out, text);
    pad(out, cols.saturating_sub(INDENT + text_width(text)));
    put(out, Theme::reset());
    row + 1
}

/// Renders the loading indicator shown in place of the list while busy.
pub fn render_loading(out: &mut String, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    render_status_line(out, row, message, &Theme::fg(&theme.colors.loading_fg), cols)
}

/// Renders the last error above the list.
pub fn render_error(out: &mut String, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    render_status_line(out, row, message, &style, cols)
}
