//! Header component renderer.

use crate::ui::helpers::{position_cursor, put, put_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title centered and bold, padded to the full width.
///
/// Returns the next free row.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    put(out, Theme::bold());
    put(out, &Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        put(out, &Theme::bg(bg));
    }

    put_centered(out, &header.title, cols);

    put(out, Theme::reset());
    row + 1
}
