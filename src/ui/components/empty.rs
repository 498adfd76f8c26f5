//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, put, put_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty list message, one blank row below `row`.
///
/// ```text
/// [blank]
///        No Pokemon yet
///  Type a name and press Enter to add one
/// ```
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row + 1, 1);
    put(out, &Theme::fg(&theme.colors.empty_state_fg));
    put_centered(out, &empty.message, cols);
    put(out, Theme::reset());

    position_cursor(out, row + 2, 1);
    put(out, Theme::dim());
    put(out, &Theme::fg(&theme.colors.text_dim));
    put_centered(out, &empty.subtitle, cols);
    put(out, Theme::reset());

    row + 3
}
