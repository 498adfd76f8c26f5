//! Footer component renderer.

use crate::ui::helpers::{position_cursor, put, put_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed.
///
/// Hints wider than the terminal are clipped so the line never wraps.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    put(out, &Theme::fg(&theme.colors.text_dim));
    put_centered(out, &footer.keybindings, cols);
    put(out, Theme::reset());
    row + 1
}
