//! List component renderer.
//!
//! One row per entry: the name, then its delete control right-aligned.
//!
//! ```text
//! Pikachu                                     [X]
//! ```

use crate::ui::helpers::{pad, position_cursor, put, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders all rows starting at `row`. Returns the next free row.
pub fn render_list_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single row, padded to the full width so the selection
/// background covers the whole line.
fn render_list_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let row_style = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    let control = format!("[{}] ", item.delete_label);
    let name_room = cols.saturating_sub(text_width(&control) + 1);

    position_cursor(out, row, 1);
    put(out, &row_style);
    pad(out, 1);
    put(out, &item.name);
    pad(out, name_room.saturating_sub(text_width(&item.name)));

    if !item.is_selected {
        put(out, &Theme::fg(&theme.colors.delete_fg));
    }
    put(out, &control);
    put(out, Theme::reset());
    row + 1
}
