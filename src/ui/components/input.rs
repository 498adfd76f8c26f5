//! Draft input component renderer.
//!
//! Renders a 3-line bordered box holding the draft name (or its placeholder)
//! and the submit control:
//!
//! ```text
//!   ┌──────────────────────────────────┐
//!   │ Pikachu                  [ Add ] │
//!   └──────────────────────────────────┘
//! ```

use crate::ui::helpers::{clip, pad, position_cursor, put, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 2;

/// Renders the input box starting at `row`. Returns `row + 3`.
///
/// The border takes the `input_border` color while the input has focus and
/// the plain `border` color otherwise. A trailing block marks the cursor.
pub fn render_input(out: &mut String, row: usize, input: &InputInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if input.is_focused {
        &theme.colors.input_border
    } else {
        &theme.colors.border
    };

    position_cursor(out, row, 1);
    pad(out, INPUT_BOX_MARGIN);
    put(out, &Theme::fg(border_color));
    put(out, &format!("┌{}┐", "─".repeat(inner_width)));
    put(out, Theme::reset());

    let submit = format!("[ {} ] ", input.submit_label);
    let cursor = if input.is_focused { "▏" } else { "" };
    let text_room = inner_width
        .saturating_sub(text_width(&submit) + 1 + text_width(cursor));
    let text = clip(&input.text, text_room);
    let used = 1 + text_width(text) + text_width(cursor) + text_width(&submit);

    position_cursor(out, row + 1, 1);
    pad(out, INPUT_BOX_MARGIN);
    put(out, &Theme::fg(border_color));
    put(out, "│");
    pad(out, 1);
    if input.is_placeholder {
        put(out, Theme::dim());
        put(out, &Theme::fg(&theme.colors.placeholder_fg));
    } else {
        put(out, &Theme::fg(&theme.colors.text_normal));
    }
    put(out, text);
    put(out, Theme::reset());
    put(out, &Theme::fg(&theme.colors.text_normal));
    put(out, cursor);
    pad(out, inner_width.saturating_sub(used));
    put(out, Theme::bold());
    put(out, &Theme::fg(&theme.colors.header_fg));
    put(out, &submit);
    put(out, Theme::reset());
    put(out, &Theme::fg(border_color));
    put(out, "│");
    put(out, Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, INPUT_BOX_MARGIN);
    put(out, &Theme::fg(border_color));
    put(out, &format!("└{}┘", "─".repeat(inner_width)));
    put(out, Theme::reset());

    row + 3
}
