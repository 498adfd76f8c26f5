//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`input`]: Draft input box with the submit control
//! - [`status`]: Loading indicator and error line
//! - [`list`]: Entity rows with per-row delete controls
//! - [`empty`]: Empty list message
//! - [`footer`]: Keybinding hints
//!
//! Every component writes into the frame buffer and returns the next free row.

mod empty;
mod footer;
mod header;
mod input;
mod list;
mod status;

use crate::ui::helpers::{position_cursor, put};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input;
use list::render_list_rows;
use status::{render_error, render_loading};

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    put(out, &Theme::fg(color));
    put(out, &"─".repeat(cols));
    put(out, Theme::reset());
    row + 1
}

/// Renders the whole layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Input box - 3 lines]
/// [Loading]            while busy
/// [Error] [Rows|Empty] otherwise
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_input(out, current_row, &vm.input, theme, cols);

    match &vm.body {
        BodyView::Loading { message } => {
            render_loading(out, current_row, message, theme, cols);
        }
        BodyView::List { error, items, empty_state } => {
            if let Some(error) = error {
                current_row = render_error(out, current_row, error, theme, cols);
            }
            match empty_state {
                Some(empty) => {
                    render_empty_state(out, current_row, empty, theme, cols);
                }
                None => {
                    render_list_rows(out, current_row, items, theme, cols);
                }
            }
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_start, &vm.footer, theme, cols);
}
