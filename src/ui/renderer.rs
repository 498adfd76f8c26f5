//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to component renderers, which fill a
//!    frame buffer
//!
//! The buffer is printed once per frame. Zellij clears the pane before each
//! render, so the renderer does not manage the screen.

use crate::app::AppState;
use crate::ui::components;

/// Builds one frame of ANSI output for the given terminal size.
///
/// # Example
///
/// ```rust
/// use pokemon_manager::app::AppState;
/// use pokemon_manager::ui::{render_frame, Theme};
///
/// let mut state = AppState::new(Theme::default());
/// state.set_busy(true);
/// assert!(render_frame(&state, 24, 80).contains("Loading..."));
/// ```
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut out = String::new();
    components::render_layout(&mut out, &viewmodel, &state.theme, cols, rows);
    out
}

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_frame(state, rows, cols));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputMode;
    use crate::domain::Pokemon;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    #[test]
    fn idle_frame_shows_form_and_rows() {
        let mut state = state();
        state.set_entities(vec![Pokemon::new(1, "Pikachu"), Pokemon::new(2, "Eevee")]);

        let frame = render_frame(&state, 24, 60);

        assert!(frame.contains("Favorite Pokemon"));
        assert!(frame.contains("New pokemon"));
        assert!(frame.contains("[ Add ]"));
        assert!(frame.contains("Pikachu"));
        assert!(frame.contains("Eevee"));
        assert_eq!(frame.matches("[X]").count(), 2);
    }

    #[test]
    fn busy_frame_hides_list_and_error() {
        let mut state = state();
        state.set_entities(vec![Pokemon::new(1, "Pikachu")]);
        state.set_error("Failed to get Pokemon");
        state.set_busy(true);

        let frame = render_frame(&state, 24, 60);

        assert!(frame.contains("Loading..."));
        assert!(frame.contains("[ Add ]"));
        assert!(!frame.contains("Pikachu"));
        assert!(!frame.contains("Failed to get Pokemon"));
    }

    #[test]
    fn error_frame_keeps_the_list() {
        let mut state = state();
        state.set_entities(vec![Pokemon::new(1, "Pikachu")]);
        state.set_error("Failed to delete Pokemon");

        let frame = render_frame(&state, 24, 60);

        assert!(frame.contains("Failed to delete Pokemon"));
        assert!(frame.contains("Pikachu"));
    }

    #[test]
    fn empty_list_shows_the_empty_state() {
        let frame = render_frame(&state(), 24, 60);
        assert!(frame.contains("No Pokemon yet"));
    }

    #[test]
    fn footer_tracks_the_input_mode() {
        let mut state = state();
        assert!(render_frame(&state, 24, 80).contains("Enter: add"));

        state.input_mode = InputMode::Browsing;
        assert!(render_frame(&state, 24, 80).contains("x: delete"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut state = state();
        state.set_entities(vec![Pokemon::new(1, "A very long Pokemon name indeed")]);
        let _ = render_frame(&state, 1, 1);
        let _ = render_frame(&state, 0, 0);
    }
}
