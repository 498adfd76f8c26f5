//! Application state management and view model computation.
//!
//! [`AppState`] holds everything the view is built from: the draft name, the
//! Pokemon list, the busy flag, and the last error, plus the selection cursor
//! and input mode. Only the named setters below write it.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns the state and the terminal size into a
//! [`UIViewModel`] without side effects:
//!
//! 1. While busy, the body is only the loading indicator.
//! 2. Otherwise the last error (if any) is shown above the list.
//! 3. The title, input, and submit control are always present.
//!
//! # Example
//!
//! ```rust
//! use pokemon_manager::app::AppState;
//! use pokemon_manager::domain::Pokemon;
//! use pokemon_manager::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.set_entities(vec![Pokemon::new(1, "Pikachu")]);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.body.items().len(), 1);
//! ```

use super::modes::{BusyPolicy, InputMode};
use crate::domain::{Pokemon, PokemonId};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputInfo, UIViewModel,
};

/// Title shown in the header bar.
const TITLE: &str = "Favorite Pokemon";

/// Text shown in the input while the draft is empty.
const PLACEHOLDER: &str = "New pokemon";

const SUBMIT_LABEL: &str = "Add";

const DELETE_LABEL: &str = "X";

const LOADING_MESSAGE: &str = "Loading...";

/// Rows taken by everything except the list: blank line, header, border,
/// input box (3), bottom border, footer, trailing line.
const CHROME_ROWS: usize = 9;

/// Columns reserved after the name for the delete control and its spacing.
const DELETE_COLUMN_WIDTH: usize = 6;

/// Central application state container.
///
/// Mutated by the event handler and the sync controller. Each network
/// operation replaces or filters `entities`, toggles `is_busy`, and sets or
/// clears `last_error`; no setter validates its input.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Free text bound to the input control.
    ///
    /// Reset to empty only after a successful create. A failed create leaves
    /// it alone so the user's text is not lost.
    pub draft_name: String,

    /// Entities in backend order.
    ///
    /// Replaced wholesale after a successful list or create, filtered after a
    /// successful delete. Never sorted locally.
    pub entities: Vec<Pokemon>,

    /// True while an operation started by this plugin is outstanding.
    ///
    /// A plain flag: overlapping operations do not stack, the last transition
    /// wins.
    pub is_busy: bool,

    /// Fixed message of the last failed operation.
    ///
    /// Cleared at the start of every operation. Not displayed while busy.
    pub last_error: Option<String>,

    /// Cursor over `entities` in browsing mode.
    ///
    /// Clamped whenever the list changes.
    pub selected_index: usize,

    /// Whether keys edit the draft or drive the list.
    pub input_mode: InputMode,

    /// Set once the initial list fetch has been issued.
    pub activated: bool,

    /// What to do with user operations started while busy.
    pub busy_policy: BusyPolicy,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: empty draft, empty list, idle, no error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pokemon_manager::app::AppState;
    /// use pokemon_manager::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert!(state.draft_name.is_empty());
    /// assert!(state.entities.is_empty());
    /// assert!(!state.is_busy);
    /// assert!(state.last_error.is_none());
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            draft_name: String::new(),
            entities: Vec::new(),
            is_busy: false,
            last_error: None,
            selected_index: 0,
            input_mode: InputMode::Editing,
            activated: false,
            busy_policy: BusyPolicy::default(),
            theme,
        }
    }

    /// Sets the overlap policy.
    #[must_use]
    pub fn with_busy_policy(mut self, busy_policy: BusyPolicy) -> Self {
        self.busy_policy = busy_policy;
        self
    }

    pub fn set_draft_name(&mut self, draft_name: impl Into<String>) {
        self.draft_name = draft_name.into();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft_name.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.draft_name.pop();
    }

    /// Replaces the whole entity list and clamps the selection.
    pub fn set_entities(&mut self, entities: Vec<Pokemon>) {
        self.entities = entities;
        self.clamp_selection();
    }

    /// Removes every entity whose id equals `id`.
    ///
    /// Returns whether anything was removed. An unknown id is not an error.
    pub fn remove_entity(&mut self, id: &PokemonId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|pokemon| &pokemon.id != id);
        self.clamp_selection();
        self.entities.len() != before
    }

    pub fn set_busy(&mut self, is_busy: bool) {
        self.is_busy = is_busy;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Moves the cursor down by one, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        if self.entities.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.entities.len();
    }

    /// Moves the cursor up by one, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        if self.entities.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.entities.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The entity under the cursor, if any.
    #[must_use]
    pub fn selected_entity(&self) -> Option<&Pokemon> {
        self.entities.get(self.selected_index)
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.entities.len().saturating_sub(1));
    }

    /// Computes the visual tree for the current state and terminal size.
    ///
    /// # Windowing
    ///
    /// When the list is taller than the space left by the chrome, a window
    /// centered on the selection is shown, shifted so it stays full near the
    /// end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel",
            entities = self.entities.len(),
            is_busy = self.is_busy,
            has_error = self.last_error.is_some()
        ).entered();

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
            },
            input: self.compute_input(),
            body: self.compute_body(rows, cols),
            footer: self.compute_footer(),
        }
    }

    fn compute_input(&self) -> InputInfo {
        let is_placeholder = self.draft_name.is_empty();
        InputInfo {
            text: if is_placeholder {
                PLACEHOLDER.to_string()
            } else {
                self.draft_name.clone()
            },
            is_placeholder,
            is_focused: self.input_mode == InputMode::Editing,
            submit_label: SUBMIT_LABEL.to_string(),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> BodyView {
        if self.is_busy {
            return BodyView::Loading {
                message: LOADING_MESSAGE.to_string(),
            };
        }

        if self.entities.is_empty() {
            return BodyView::List {
                error: self.last_error.clone(),
                items: vec![],
                empty_state: Some(EmptyState {
                    message: "No Pokemon yet".to_string(),
                    subtitle: "Type a name and press Enter to add one".to_string(),
                }),
            };
        }

        let available_rows = Self::calculate_available_rows(rows, self.last_error.is_some());

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.entities.len());
        if visible_end - visible_start < available_rows && self.entities.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let max_name_width = cols.saturating_sub(DELETE_COLUMN_WIDTH).max(1);
        let show_selection = self.input_mode == InputMode::Browsing;

        let items = self.entities[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, pokemon)| DisplayItem {
                name: truncate_name(&pokemon.name, max_name_width),
                delete_label: DELETE_LABEL.to_string(),
                is_selected: show_selection && visible_start + offset == self.selected_index,
            })
            .collect();

        BodyView::List {
            error: self.last_error.clone(),
            items,
            empty_state: None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Editing => "Type a name  Enter: add  Tab: list  Esc: close",
            InputMode::Browsing => "j/k: navigate  x: delete  r: refresh  Tab: edit  q: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for list entries after subtracting the chrome and, when shown,
    /// the error line. Never less than one.
    const fn calculate_available_rows(total_rows: usize, has_error: bool) -> usize {
        let chrome = if has_error { CHROME_ROWS + 1 } else { CHROME_ROWS };
        let available = total_rows.saturating_sub(chrome);
        if available == 0 {
            1
        } else {
            available
        }
    }
}

/// Truncates `name` to `max_width` characters, marking the cut with `...`.
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.chars().count() <= max_width {
        return name.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut truncated: String = name.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default());
        let entities = names
            .iter()
            .enumerate()
            .map(|(i, name)| Pokemon::new(i64::try_from(i).unwrap() + 1, *name))
            .collect();
        state.set_entities(entities);
        state
    }

    #[test]
    fn busy_shows_only_the_loading_indicator() {
        let mut state = state_with(&["Pikachu", "Eevee"]);
        state.set_error("Failed to get Pokemon");
        state.set_busy(true);

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(
            vm.body,
            BodyView::Loading {
                message: "Loading...".to_string()
            }
        );
        assert!(vm.body.error().is_none());
        assert!(vm.body.items().is_empty());
    }

    #[test]
    fn form_controls_render_regardless_of_busy() {
        let mut state = state_with(&[]);
        state.set_busy(true);
        state.set_draft_name("Mew");

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.header.title, "Favorite Pokemon");
        assert_eq!(vm.input.text, "Mew");
        assert!(!vm.input.is_placeholder);
        assert_eq!(vm.input.submit_label, "Add");
    }

    #[test]
    fn error_is_shown_above_the_list_when_idle() {
        let mut state = state_with(&["Pikachu"]);
        state.set_error("Failed to delete Pokemon");

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.body.error(), Some("Failed to delete Pokemon"));
        assert_eq!(vm.body.items().len(), 1);
        assert_eq!(vm.body.items()[0].name, "Pikachu");
        assert_eq!(vm.body.items()[0].delete_label, "X");
    }

    #[test]
    fn empty_draft_shows_the_placeholder() {
        let vm = state_with(&[]).compute_viewmodel(24, 80);
        assert_eq!(vm.input.text, "New pokemon");
        assert!(vm.input.is_placeholder);
        assert!(vm.input.is_focused);
    }

    #[test]
    fn empty_list_keeps_the_error_line() {
        let mut state = state_with(&[]);
        state.set_error("Failed to get Pokemon");

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.body.error(), Some("Failed to get Pokemon"));
        assert!(matches!(vm.body, BodyView::List { empty_state: Some(_), .. }));
    }

    #[test]
    fn list_keeps_backend_order() {
        let vm = state_with(&["Zubat", "Abra", "Mew"]).compute_viewmodel(24, 80);
        let names: Vec<&str> = vm.body.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Zubat", "Abra", "Mew"]);
    }

    #[test]
    fn selection_only_highlights_while_browsing() {
        let mut state = state_with(&["A", "B"]);
        state.move_selection_down();

        let editing = state.compute_viewmodel(24, 80);
        assert!(editing.body.items().iter().all(|i| !i.is_selected));

        state.input_mode = InputMode::Browsing;
        let browsing = state.compute_viewmodel(24, 80);
        assert!(!browsing.body.items()[0].is_selected);
        assert!(browsing.body.items()[1].is_selected);
    }

    #[test]
    fn window_follows_the_selection() {
        let names: Vec<String> = (0..30).map(|i| format!("p{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.input_mode = InputMode::Browsing;
        state.selected_index = 29;

        // 14 rows leave 5 for the list.
        let vm = state.compute_viewmodel(14, 80);
        let items = vm.body.items();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0].name, "p25");
        assert!(items[4].is_selected);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(&["A", "B", "C"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn removing_the_last_row_clamps_the_selection() {
        let mut state = state_with(&["A", "B"]);
        state.selected_index = 1;

        assert!(state.remove_entity(&PokemonId::Number(2)));
        assert_eq!(state.selected_index, 0);
        assert!(!state.remove_entity(&PokemonId::Number(99)));
    }

    #[test]
    fn long_names_truncate_on_char_boundaries() {
        assert_eq!(truncate_name("Pikachu", 10), "Pikachu");
        assert_eq!(truncate_name("Flabébébébé", 8), "Flabé...");
    }
}
