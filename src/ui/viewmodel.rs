//! View model types representing renderable UI state.
//!
//! The view model is the visual tree produced by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel).
//! It holds display-ready data only; the renderer turns it into ANSI output
//! without consulting application state again.
//!
//! # Example
//!
//! ```rust
//! use pokemon_manager::ui::viewmodel::*;
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Favorite Pokemon".to_string() },
//!     input: InputInfo {
//!         text: "New pokemon".to_string(),
//!         is_placeholder: true,
//!         is_focused: true,
//!         submit_label: "Add".to_string(),
//!     },
//!     body: BodyView::Loading { message: "Loading...".to_string() },
//!     footer: FooterInfo { keybindings: "Enter: add".to_string() },
//! };
//! assert!(vm.body.is_loading());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Draft input and its submit control. Always present.
    pub input: InputInfo,

    /// The status/list region, gated by the busy flag.
    pub body: BodyView,

    /// Keybinding hints for the current input mode.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Text input bound to the draft name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    /// The draft, or the placeholder when the draft is empty.
    pub text: String,

    /// Whether `text` is the placeholder rather than user input.
    pub is_placeholder: bool,

    /// Whether keys currently go to the input.
    pub is_focused: bool,

    /// Label of the submit control.
    pub submit_label: String,
}

/// The region below the input.
///
/// Exactly one of the two shapes is rendered: while busy only the loading
/// indicator is shown, never the list or the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// An operation is outstanding.
    Loading {
        message: String,
    },

    /// Idle: optional error line above the list.
    List {
        /// Error message from the last failed operation.
        error: Option<String>,

        /// Visible window of the entity list.
        items: Vec<DisplayItem>,

        /// Shown instead of rows when the list has no entries.
        empty_state: Option<EmptyState>,
    },
}

impl BodyView {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The error line, if this body shows one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::List { error, .. } => error.as_deref(),
            Self::Loading { .. } => None,
        }
    }

    /// The rendered list rows; empty while loading.
    #[must_use]
    pub fn items(&self) -> &[DisplayItem] {
        match self {
            Self::List { items, .. } => items,
            Self::Loading { .. } => &[],
        }
    }
}

/// One list entry: the name and its delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Display name, truncated to fit the name column.
    pub name: String,

    /// Label of the delete control.
    pub delete_label: String,

    /// Whether this row is under the cursor in browsing mode.
    pub is_selected: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
