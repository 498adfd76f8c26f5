//! Event handling and state transition logic.
//!
//! This module processes user input, plugin lifecycle signals, and web request
//! results, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods and the [`sync`](super::sync) controller
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Activate`
//! - **Editing**: `Char`, `Backspace`, `Submit`
//! - **Navigation**: `KeyDown`, `KeyUp`, `FocusList`, `FocusInput`
//! - **Operations**: `DeleteSelected`, `Delete`, `Refresh`
//! - **Host**: `WebResponse`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use pokemon_manager::app::{handle_event, Action, AppState, Event};
//! use pokemon_manager::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Activate)?;
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::Send(_)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{BusyPolicy, InputMode};
use super::sync;
use crate::api::ApiRequest;
use crate::app::{Action, AppState};
use crate::domain::{PokemonId, Result};

/// Events triggered by user input, lifecycle changes, or request results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view became active. Loads the list the first time only.
    Activate,
    /// Appends a character to the draft name.
    Char(char),
    /// Removes the last character from the draft name.
    Backspace,
    /// Submits the draft name as a new record.
    Submit,
    /// Moves key focus from the input to the list.
    FocusList,
    /// Moves key focus from the list back to the input.
    FocusInput,
    /// Moves the selection down by one position (wraps to top).
    KeyDown,
    /// Moves the selection up by one position (wraps to bottom).
    KeyUp,
    /// Deletes the entry under the selection.
    DeleteSelected,
    /// Deletes the entry with the given id.
    Delete(PokemonId),
    /// Reloads the list from the backend.
    Refresh,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// A web request issued by this plugin finished.
    ///
    /// `request` is recovered from the result's context; `status` and `body`
    /// are passed through unchanged.
    WebResponse {
        request: ApiRequest,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the view should re-render and the actions to run, in order.
///
/// User-initiated operations are ignored until the view has been activated,
/// and while busy when the state's [`BusyPolicy`] is `Reject`.
///
/// # Errors
///
/// Currently infallible; the `Result` is kept so the plugin shim has a single
/// error path for every handler.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Activate => {
            if state.activated {
                tracing::debug!("already activated, not reloading");
                return Ok((false, vec![]));
            }
            state.activated = true;
            let request = sync::begin_fetch_list(state);
            Ok((true, vec![Action::Send(request)]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.push_draft_char(*c);
            tracing::trace!(draft = %state.draft_name, "draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.pop_draft_char();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if !may_start(state) {
                return Ok((false, vec![]));
            }
            let request = sync::begin_create(state);
            Ok((true, vec![Action::Send(request)]))
        }
        Event::FocusList => {
            state.input_mode = InputMode::Browsing;
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            state.input_mode = InputMode::Editing;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let Some(id) = state.selected_entity().map(|p| p.id.clone()) else {
                tracing::debug!("no entry selected to delete");
                return Ok((false, vec![]));
            };
            delete(state, id)
        }
        Event::Delete(id) => delete(state, id.clone()),
        Event::Refresh => {
            if !may_start(state) {
                return Ok((false, vec![]));
            }
            let request = sync::begin_fetch_list(state);
            Ok((true, vec![Action::Send(request)]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::WebResponse { request, status, body } => {
            tracing::debug!(operation = request.kind(), status = status, "web response received");
            sync::complete(state, request, *status, body);
            Ok((true, vec![]))
        }
    }
}

fn delete(state: &mut AppState, id: PokemonId) -> Result<(bool, Vec<Action>)> {
    if !may_start(state) {
        return Ok((false, vec![]));
    }
    tracing::debug!(id = %id, "deleting pokemon");
    let request = sync::begin_delete(state, id);
    Ok((true, vec![Action::Send(request)]))
}

/// Whether a user-initiated operation may start now.
fn may_start(state: &AppState) -> bool {
    if !state.activated {
        tracing::debug!("not activated yet, ignoring operation");
        return false;
    }
    if state.is_busy && state.busy_policy == BusyPolicy::Reject {
        tracing::debug!("operation outstanding, ignoring under reject policy");
        return false;
    }
    true
}
