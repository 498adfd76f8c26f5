//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a `Vec<Action>`
//! and the plugin shim in `main.rs` carries each one out, which keeps the
//! handler testable on any target.
//!
//! # Example
//!
//! ```rust
//! use pokemon_manager::api::ApiRequest;
//! use pokemon_manager::app::Action;
//!
//! let actions = vec![Action::Send(ApiRequest::fetch_list())];
//! ```

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a backend call through Zellij's `web_request`.
    ///
    /// The request is echoed back in the result's context so the response can
    /// be matched to the operation that started it.
    Send(ApiRequest),
}
