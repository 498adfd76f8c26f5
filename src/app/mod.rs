//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/api layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → web_request
//!                           ↑                                          ↓
//!                           └─────────── WebRequestResult ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and overlap policy types
//! - [`state`]: State store and view model computation
//! - [`sync`]: Begin/complete halves of each backend operation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod sync;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{BusyPolicy, InputMode};
pub use state::AppState;
