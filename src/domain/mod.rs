//! Domain layer for the Pokemon Manager plugin.
//!
//! Core types independent of Zellij APIs and of the HTTP plumbing.
//!
//! - [`error`]: Error types and result aliases
//! - [`pokemon`]: The `Pokemon` entity and its opaque identifier

pub mod error;
pub mod pokemon;

pub use error::{PokemonError, Result};
pub use pokemon::{Pokemon, PokemonId};
