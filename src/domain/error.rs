//! Error types for the Pokemon Manager plugin.
//!
//! This module defines the centralized error type [`PokemonError`] and a type alias
//! [`Result`] used throughout the plugin. None of these errors reach the user
//! verbatim: the sync controller collapses every failure of an operation into that
//! operation's fixed message and logs the underlying error.

use thiserror::Error;

/// The main error type for Pokemon Manager operations.
///
/// # Examples
///
/// ```
/// use pokemon_manager::domain::PokemonError;
///
/// let err = PokemonError::Http { status: 503 };
/// assert_eq!(err.to_string(), "HTTP error: backend answered with status 503");
/// ```
#[derive(Debug, Error)]
pub enum PokemonError {
    /// The backend answered with a non-success status code.
    ///
    /// Zellij also reports transport failures (DNS, refused connection) as a
    /// non-success result, so those land here as well.
    #[error("HTTP error: backend answered with status {status}")]
    Http {
        /// Status code reported for the web request.
        status: u16,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The context attached to a web request result was missing or malformed.
    ///
    /// Without a valid context the response cannot be routed to an operation.
    #[error("Request context error: {0}")]
    Context(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Pokemon Manager operations.
pub type Result<T> = std::result::Result<T, PokemonError>;
