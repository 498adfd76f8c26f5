//! Input mode and overlap policy types.
//!
//! A terminal has one key stream, so the plugin needs to know whether a key
//! press edits the draft name or drives the list. [`InputMode`] makes that
//! explicit. [`BusyPolicy`] decides what happens when the user starts an
//! operation while another is still outstanding.
//!
//! # Example
//!
//! ```rust
//! use pokemon_manager::app::modes::{BusyPolicy, InputMode};
//!
//! let mode = InputMode::Editing;
//! assert_eq!(BusyPolicy::from_name("reject"), Some(BusyPolicy::Reject));
//! ```

use crate::domain::PokemonError;
use std::str::FromStr;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys edit the draft name; Enter submits it.
    ///
    /// This is the initial mode, matching a form whose input has focus.
    #[default]
    Editing,

    /// Keys move the selection over the list and delete the selected entry.
    Browsing,
}

/// What to do with a new submit, delete, or refresh while busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusyPolicy {
    /// Start the operation anyway. Completions apply in arrival order and the
    /// last one to arrive decides `is_busy`, `last_error`, and the list.
    #[default]
    Overlap,

    /// Ignore user-initiated operations until the outstanding one completes.
    Reject,
}

impl BusyPolicy {
    /// Parses the `busy_policy` configuration value.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "overlap" => Some(Self::Overlap),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

impl FromStr for BusyPolicy {
    type Err = PokemonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            PokemonError::Config(format!("unknown busy_policy `{s}`, expected overlap or reject"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_names_are_case_insensitive() {
        assert_eq!(BusyPolicy::from_name("Overlap"), Some(BusyPolicy::Overlap));
        assert_eq!(BusyPolicy::from_name(" REJECT "), Some(BusyPolicy::Reject));
        assert_eq!(BusyPolicy::from_name("queue"), None);
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        assert!(matches!(
            "queue".parse::<BusyPolicy>(),
            Err(PokemonError::Config(_))
        ));
        assert_eq!("reject".parse::<BusyPolicy>().unwrap(), BusyPolicy::Reject);
    }

    #[test]
    fn defaults_match_a_fresh_form() {
        assert_eq!(InputMode::default(), InputMode::Editing);
        assert_eq!(BusyPolicy::default(), BusyPolicy::Overlap);
    }
}
