//! Pokemon Manager: a Zellij plugin that keeps a list of favorite Pokemon on a
//! REST backend.
//!
//! The plugin shows an input for a new name with an "Add" control, and the
//! stored list with one "X" control per entry. Every change goes through the
//! backend; the plugin never edits its list optimistically.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Sync controller (begin / complete)               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                    ┌───────────────┐
//! │ UI Layer      │                    │ API Layer     │
//! │ (ui/)         │                    │ (api/)        │
//! │ - Rendering   │                    │ - Endpoints   │
//! │ - Theming     │                    │ - Requests    │
//! │ - Components  │                    │ - Decoding    │
//! └───────────────┘                    └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types, Pokemon model (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/pokemon-manager.wasm" {
//!         backend_url "http://localhost:3000"
//!         busy_policy "overlap"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Flow
//!
//! 1. **Load**: parse configuration, initialize tracing, request `WebAccess`
//! 2. **Permission granted**: `Event::Activate` fetches the list once
//! 3. **Input**: keys become events; operations become `Action::Send`
//! 4. **Web result**: the request is recovered from the result context and
//!    `Event::WebResponse` completes it
//!
//! # Example
//!
//! ```rust
//! use pokemon_manager::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Activate)?;
//!
//! let Action::Send(request) = &actions[0] else { unreachable!() };
//! handle_event(&mut state, &Event::WebResponse {
//!     request: request.clone(),
//!     status: 200,
//!     body: br#"[{"id":1,"name":"Pikachu"}]"#.to_vec(),
//! })?;
//! assert_eq!(state.entities[0].name, "Pikachu");
//! # Ok::<(), pokemon_manager::PokemonError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{ApiRequest, Endpoint};
pub use app::{handle_event, Action, AppState, BusyPolicy, Event, InputMode};
pub use domain::{Pokemon, PokemonError, PokemonId, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Backend used when `backend_url` is not configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST backend. Default: `http://localhost:3000`
    pub backend_url: String,

    /// What to do with operations started while one is outstanding.
    pub busy_policy: BusyPolicy,

    /// Built-in theme name. Ignored if `theme_file` loads.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            busy_policy: BusyPolicy::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as absent. An unknown `busy_policy` falls back to
    /// the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pokemon_manager::{BusyPolicy, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("backend_url".to_string(), "http://pokeapi.local/".to_string());
    /// map.insert("busy_policy".to_string(), "reject".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.backend_url, "http://pokeapi.local/");
    /// assert_eq!(config.busy_policy, BusyPolicy::Reject);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let busy_policy = get("busy_policy").map_or_else(BusyPolicy::default, |name| {
            name.parse::<BusyPolicy>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "using default busy policy");
                BusyPolicy::default()
            })
        });

        Self {
            backend_url: get("backend_url").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            busy_policy,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// The backend endpoint built from `backend_url`.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.backend_url)
    }
}

/// Creates the initial state for the given configuration.
///
/// Loads the theme (custom file, then built-in name, then default) and applies
/// the overlap policy. No request is issued until the view is activated.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing pokemon manager plugin");

    let theme_file = config
        .theme_file
        .as_deref()
        .map(infrastructure::expand_tilde);
    let theme = Theme::resolve(config.theme_name.as_deref(), theme_file.as_deref());

    AppState::new(theme).with_busy_policy(config.busy_policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_and_unknown_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("backend_url", "   "),
            ("busy_policy", "queue"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.busy_policy, BusyPolicy::Overlap);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn endpoint_trims_the_trailing_slash() {
        let config = Config::from_zellij(&map(&[("backend_url", "http://api:8080/")]));
        assert_eq!(config.endpoint().collection_url(), "http://api:8080/pokemon");
    }

    #[test]
    fn initialize_applies_theme_and_policy() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            busy_policy: BusyPolicy::Reject,
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.busy_policy, BusyPolicy::Reject);
        assert!(!state.activated);
        assert!(!state.is_busy);
    }
}
