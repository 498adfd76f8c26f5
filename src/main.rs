//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the `pokemon_manager` library and Zellij. It is the
//! only place that calls host functions: it maps Zellij events to library
//! events and carries out the actions the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; once granted, activate (first fetch)
//! 3. **Update**: Map keys and web results to events, delegate to the library
//! 4. **Render**: Call the library render function
//!
//! # Request Routing
//!
//! Every `web_request` carries the serialized [`ApiRequest`] in its context
//! map. Zellij hands the context back with `WebRequestResult`, which is how a
//! response finds the operation that started it.
//!
//! # Keybindings
//!
//! Editing (default):
//! - characters: Type the name
//! - `Backspace`: Delete a character
//! - `Enter`: Add
//! - `Tab`/`Down`: Focus the list
//! - `Esc`: Close plugin
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: Move
//! - `x`/`d`/`Delete`: Delete the selected entry
//! - `r`: Refresh
//! - `Tab`/`i`/`/`: Focus the input
//! - `q`/`Esc`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use pokemon_manager::api::{ApiRequest, Endpoint, Method};
use pokemon_manager::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the resolved backend endpoint.
struct State {
    /// Core application state from library layer.
    app: pokemon_manager::AppState,

    /// Backend that requests are sent to.
    endpoint: Endpoint,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: pokemon_manager::initialize(&default_config),
            endpoint: default_config.endpoint(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests `WebAccess`, and subscribes to events.
    ///
    /// Nothing is fetched here: the first fetch waits for the permission
    /// result.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pokemon_manager::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            backend_url = %config.backend_url,
            busy_policy = ?config.busy_policy,
            "parsed configuration"
        );
        self.app = pokemon_manager::initialize(&config);
        self.endpoint = config.endpoint();

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates Zellij events, delegates to `handle_event`, and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("permissions granted - activating");
                    Event::Activate
                }
                PermissionStatus::Denied => {
                    tracing::warn!("web access denied - the list cannot be loaded");
                    return false;
                }
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        pokemon_manager::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(action);
                }
                render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Carries out one action. Returns `true` if it changed the state.
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
                false
            }
            Action::Send(request) => self.send(request),
        }
    }

    /// Issues `request` through the host.
    ///
    /// A request that cannot be encoded never reaches the host, so it is
    /// completed right away as a failed response to clear the busy state.
    fn send(&mut self, request: ApiRequest) -> bool {
        let url = request.url(&self.endpoint);
        let encoded = request.body().and_then(|body| Ok((body, request.to_context()?)));

        match encoded {
            Ok((body, context)) => {
                tracing::debug!(operation = request.kind(), url = %url, "sending web request");
                web_request(url, Self::http_verb(request.method()), request.headers(), body, context);
                false
            }
            Err(e) => {
                tracing::warn!(operation = request.kind(), error = %e, "failed to encode request");
                self.dispatch(&Event::WebResponse {
                    request,
                    status: 0,
                    body: Vec::new(),
                })
            }
        }
    }

    const fn http_verb(method: Method) -> HttpVerb {
        match method {
            Method::Get => HttpVerb::Get,
            Method::Post => HttpVerb::Post,
            Method::Delete => HttpVerb::Delete,
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Recovers the originating request from a web result.
    ///
    /// Results whose context is not ours are dropped.
    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        match ApiRequest::from_context(context) {
            Ok(request) => Some(Event::WebResponse { request, status, body }),
            Err(e) => {
                tracing::debug!(error = %e, status = status, "dropping unrecognized web result");
                None
            }
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Editing => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Tab | BareKey::Down => Event::FocusList,
                BareKey::Esc => Event::CloseFocus,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Browsing => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Delete | BareKey::Char('x' | 'd') => Event::DeleteSelected,
                BareKey::Char('r') => Event::Refresh,
                BareKey::Tab | BareKey::Char('i' | '/') => Event::FocusInput,
                BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }
}
