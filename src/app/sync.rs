//! Backend operations: issues requests and reconciles state with their outcome.
//!
//! Requests are performed by the Zellij host, so each operation is split in
//! two. A `begin_*` function marks the state busy, clears the last error, and
//! returns the [`ApiRequest`] to send. [`complete`] runs when the matching
//! `WebRequestResult` arrives and applies the response:
//!
//! | Operation | Success | Failure |
//! |---|---|---|
//! | list | replace `entities` | `"Failed to get Pokemon"` |
//! | create | replace `entities`, clear draft | `"Failed to post Pokemon"`, draft kept |
//! | delete | remove matching id | `"Failed to delete Pokemon"` |
//!
//! Both paths clear `is_busy`. Nothing is retried.

use crate::api::{decode_collection, ensure_success, ApiRequest, TraceContext};
use crate::app::AppState;
use crate::domain::{PokemonError, PokemonId};
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Marks the start of an operation: busy on, error cleared.
fn begin(state: &mut AppState) {
    state.set_busy(true);
    state.clear_error();
}

/// Starts a read of the full collection.
#[tracing::instrument(level = "debug", skip(state))]
pub fn begin_fetch_list(state: &mut AppState) -> ApiRequest {
    begin(state);
    ApiRequest::fetch_list()
}

/// Starts a create with the current draft name.
///
/// The draft is submitted as-is, even when empty. It is cleared only once the
/// backend confirms.
#[tracing::instrument(level = "debug", skip(state), fields(name = %state.draft_name))]
pub fn begin_create(state: &mut AppState) -> ApiRequest {
    begin(state);
    ApiRequest::create(state.draft_name.clone())
}

/// Starts a delete of the record with `id`.
#[tracing::instrument(level = "debug", skip(state), fields(id = %id))]
pub fn begin_delete(state: &mut AppState, id: PokemonId) -> ApiRequest {
    begin(state);
    ApiRequest::delete(id)
}

/// Applies the result of `request` to the state.
///
/// `status` and `body` are taken from Zellij's web request result. Any
/// non-2xx status, and for list/create any body that is not a JSON array of
/// Pokemon, counts as a failure and sets the operation's fixed message.
pub fn complete(state: &mut AppState, request: &ApiRequest, status: u16, body: &[u8]) {
    let _span = completion_span(request, status, body.len()).entered();

    let outcome = match request {
        ApiRequest::FetchList { .. } => decode_collection(status, body).map(|entities| {
            tracing::debug!(count = entities.len(), "list fetched");
            state.set_entities(entities);
        }),
        ApiRequest::Create { name, .. } => decode_collection(status, body).map(|entities| {
            tracing::debug!(name = %name, count = entities.len(), "pokemon created");
            state.set_entities(entities);
            state.set_draft_name(String::new());
        }),
        ApiRequest::Delete { id, .. } => ensure_success(status).map(|()| {
            let removed = state.remove_entity(id);
            tracing::debug!(id = %id, removed = removed, "pokemon deleted");
        }),
    };

    if let Err(e) = outcome {
        fail(state, request, &e);
    }

    state.set_busy(false);
}

/// Span for handling a response.
///
/// When the request carries the issuing span's context, the span is rooted
/// there rather than under whatever span delivered the response.
fn completion_span(request: &ApiRequest, status: u16, body_len: usize) -> tracing::Span {
    match request.trace_context().and_then(TraceContext::remote_context) {
        Some(parent) => {
            let span = tracing::debug_span!(parent: None, "sync_complete",
                operation = request.kind(),
                status = status,
                body_len = body_len
            );
            span.set_parent(parent);
            span
        }
        None => tracing::debug_span!("sync_complete",
            operation = request.kind(),
            status = status,
            body_len = body_len
        ),
    }
}

fn fail(state: &mut AppState, request: &ApiRequest, error: &PokemonError) {
    tracing::debug!(operation = request.kind(), error = %error, "operation failed");
    state.set_error(request.failure_message());
}
