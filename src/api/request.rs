//! Request descriptors for the three backend operations.
//!
//! An [`ApiRequest`] describes one call to the backend: which operation it is,
//! the data it needs, and the tracing context of the span that issued it. The
//! plugin shim turns it into a Zellij `web_request`. The request itself is
//! serialized into the web request's `context` map so that, when Zellij delivers
//! the matching `WebRequestResult`, the response can be routed back to the
//! operation that produced it.

use crate::api::Endpoint;
use crate::domain::{PokemonError, PokemonId, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the serialized request is stored in the web request context.
pub const CONTEXT_KEY: &str = "pokemon_manager.request";

/// Fixed message shown when listing fails.
pub const FETCH_FAILED: &str = "Failed to get Pokemon";

/// Fixed message shown when creating fails.
pub const CREATE_FAILED: &str = "Failed to post Pokemon";

/// Fixed message shown when deleting fails.
pub const DELETE_FAILED: &str = "Failed to delete Pokemon";

/// HTTP method of a backend call.
///
/// Mapped onto Zellij's `HttpVerb` by the plugin shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Distributed tracing context carried across the host round-trip.
///
/// Captures the OpenTelemetry trace ID and span ID of the span that issued a
/// request, so the span handling its response can be parented under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the issuing span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the current
    /// span context is invalid.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();
        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Rebuilds the issuing span as a remote OpenTelemetry parent context.
    ///
    /// Returns `None` if either id fails to parse.
    #[must_use]
    pub fn remote_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }
}

/// Generates constructors that stamp each request with the current trace context.
macro_rules! api_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl ApiRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

api_request_builders! {
    fetch_list(FetchList {}),
    create(Create { name: String }),
    delete(Delete { id: PokemonId }),
}

/// One backend call issued by the sync controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiRequest {
    /// `GET /pokemon`: read the whole collection.
    FetchList {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },

    /// `POST /pokemon`: create a record; the backend answers with the full collection.
    Create {
        /// Name to submit, sent as-is (may be empty).
        name: String,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },

    /// `DELETE /pokemon/{id}`: remove one record; the response body is ignored.
    Delete {
        /// Identifier of the record to remove.
        id: PokemonId,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

/// JSON payload of a create request.
#[derive(Serialize)]
struct CreateBody<'a> {
    name: &'a str,
}

impl ApiRequest {
    /// Short operation name used in logs and span fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchList { .. } => "fetch_list",
            Self::Create { .. } => "create",
            Self::Delete { .. } => "delete",
        }
    }

    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::FetchList { .. } => Method::Get,
            Self::Create { .. } => Method::Post,
            Self::Delete { .. } => Method::Delete,
        }
    }

    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        match self {
            Self::FetchList { .. } | Self::Create { .. } => endpoint.collection_url(),
            Self::Delete { id, .. } => endpoint.item_url(id),
        }
    }

    /// Request headers. Only create carries a body, and it is always JSON.
    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if matches!(self, Self::Create { .. }) {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers
    }

    /// Serialized request body.
    ///
    /// # Errors
    ///
    /// Returns [`PokemonError::Decode`] if the create payload fails to serialize.
    pub fn body(&self) -> Result<Vec<u8>> {
        match self {
            Self::Create { name, .. } => serde_json::to_vec(&CreateBody { name })
                .map_err(|e| PokemonError::Decode(format!("failed to encode create body: {e}"))),
            Self::FetchList { .. } | Self::Delete { .. } => Ok(Vec::new()),
        }
    }

    /// The fixed, user-facing message for a failure of this operation.
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::FetchList { .. } => FETCH_FAILED,
            Self::Create { .. } => CREATE_FAILED,
            Self::Delete { .. } => DELETE_FAILED,
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FetchList { trace_context }
            | Self::Create { trace_context, .. }
            | Self::Delete { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Encodes this request into a Zellij web request context map.
    ///
    /// # Errors
    ///
    /// Returns [`PokemonError::Context`] if serialization fails.
    pub fn to_context(&self) -> Result<BTreeMap<String, String>> {
        let payload = serde_json::to_string(self)
            .map_err(|e| PokemonError::Context(format!("failed to encode request: {e}")))?;
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), payload);
        Ok(context)
    }

    /// Recovers the request from the context map of a web request result.
    ///
    /// # Errors
    ///
    /// Returns [`PokemonError::Context`] if the key is absent or the payload
    /// does not deserialize. Results carrying foreign contexts end up here.
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let payload = context
            .get(CONTEXT_KEY)
            .ok_or_else(|| PokemonError::Context(format!("missing `{CONTEXT_KEY}` entry")))?;
        serde_json::from_str(payload)
            .map_err(|e| PokemonError::Context(format!("failed to decode request: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_carries_json_name_and_content_type() {
        let request = ApiRequest::create("Bulbasaur".to_string());

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body().unwrap(), br#"{"name":"Bulbasaur"}"#.to_vec());
        assert_eq!(
            request.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn empty_name_is_submitted_as_is() {
        let request = ApiRequest::create(String::new());
        assert_eq!(request.body().unwrap(), br#"{"name":""}"#.to_vec());
    }

    #[test]
    fn list_and_delete_have_no_body_or_headers() {
        let list = ApiRequest::fetch_list();
        let delete = ApiRequest::delete(PokemonId::Number(4));

        assert!(list.body().unwrap().is_empty());
        assert!(delete.body().unwrap().is_empty());
        assert!(list.headers().is_empty());
        assert!(delete.headers().is_empty());
        assert_eq!(delete.method(), Method::Delete);
    }

    #[test]
    fn urls_follow_the_backend_contract() {
        let endpoint = Endpoint::new("http://backend");

        assert_eq!(ApiRequest::fetch_list().url(&endpoint), "http://backend/pokemon");
        assert_eq!(
            ApiRequest::create("Mew".to_string()).url(&endpoint),
            "http://backend/pokemon"
        );
        assert_eq!(
            ApiRequest::delete(PokemonId::from("m-151")).url(&endpoint),
            "http://backend/pokemon/m-151"
        );
    }

    #[test]
    fn context_survives_the_host_round_trip() {
        let request = ApiRequest::delete(PokemonId::Number(25));
        let context = request.to_context().unwrap();

        assert_eq!(ApiRequest::from_context(&context).unwrap(), request);
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut context = BTreeMap::new();
        context.insert("something_else".to_string(), "{}".to_string());
        assert!(matches!(
            ApiRequest::from_context(&context),
            Err(PokemonError::Context(_))
        ));

        context.insert(CONTEXT_KEY.to_string(), "not json".to_string());
        assert!(matches!(
            ApiRequest::from_context(&context),
            Err(PokemonError::Context(_))
        ));
    }

    #[test]
    fn without_a_tracing_layer_no_context_is_captured() {
        assert!(ApiRequest::fetch_list().trace_context().is_none());
    }

    #[test]
    fn remote_context_requires_valid_ids() {
        use opentelemetry::trace::TraceContextExt;

        let context = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
            parent_span_id: "00f067aa0ba902b7".to_string(),
        };
        let remote = context.remote_context().unwrap();
        let span = remote.span();
        let span_context = span.span_context();

        assert!(span_context.is_remote());
        assert_eq!(format!("{:016x}", span_context.span_id()), "00f067aa0ba902b7");

        let broken = TraceContext {
            trace_id: "not hex".to_string(),
            ..context
        };
        assert!(broken.remote_context().is_none());
    }

    #[test]
    fn failure_messages_are_operation_scoped() {
        assert_eq!(ApiRequest::fetch_list().failure_message(), "Failed to get Pokemon");
        assert_eq!(
            ApiRequest::create(String::new()).failure_message(),
            "Failed to post Pokemon"
        );
        assert_eq!(
            ApiRequest::delete(PokemonId::Number(1)).failure_message(),
            "Failed to delete Pokemon"
        );
    }
}
