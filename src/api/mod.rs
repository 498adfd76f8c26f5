//! Backend API layer.
//!
//! Describes the three REST calls the plugin makes and how their results are
//! judged. Nothing here performs I/O: requests are executed by the Zellij host
//! through `web_request`, and their results come back as plugin events.
//!
//! - [`endpoint`]: Base URL and resource paths
//! - [`request`]: [`ApiRequest`] descriptors, trace context propagation, and
//!   the web request context codec
//! - [`response`]: Status checks and collection decoding

pub mod endpoint;
pub mod request;
pub mod response;

pub use endpoint::Endpoint;
pub use request::{ApiRequest, Method, TraceContext};
pub use response::{decode_collection, ensure_success};
