//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Traces go to `~/.local/share/zellij/pokemon-manager/pokemon-manager-otlp.json`
//! (seen as `/host/...` from inside the sandbox). The file rotates at 5 MiB and
//! keeps 3 backups.
//!
//! The filter is the `trace_level` plugin option, an `EnvFilter` directive
//! defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and OTLP JSON formatting
//! - [`file_writer`]: Rotating file writer

pub mod exporter;
pub mod file_writer;
mod init;

pub use init::{init_tracing, init_tracing_in, TRACE_FILE_NAME};
