//! Tracing initialization and subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "pokemon-manager-otlp.json";

/// Installs the global subscriber, exporting spans to the plugin data dir.
///
/// The filter comes from `config.trace_level` (default `"info"`). Does
/// nothing if the data directory cannot be created, and only the first call
/// in a process takes effect.
///
/// # Example
///
/// ```rust
/// use pokemon_manager::observability::init_tracing;
/// use pokemon_manager::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    init_tracing_in(&data_dir, config.trace_level.as_deref().unwrap_or("info"));
}

/// Same as [`init_tracing`] with an explicit directory and filter.
pub fn init_tracing_in(data_dir: &Path, level: &str) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SCOPE_NAME,
    )]);

    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
