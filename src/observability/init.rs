//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name recorded with every span.
const SERVICE_NAME: &str = "inkpane";

/// Installs the global subscriber exporting spans to the span log.
///
/// The filter is built from `config.trace_level`, falling back to `info` when
/// unset or unparsable. Observability is optional: if the data directory
/// cannot be created nothing is installed, and repeated calls keep the first
/// subscriber.
///
/// ```rust
/// use inkpane::observability::init_tracing;
/// use inkpane::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = exporter::tracer_provider(&paths::span_log_path(), SERVICE_NAME);
    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
