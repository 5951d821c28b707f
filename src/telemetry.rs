//! Tracing and OpenTelemetry setup
//!
//! Console output goes to stderr so `trip-budget estimate` can keep stdout for
//! JSON. Spans are additionally exported over OTLP/HTTP when an endpoint is
//! configured.

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingConfig, TelemetryConfig};

/// Keeps the span exporter alive; flushes pending spans on drop
#[must_use = "dropping the guard shuts down span export"]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to shut down span exporter: {e}");
            }
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Pass `None` for
/// `telemetry` to skip span export entirely.
pub fn init(logging: &LoggingConfig, telemetry: Option<&TelemetryConfig>) -> Result<TelemetryGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    let fmt_layer = match logging.format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        _ => fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let provider = match telemetry.and_then(|t| t.otlp_endpoint.as_deref().map(|e| (t, e))) {
        Some((telemetry, endpoint)) => Some(build_provider(endpoint, &telemetry.service_name)?),
        None => None,
    };

    let otel_layer = provider.as_ref().map(|provider| {
        let service_name = telemetry
            .map(|t| t.service_name.clone())
            .unwrap_or_default();
        tracing_opentelemetry::layer().with_tracer(provider.tracer(service_name))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .with_context(|| "Failed to install tracing subscriber")?;

    if let Some(endpoint) = telemetry.and_then(|t| t.otlp_endpoint.as_deref()) {
        tracing::info!("Exporting spans to {}", endpoint);
    }

    Ok(TelemetryGuard { provider })
}

fn build_provider(endpoint: &str, service_name: &str) -> Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(endpoint)
        .build()
        .with_context(|| format!("Failed to create OTLP exporter for {endpoint}"))?;

    let provider = SdkTracerProvider::builder()
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_string())
                .build(),
        )
        .with_batch_exporter(exporter)
        .build();

    opentelemetry::global::set_tracer_provider(provider.clone());
    Ok(provider)
}
