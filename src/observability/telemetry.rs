//! Distributed tracing pipeline.
//!
//! # Responsibilities
//! - Build the OTLP/gRPC span exporter against the configured collector
//! - Attach the process resource descriptor (service name, host arch,
//!   hostname) to every exported span
//! - Hand out named tracers to subsystems
//! - Flush buffered spans at shutdown
//!
//! # Design Decisions
//! - The tracer provider is an explicitly owned value, not process-global
//!   state; subsystems receive their tracer at construction time
//! - Spans are batch-exported on the Tokio runtime so the request path
//!   never blocks on collector I/O

use opentelemetry::trace::{TraceError, TracerProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Config, Tracer, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use opentelemetry_semantic_conventions::resource::{HOST_ARCH, HOST_NAME, SERVICE_NAME};
use thiserror::Error;

use crate::config::TelemetryConfig;

/// Error type for telemetry setup and teardown.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("trace pipeline error: {0}")]
    Trace(#[from] TraceError),
}

/// Owner of the process-wide trace pipeline.
///
/// Construct once at startup; derive per-subsystem tracers with
/// [`Telemetry::tracer`] and call [`Telemetry::shutdown`] before exit so
/// buffered spans reach the collector.
pub struct Telemetry {
    provider: TracerProvider,
}

impl Telemetry {
    /// Build the span exporter and batch processor.
    ///
    /// Must be called from within the Tokio runtime. Fails fast if the
    /// exporter cannot be constructed; the collector itself is dialed
    /// lazily on first export.
    pub fn init(config: &TelemetryConfig) -> Result<Self, TelemetryError> {
        let exporter = opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(config.collector_endpoint.clone())
            .build_span_exporter()?;

        let resource = Resource::new([
            KeyValue::new(SERVICE_NAME, config.service_name.clone()),
            KeyValue::new(HOST_ARCH, std::env::consts::ARCH),
            KeyValue::new(HOST_NAME, hostname()),
        ]);

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, runtime::Tokio)
            .with_config(Config::default().with_resource(resource))
            .build();

        tracing::info!(
            collector = %config.collector_endpoint,
            service = %config.service_name,
            "Telemetry pipeline initialized"
        );

        Ok(Self { provider })
    }

    /// Derive a named tracer for a subsystem.
    pub fn tracer(&self, name: &'static str) -> Tracer {
        self.provider.tracer(name)
    }

    /// Flush buffered spans and tear down the pipeline.
    pub fn shutdown(self) -> Result<(), TelemetryError> {
        for result in self.provider.force_flush() {
            result?;
        }
        Ok(())
    }
}

fn hostname() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}
