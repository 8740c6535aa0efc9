//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → telemetry.rs (trace spans, batched OTLP export)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Distributed tracing collector (OTLP/gRPC)
//! ```
//!
//! # Design Decisions
//! - Logging and span export are separate pipelines; log output never
//!   blocks on the collector
//! - One tracer provider per process, owned by main and handed to
//!   subsystems as named tracers (no global provider is installed)
//! - Span export is batched so the request path never does collector I/O

pub mod logging;
pub mod telemetry;

pub use telemetry::{Telemetry, TelemetryError};
