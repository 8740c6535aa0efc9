//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init telemetry → Connect store → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections →
//!     Close store → Flush telemetry
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: telemetry first, then store, then listener
//! - Ordered shutdown: the reverse, with a bounded drain grace period
//! - Startup failures are fatal; shutdown failures are combined and
//!   reported together

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
