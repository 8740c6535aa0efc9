//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → orders.rs (validate id, start span, store lookup, classify)
//!     → JSON response / bare status code
//! ```

pub mod orders;
pub mod server;

pub use server::{build_router, AppState, HttpServer};
