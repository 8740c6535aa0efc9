//! Key-value store subsystem.
//!
//! # Data Flow
//! ```text
//! Request handler
//!     → client.rs (GET by key, child span per call)
//!     → redis connection (multiplexed, shared across requests)
//! ```
//!
//! # Design Decisions
//! - One multiplexed connection shared read-only by all request tasks;
//!   pipelining and locking live inside the redis crate
//! - "Key absent" is a typed error variant, not a sentinel value, so
//!   callers branch exhaustively
//! - Connectivity is probed at construction; an unreachable store fails
//!   startup instead of the first request

pub mod client;

pub use client::{StoreClient, StoreError};
