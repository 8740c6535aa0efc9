//! Orders read API.
//!
//! A minimal HTTP endpoint that fetches a single order record from a
//! key-value store by ID and returns it as JSON, with every request and
//! downstream store call wrapped in distributed-tracing spans.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                  ORDERS API                    │
//!                    │                                                │
//!   GET /v1/orders/:id  ┌────────┐    ┌──────────┐    ┌──────────┐   │
//!   ───────────────────▶│  http  │───▶│  orders  │───▶│  store   │───┼──▶ Redis
//!                    │  │ server │    │ handler  │    │  client  │   │
//!   JSON / status    │  └────────┘    └────┬─────┘    └────┬─────┘   │
//!   ◀────────────────┼───────────────      │ span          │ span    │
//!                    │                     ▼               ▼         │
//!                    │               ┌──────────────────────────┐    │
//!                    │               │ observability (telemetry)│────┼──▶ OTLP
//!                    │               └──────────────────────────┘    │    collector
//!                    │               ┌──────────────────────────┐    │
//!                    │               │ lifecycle (drain, close) │    │
//!                    │               └──────────────────────────┘    │
//!                    └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
pub use observability::Telemetry;
pub use store::{StoreClient, StoreError};
