//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the orders API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, drain grace).
    pub listener: ListenerConfig,

    /// Key-value store settings.
    pub store: StoreConfig,

    /// Telemetry export settings.
    pub telemetry: TelemetryConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9911").
    pub bind_address: String,

    /// Seconds to wait for in-flight requests to drain on shutdown.
    pub shutdown_grace_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9911".to_string(),
            shutdown_grace_secs: 10,
        }
    }
}

/// Key-value store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store address (e.g., "127.0.0.1:6379").
    pub address: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:6379".to_string(),
        }
    }
}

/// Telemetry export configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// OTLP collector endpoint spans are exported to.
    pub collector_endpoint: String,

    /// Service name reported in the span resource.
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            collector_endpoint: "http://127.0.0.1:4317".to_string(),
            service_name: "orders-api".to_string(),
        }
    }
}
