//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and address formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("store address must not be empty")]
    EmptyStoreAddress,

    #[error("collector endpoint must not be empty")]
    EmptyCollectorEndpoint,

    #[error("service name must not be empty")]
    EmptyServiceName,

    #[error("shutdown grace period must be greater than zero")]
    ZeroGracePeriod,
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.shutdown_grace_secs == 0 {
        errors.push(ValidationError::ZeroGracePeriod);
    }
    if config.store.address.is_empty() {
        errors.push(ValidationError::EmptyStoreAddress);
    }
    if config.telemetry.collector_endpoint.is_empty() {
        errors.push(ValidationError::EmptyCollectorEndpoint);
    }
    if config.telemetry.service_name.is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
