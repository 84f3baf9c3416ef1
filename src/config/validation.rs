//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! reported, not just the first one.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::RedactorConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: {value:?} is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("timeouts.connect_secs ({connect}) exceeds timeouts.request_secs ({request})")]
    ConnectExceedsRequest { connect: u64, request: u64 },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field}: {value:?} is not a valid header value")]
    InvalidHeader { field: &'static str, value: String },

    #[error("observability.log_level: unknown level {0:?}")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RedactorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.upstream.api_key_env.trim().is_empty() {
        errors.push(ValidationError::Empty("upstream.api_key_env"));
    }

    let timeouts = &config.timeouts;
    if timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.connect_secs"));
    }
    if timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    if timeouts.connect_secs > timeouts.request_secs && timeouts.request_secs > 0 {
        errors.push(ValidationError::ConnectExceedsRequest {
            connect: timeouts.connect_secs,
            request: timeouts.request_secs,
        });
    }

    let cors = &config.cors;
    for (field, value) in [
        ("cors.allowed_origin", &cors.allowed_origin),
        ("cors.allow_headers", &cors.allow_headers),
        ("cors.allow_methods", &cors.allow_methods),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::Empty(field));
        } else if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::InvalidHeader {
                field,
                value: value.clone(),
            });
        }
    }

    let obs = &config.observability;
    if !LOG_LEVELS.contains(&obs.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(obs.log_level.clone()));
    }
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: obs.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
