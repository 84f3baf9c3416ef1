//! Response construction.
//!
//! # Responsibilities
//! - Hold the fixed CORS header set sent on every response
//! - Map request-path errors to a controlled 500
//!
//! # Design Decisions
//! - Failure bodies are a fixed string; details go to the log only
//! - CORS headers are applied by a layer, so error and success
//!   responses carry the same set

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::CorsConfig;
use crate::error::RedactorError;

/// Body returned for every failed forward.
pub const FAILURE_BODY: &str = "Unable to make request";

/// Validated CORS header values.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    pub allow_origin: HeaderValue,
    pub allow_headers: HeaderValue,
    pub allow_methods: HeaderValue,
}

impl CorsHeaders {
    pub fn from_config(config: &CorsConfig) -> Result<Self, header::InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(&config.allowed_origin)?,
            allow_headers: HeaderValue::from_str(&config.allow_headers)?,
            allow_methods: HeaderValue::from_str(&config.allow_methods)?,
        })
    }

    /// Header name/value pairs in a fixed order.
    pub fn pairs(&self) -> [(HeaderName, HeaderValue); 3] {
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone()),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone()),
            (header::ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone()),
        ]
    }
}

/// 200 with a JSON body.
pub fn json_ok(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

/// Fixed 500 failure response.
pub fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
        FAILURE_BODY,
    )
        .into_response()
}

impl IntoResponse for RedactorError {
    fn into_response(self) -> Response {
        failure()
    }
}
