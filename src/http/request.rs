//! Request identification and query parsing.
//!
//! # Responsibilities
//! - Generate a UUID v4 `x-request-id` for every inbound request
//! - Read the request ID back for logging
//! - Extract the `url` parameter from the raw query string
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Query parsing never fails; a malformed query just yields no `url`

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Name of the query parameter that carries the upstream target.
pub const TARGET_PARAM: &str = "url";

/// Generates UUID v4 request IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Request ID for log lines, or `unknown` if the layer did not run.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// First non-empty `url` value in a form-urlencoded query string.
///
/// Only `&` separates pairs, so an unencoded nested query such as
/// `url=https://host/orders?cursor=abc` keeps its inner `?cursor=abc`.
pub fn target_param(raw_query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(raw_query?.as_bytes())
        .find(|(key, value)| key == TARGET_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
