//! The forwarding handler: fetch, decode, redact, respond.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::RedactorError;
use crate::http::request::{request_id, target_param};
use crate::http::response::json_ok;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::orders::{RedactionPolicy, ResultPage};
use crate::upstream::parse_target;

/// `GET /?url=<target>`
pub async fn forward_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    match forward(&state, query.as_deref(), &request_id).await {
        Ok(body) => {
            metrics::record_request("ok", 200, start_time);
            json_ok(body)
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "Forward failed"
            );
            metrics::record_request(e.kind(), 500, start_time);
            e.into_response()
        }
    }
}

/// `OPTIONS` preflight. CORS headers are added by the router layers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn forward(
    state: &AppState,
    raw_query: Option<&str>,
    request_id: &str,
) -> Result<Vec<u8>, RedactorError> {
    let target = parse_target(target_param(raw_query).as_deref())?;

    tracing::debug!(
        request_id = %request_id,
        host = target.host_str().unwrap_or_default(),
        path = target.path(),
        "Fetching upstream page"
    );

    let body = state.upstream.fetch(&target).await?;
    let page: ResultPage = serde_json::from_slice(&body).map_err(RedactorError::Decode)?;

    let page = state.policy.apply(page);
    if state.policy == RedactionPolicy::RedactPii {
        metrics::record_orders_redacted(page.len());
    }

    tracing::info!(
        request_id = %request_id,
        orders = page.len(),
        has_next = page.pagination.has_next,
        policy = %state.policy,
        "Order page forwarded"
    );

    serde_json::to_vec(&page).map_err(RedactorError::Encode)
}
