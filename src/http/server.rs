//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the forward and preflight handlers
//! - Wire up middleware (request ID, tracing, fixed CORS headers)
//! - Serve on a listener until the shutdown broadcast fires

use axum::{routing::get, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::RedactorConfig;
use crate::http::forward::{forward_handler, preflight_handler};
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::response::CorsHeaders;
use crate::lifecycle::shutdown;
use crate::orders::RedactionPolicy;
use crate::upstream::{ApiKey, UpstreamClient};

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub policy: RedactionPolicy,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS header value: {0}")]
    Cors(#[from] axum::http::header::InvalidHeaderValue),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP server for the redacting proxy.
pub struct HttpServer {
    router: Router,
    config: RedactorConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and credential.
    pub fn new(config: RedactorConfig, api_key: ApiKey) -> Result<Self, ServerError> {
        let cors = CorsHeaders::from_config(&config.cors)?;
        let upstream = UpstreamClient::new(&config.timeouts, api_key)?;

        let state = AppState {
            upstream,
            policy: config.redaction.policy,
        };

        let router = Self::build_router(&cors, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(cors: &CorsHeaders, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(forward_handler).options(preflight_handler))
            .route("/{*path}", get(forward_handler).options(preflight_handler))
            .with_state(state);

        for (name, value) in cors.pairs() {
            router = router.layer(SetResponseHeaderLayer::overriding(name, value));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            policy = %self.config.redaction.policy,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::http::response::FAILURE_BODY;

    fn server(config: RedactorConfig) -> HttpServer {
        HttpServer::new(config, ApiKey::new("test-key")).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_url_is_controlled_failure() {
        let response = server(RedactorConfig::default())
            .router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://d-ginty4.github.io");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type, Authorization");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
        assert!(headers.contains_key(X_REQUEST_ID));
        assert_eq!(body_string(response).await, FAILURE_BODY);
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_controlled_failure() {
        let response = server(RedactorConfig::default())
            .router()
            .oneshot(
                Request::get("/orders?url=ftp://example.com/orders")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, FAILURE_BODY);
    }

    #[tokio::test]
    async fn test_preflight() {
        let mut config = RedactorConfig::default();
        config.cors.allowed_origin = "http://localhost:5173".into();

        let response = server(config)
            .router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_incoming_request_id_is_kept() {
        let response = server(RedactorConfig::default())
            .router()
            .oneshot(
                Request::get("/")
                    .header(X_REQUEST_ID, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[X_REQUEST_ID], "req-123");
    }

    #[test]
    fn test_invalid_cors_rejected_at_construction() {
        let mut config = RedactorConfig::default();
        config.cors.allow_methods = "GET\n".into();
        assert!(matches!(
            HttpServer::new(config, ApiKey::new("k")),
            Err(ServerError::Cors(_))
        ));
    }
}
