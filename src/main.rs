//! Order Redactor
//!
//! A single-endpoint proxy built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                ┌──────────────────────────────────────────┐
//!     GET /?url=...  ───────▶│ request-id → trace → CORS headers        │
//!                            │        │                                 │
//!                            │        ▼                                 │
//!                            │  forward handler ──▶ upstream client ────┼──▶ Commerce API
//!                            │        │               (Bearer, 30s)     │
//!                            │        ▼                                 │
//!                            │  decode ResultPage → RedactionPolicy     │
//!     200 JSON / 500 ◀───────┤        │                                 │
//!                            └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use order_redactor::config::load_or_default;
use order_redactor::http::HttpServer;
use order_redactor::lifecycle::{signals, Shutdown};
use order_redactor::observability::{logging, metrics};
use order_redactor::upstream::ApiKey;

#[derive(Parser)]
#[command(name = "order-redactor")]
#[command(about = "Forwards order-page requests and redacts customer PII", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;
    logging::init_logging(&config.observability)?;

    tracing::info!("order-redactor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        allowed_origin = %config.cors.allowed_origin,
        policy = %config.redaction.policy,
        "Configuration loaded"
    );

    let api_key = ApiKey::from_env(&config.upstream.api_key_env)?;

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::forward_to(shutdown));

    let server = HttpServer::new(config, api_key)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
