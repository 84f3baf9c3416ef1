//! Structured logging.
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies to
//! this crate and to `tower_http`. JSON output for production, plain text
//! for development.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("order_redactor={level},tower_http={level}")
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.log_level).into());

    let json = config.json_logs.then(|| fmt::layer().json());
    let text = (!config.json_logs).then(|| fmt::layer());

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
}
