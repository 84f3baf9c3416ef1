//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML, and every
//! field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::orders::RedactionPolicy;

/// Origin allowed to read responses cross-origin unless overridden.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://d-ginty4.github.io";

/// Root configuration for the redacting proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RedactorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream API credential lookup.
    pub upstream: UpstreamConfig,

    /// Outbound timeouts.
    pub timeouts: TimeoutConfig,

    /// Fixed CORS response headers.
    pub cors: CorsConfig,

    /// Which transform runs on each order page.
    pub redaction: RedactionConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Environment variable holding the bearer token.
    pub api_key_env: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key_env: "SQUARESPACE_KEY".to_string(),
        }
    }
}

/// Timeouts applied to the outbound call.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total time for the upstream request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Header values attached verbatim to every response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
    pub allow_headers: String,
    pub allow_methods: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            allow_headers: "Content-Type, Authorization".to_string(),
            allow_methods: "GET, OPTIONS".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RedactionConfig {
    /// `redact-pii` (default) or `pass-through`.
    pub policy: RedactionPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: RedactorConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.api_key_env, "SQUARESPACE_KEY");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.cors.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(config.cors.allow_methods, "GET, OPTIONS");
        assert_eq!(config.redaction.policy, RedactionPolicy::RedactPii);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: RedactorConfig = toml::from_str(
            r#"
            [cors]
            allowed_origin = "https://shop.example.com"

            [redaction]
            policy = "pass-through"

            [timeouts]
            request_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.cors.allowed_origin, "https://shop.example.com");
        assert_eq!(config.cors.allow_headers, "Content-Type, Authorization");
        assert_eq!(config.redaction.policy, RedactionPolicy::PassThrough);
        assert_eq!(config.timeouts.request_secs, 10);
        assert_eq!(config.timeouts.connect_secs, 5);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<RedactorConfig, _> = toml::from_str("[redaction]\npolicy = \"shred\"\n");
        assert!(result.is_err());
    }
}
