//! Outbound HTTP client for the commerce API.

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::AUTHORIZATION;
use thiserror::Error;
use url::Url;

use crate::config::TimeoutConfig;
use crate::upstream::credential::ApiKey;

/// The outbound request could not be made or completed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("missing `url` query parameter")]
    MissingUrl,

    #[error("invalid target url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("upstream connect timed out after {0} seconds")]
    ConnectTimeout(u64),

    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Parse and check the `url` query parameter.
pub fn parse_target(raw: Option<&str>) -> Result<Url, FetchError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(FetchError::MissingUrl)?;

    let url = Url::parse(raw).map_err(|source| FetchError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

/// Client that performs exactly one authenticated GET per call.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    api_key: ApiKey,
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
}

impl UpstreamClient {
    pub fn new(timeouts: &TimeoutConfig, api_key: ApiKey) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;

        Ok(Self {
            http,
            api_key,
            connect_timeout_secs: timeouts.connect_secs,
            request_timeout_secs: timeouts.request_secs,
        })
    }

    /// GET `target` with the bearer credential and return the raw body.
    ///
    /// Non-success statuses are failures; their bodies are discarded.
    pub async fn fetch(&self, target: &Url) -> Result<Bytes, FetchError> {
        let response = self
            .http
            .get(target.clone())
            .header(AUTHORIZATION, self.api_key.bearer())
            .send()
            .await
            .map_err(|e| self.classify(e, FetchError::Transport))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|e| self.classify(e, FetchError::Body))
    }

    fn classify(&self, err: reqwest::Error, otherwise: fn(reqwest::Error) -> FetchError) -> FetchError {
        if err.is_timeout() {
            self.timeout_error(err.is_connect())
        } else {
            otherwise(err)
        }
    }

    /// Timeout error carrying the deadline that actually fired.
    fn timeout_error(&self, during_connect: bool) -> FetchError {
        if during_connect {
            FetchError::ConnectTimeout(self.connect_timeout_secs)
        } else {
            FetchError::Timeout(self.request_timeout_secs)
        }
    }
}
