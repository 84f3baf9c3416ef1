//! Request-path error taxonomy.

use thiserror::Error;

use crate::upstream::FetchError;

/// Everything that can go wrong while handling one forwarded request.
///
/// All variants become a 500 at the HTTP boundary (see `http::response`).
#[derive(Debug, Error)]
pub enum RedactorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("upstream body is not a valid order page: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode order page: {0}")]
    Encode(#[source] serde_json::Error),
}

impl RedactorError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RedactorError::Fetch(FetchError::Timeout(_) | FetchError::ConnectTimeout(_)) => {
                "timeout"
            }
            RedactorError::Fetch(_) => "fetch",
            RedactorError::Decode(_) => "decode",
            RedactorError::Encode(_) => "encode",
        }
    }
}
