//! Order Redactor Library
//!
//! Forwards a GET to the commerce API named by the `url` query parameter,
//! strips customer PII from the returned order page, and replies with fixed
//! CORS headers.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod orders;
pub mod upstream;

pub use config::RedactorConfig;
pub use error::RedactorError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use orders::RedactionPolicy;
