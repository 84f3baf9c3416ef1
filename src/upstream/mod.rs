//! Upstream commerce API access.
//!
//! # Data Flow
//! ```text
//! `url` query parameter
//!     → client.rs (parse_target: absolute http/https only)
//!     → client.rs (GET with bearer credential, 30s deadline)
//!     → raw body bytes, or FetchError
//! ```
//!
//! The credential (credential.rs) is read once at startup and shared
//! read-only by every request.

pub mod client;
pub mod credential;

pub use client::{parse_target, FetchError, UpstreamClient};
pub use credential::{ApiKey, CredentialError};
