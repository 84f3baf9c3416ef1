//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID / trace / CORS layers)
//!     → request.rs (request ID, `url` query parameter)
//!     → forward.rs (upstream fetch, decode, redact)
//!     → response.rs (JSON body or fixed 500)
//!     → Send to client
//! ```

pub mod forward;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{CorsHeaders, FAILURE_BODY};
pub use server::{AppState, HttpServer, ServerError};
