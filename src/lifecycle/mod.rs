//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse args → Load config → Validate → Read credential → Bind → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → broadcast → stop accepting → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
