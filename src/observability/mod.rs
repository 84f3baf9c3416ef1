//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request path produces:
//!     → logging.rs (structured log events, request ID fields)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (text or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
