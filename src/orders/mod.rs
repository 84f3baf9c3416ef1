//! Order data model and redaction.
//!
//! # Data Flow
//! ```text
//! upstream body (JSON)
//!     → model.rs (decode into ResultPage)
//!     → redact.rs (RedactionPolicy::apply)
//!     → serialized response body
//! ```

pub mod model;
pub mod redact;

pub use model::{Address, LineItem, Money, Order, Pagination, ResultPage, VariantOption};
pub use redact::{redact_order, redact_page, RedactionPolicy};
