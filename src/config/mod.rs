//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RedactorConfig (validated, immutable)
//!     → handed to HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_config, ConfigError};
pub use schema::{
    CorsConfig, ListenerConfig, ObservabilityConfig, RedactionConfig, RedactorConfig,
    TimeoutConfig, UpstreamConfig,
};
pub use validation::ValidationError;
