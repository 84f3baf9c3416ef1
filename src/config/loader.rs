//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RedactorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RedactorConfig, ConfigError> {
    let config: RedactorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RedactorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load from `path` if given, otherwise validate and return the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<RedactorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = RedactorConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}
