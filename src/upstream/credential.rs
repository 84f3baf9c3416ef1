//! Bearer credential for the upstream API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("environment variable {0} is not set")]
    Missing(String),

    #[error("environment variable {0} is empty")]
    Empty(String),

    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// API key injected as `Authorization: Bearer <key>`.
///
/// Read once at startup and immutable afterwards. `Debug` never prints the
/// secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from the named environment variable.
    pub fn from_env(var: &str) -> Result<Self, CredentialError> {
        match std::env::var(var) {
            Ok(key) if key.trim().is_empty() => Err(CredentialError::Empty(var.to_string())),
            Ok(key) => Ok(Self(key)),
            Err(std::env::VarError::NotPresent) => Err(CredentialError::Missing(var.to_string())),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(CredentialError::NotUnicode(var.to_string()))
            }
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_value() {
        assert_eq!(ApiKey::new("abc123").bearer(), "Bearer abc123");
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", ApiKey::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_missing_variable() {
        let err = ApiKey::from_env("ORDER_REDACTOR_TEST_UNSET_KEY_VAR").unwrap_err();
        assert!(matches!(err, CredentialError::Missing(_)));
    }
}
