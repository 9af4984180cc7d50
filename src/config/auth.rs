//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration: the shared secret gating every route.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Bearer token clients must present
    pub api_token: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_token.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_TOKEN"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_missing_token() {
        let config = AuthConfig {
            api_token: String::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_token() {
        let config = AuthConfig {
            api_token: "secret".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
