//! Errors for configuration loading and validation.

use thiserror::Error;

/// Failure to assemble the application configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A configuration value that loaded but cannot be used.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required setting: {0}")]
    MissingRequired(&'static str),

    #[error("port must be non-zero")]
    InvalidPort,

    #[error("host and port do not form a bindable address")]
    InvalidBindAddress,

    #[error("database url must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("pool floor exceeds pool ceiling")]
    PoolBoundsInverted,

    #[error("pool ceiling exceeds the allowed maximum")]
    PoolTooLarge,
}
