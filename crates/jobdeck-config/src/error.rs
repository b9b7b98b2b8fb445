//! Configuration errors.

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the configuration file.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `${VAR}` reference with no matching environment variable.
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// A value failed validation.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
