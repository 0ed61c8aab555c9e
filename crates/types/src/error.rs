//! Error types for the environment configuration provider

use thiserror::Error;

/// Configuration errors
///
/// All of these surface at startup. There is no runtime recovery path: once a
/// configuration has been installed it never changes, so a `ConfigError` means
/// the process should not come up.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Parse error
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Missing required field
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// Invalid value
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Validation error
    #[error("Configuration validation error: {field}: {message}")]
    ValidationError { field: String, message: String },

    /// Loaded file declares a different deployment target than requested
    #[error("Deployment target mismatch: requested {requested}, file declares {found}")]
    TargetMismatch { requested: String, found: String },

    /// Process-wide configuration installed more than once
    #[error("Environment configuration is already initialized")]
    AlreadyInitialized,

    /// I/O error while reading or writing configuration files
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
