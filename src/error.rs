//! Error types for the telemetry engine.

use thiserror::Error;

/// Result type alias for telemetry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for telemetry engine operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A threshold value failed validation
    #[error("Invalid threshold for {metric}: {reason}")]
    InvalidThreshold { metric: String, reason: String },

    /// The tick runner was started twice
    #[error("Telemetry runner is already running")]
    AlreadyRunning,

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
