//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file content is invalid
    ConfigError(String),
    /// Log level name not recognized
    InvalidLogLevel(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidLogLevel(level) => write!(
                f,
                "Invalid log level: {level} (expected off, error, warn, info, debug or trace)"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
