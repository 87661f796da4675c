//! Domain-specific error types for reasoning-timeline
//!
//! The step pipeline itself never fails; these cover configuration loading.

use thiserror::Error;

/// Main error type for reasoning-timeline
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl From<toml::de::Error> for TimelineError {
    fn from(err: toml::de::Error) -> Self {
        TimelineError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

/// Result type alias for reasoning-timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
