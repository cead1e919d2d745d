//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Semantic problems with otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("decade count must be in 1..=12, got {0}")]
    DecadeCount(u32),

    #[error("{field} must be a month in 1..=12, got {value}")]
    ProbeMonth { field: &'static str, value: u32 },

    #[error("{field} must be a day in 1..=28, got {value}")]
    ProbeDay { field: &'static str, value: u32 },

    #[error("annual window of {0} years exceeds 60")]
    WindowTooLarge(u32),

    #[error("default timezone must not be empty")]
    EmptyTimezone,

    #[error("unknown hour probe must be HH:MM, got {0:?}")]
    HourProbe(String),
}
