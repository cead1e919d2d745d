//! Error types for the calendar boundary and the engine.

use chrono::NaiveDate;
use saju_base::SymbolError;
use saju_config::ValidationError;
use thiserror::Error;

/// Failures reported by a calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The date does not exist in the requested calendar.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// The date exists but the provider has no data for it.
    #[error("date out of supported range: {0}")]
    OutOfRange(NaiveDate),
    /// The provider could not answer for another reason.
    #[error("calendar unavailable: {0}")]
    Unavailable(String),
    /// The provider produced a symbol outside the closed tables.
    #[error(transparent)]
    Symbol(#[from] SymbolError),
}

/// Errors surfaced to callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The birth date itself could not be resolved.
    #[error("birth chart: {0}")]
    Provider(#[from] ProviderError),
    #[error("configuration: {0}")]
    Config(#[from] ValidationError),
}
