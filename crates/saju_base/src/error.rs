//! Error types for symbol parsing.
//!
//! Every algorithm in this crate works on closed enums, so these errors can
//! only surface at the parsing edge (characters, canonical names, pillar
//! strings). Once a value is parsed, no later step can fail on it.

use thiserror::Error;

/// A character or name outside the closed stem/branch domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SymbolError {
    /// Character is not one of the 10 heavenly stems.
    #[error("unknown stem symbol: {0:?}")]
    UnknownStem(char),
    /// Character is not one of the 12 earthly branches.
    #[error("unknown branch symbol: {0:?}")]
    UnknownBranch(char),
    /// Canonical id did not match any variant.
    #[error("unknown canonical name: {0:?}")]
    UnknownName(String),
    /// A pillar string must be exactly one stem followed by one branch.
    #[error("malformed pillar: {0:?}")]
    MalformedPillar(String),
    /// Stem and branch polarities differ, so the pair is not in the 60-cycle.
    #[error("stem and branch polarity differ: {0:?}")]
    MismatchedPolarity(String),
}
