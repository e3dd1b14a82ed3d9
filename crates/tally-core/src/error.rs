//! Error types for argument parsing.

use thiserror::Error;

/// Errors produced by the typed argument parse step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// No tokens were supplied where a name was expected.
    #[error("expected a name")]
    MissingName,

    /// Fewer than two tokens where a name plus delta was expected.
    #[error("expected a name followed by an integer delta")]
    MissingDelta,

    /// The final token did not parse as an integer.
    #[error("`{0}` is not a valid integer")]
    InvalidDelta(String),
}
