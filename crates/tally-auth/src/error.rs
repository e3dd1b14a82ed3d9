//! Error types for the auth module.

use thiserror::Error;

/// Errors that can occur during administrator lookup.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The oracle endpoint could not be reached (timeout, connect failure).
    #[error("authorization oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle answered but the request failed (HTTP status, API error).
    #[error("authorization request failed: {0}")]
    RequestFailed(String),

    /// The oracle's response could not be decoded.
    #[error("invalid authorization response: {0}")]
    InvalidResponse(String),
}

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
