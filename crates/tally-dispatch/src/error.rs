//! Error types for the dispatch module.

use thiserror::Error;

/// Errors that can occur during command dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The text is not a command (no leading slash).
    #[error("not a command: {0:?}")]
    NotACommand(String),

    /// The command name is not one the ledger serves.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// The responder failed to deliver the reply.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
