//! Error types for the ledger service.

use thiserror::Error;

use tally_auth::AuthError;
use tally_store::StoreError;

/// Errors that can occur during ledger operations.
///
/// `Display` is the terse form for logs; [`LedgerError::user_reply`] is
/// the corresponding user-visible reply text.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Malformed or missing command arguments.
    #[error("invalid arguments, usage: {usage}")]
    InvalidArgument { usage: &'static str },

    /// A non-admin invoked an admin-only operation.
    #[error("caller is not a chat administrator")]
    PermissionDenied,

    /// A query referenced a name with no entry.
    #[error("no entry for {0:?}")]
    NotFound(String),

    /// A delete referenced a name that was never adjusted.
    #[error("nothing to delete for {0:?}")]
    NeverAdjusted(String),

    /// The authorization oracle could not answer; the operation fails
    /// closed.
    #[error("authorization unavailable: {0}")]
    AuthUnavailable(#[from] AuthError),

    /// The score store failed; fatal for this command only.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// The reply delivered to the origin chat for this failure.
    pub fn user_reply(&self) -> String {
        match self {
            LedgerError::InvalidArgument { usage } => {
                format!("Please enter a valid command.\nUsage: {usage}")
            }
            LedgerError::PermissionDenied => {
                "Only chat administrators can do that.".to_string()
            }
            LedgerError::NotFound(name) => format!(
                "No points entry for \"{name}\". Either the name is misspelled or they have no points yet."
            ),
            LedgerError::NeverAdjusted(name) => format!(
                "\"{name}\" has no points entry yet. Adjust their points before deleting."
            ),
            LedgerError::AuthUnavailable(_) => {
                "Could not verify chat administrators right now. Please try again later.".to_string()
            }
            LedgerError::Store(_) => {
                "The points store is unavailable right now. Please try again later.".to_string()
            }
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
