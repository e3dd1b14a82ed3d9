//! # Tally Auth
//!
//! Administrator membership lookup for the Tally ledger.
//!
//! ## Overview
//!
//! Admin-gated commands need to know whether the caller administers the
//! origin chat. That answer comes from an external oracle (an expensive
//! remote call), wrapped in a process-wide cache with a time-bounded
//! expiry:
//!
//! - [`AdminOracle`] - the trait for "who administers this chat?"
//! - [`AdminCache`] - TTL cache over an oracle; serves fresh entries,
//!   refreshes stale ones
//! - [`HttpAdminOracle`] - Bot API `getChatAdministrators` client
//! - [`StaticOracle`] - fixed admin sets for tests
//!
//! ## Failure policy
//!
//! An oracle failure surfaces as [`AuthError`] and callers fail closed:
//! the command is denied rather than allowed. A stale-but-cached answer is
//! never served past its TTL.

pub mod cache;
pub mod error;
pub mod http;
pub mod oracle;

pub use cache::{AdminCache, AdminSet, DEFAULT_TTL};
pub use error::{AuthError, Result};
pub use http::HttpAdminOracle;
pub use oracle::{AdminOracle, StaticOracle};
