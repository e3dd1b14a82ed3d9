//! # Tally Dispatch
//!
//! Command routing for the Tally ledger.
//!
//! ## Overview
//!
//! The dispatcher is the seam between a chat transport and the ledger
//! service. The transport's job ends at producing a [`CommandRequest`]
//! (command name, caller identity, origin chat, argument tokens); the
//! dispatcher's job is everything after:
//!
//! - [`Command`] - the eight command names
//! - [`CommandRequest`] - the request envelope, parsed from raw text
//! - [`Router`] - maps a request to the matching ledger operation and
//!   turns every failure into its user-visible reply
//! - [`Responder`] - the outbound half of the transport, delivering one
//!   reply string to the origin chat
//!
//! Every dispatched request produces exactly one reply: the operation's
//! reply on success, the error's reply text on failure. Failures are also
//! logged, once each.

pub mod command;
pub mod error;
pub mod router;
pub mod transport;

pub use command::{Command, CommandRequest};
pub use error::{DispatchError, Result};
pub use router::Router;
pub use transport::{FailingResponder, MemoryResponder, Responder};
