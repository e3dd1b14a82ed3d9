//! # Tally Core
//!
//! Core primitives for the Tally points ledger.
//!
//! ## Overview
//!
//! This crate holds the types every other Tally crate agrees on:
//!
//! - **Identities**: [`UserId`] and [`ChatId`] newtypes for callers and
//!   origin chats, and [`ScoreName`] for the display identity a score is
//!   keyed by.
//! - **Namespace**: [`KeySpace`], the explicit key prefix (`cls:` by
//!   default) that separates ledger keys from anything else sharing the
//!   same store.
//! - **Argument parsing**: the tokenizer and typed-parse step that turns a
//!   raw argument list into a structured name (and optional delta) or an
//!   [`ArgError`].
//!
//! ## Name identity
//!
//! A score name is the literal whitespace-joined token sequence. No case
//! folding and no whitespace normalization happen anywhere: `"Alice  Lee"`
//! (two spaces) and `"Alice Lee"` are two distinct entries.

pub mod args;
pub mod error;
pub mod keyspace;
pub mod types;

pub use args::{parse_name, parse_name_delta, tokenize};
pub use error::ArgError;
pub use keyspace::KeySpace;
pub use types::{ChatId, ScoreName, UserId};
