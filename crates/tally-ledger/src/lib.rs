//! # Tally Ledger
//!
//! The ledger service: permission-gated operations over per-user score
//! counters, plus the leaderboard engine.
//!
//! ## Overview
//!
//! [`Ledger`] is the service context shared by all command handlers. It
//! owns the store handle, the admin cache, and the key namespace, and it
//! exposes one method per command:
//!
//! - `adjust` (admin) - add a signed delta to a user's score, creating the
//!   entry on first adjust
//! - `show` - read a user's score
//! - `reset` (admin) - set a user's score to zero, creating if absent
//! - `delete` (admin) - remove a user's entry
//! - `users` (admin) - list all known names
//! - `rank` - top-5 positive and bottom-5 negative leaderboards
//!
//! Every operation returns the reply string for the origin chat, or a
//! [`LedgerError`] whose [`LedgerError::user_reply`] is the reply for the
//! failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally_auth::StaticOracle;
//! use tally_core::{ChatId, UserId};
//! use tally_ledger::{Ledger, LedgerConfig};
//! use tally_store::MemoryStore;
//!
//! async fn example() {
//!     let chat = ChatId::new(-1001);
//!     let admin = UserId::new(7);
//!     let oracle = StaticOracle::with_chat(chat, [admin]);
//!     let ledger = Ledger::new(MemoryStore::new(), oracle, LedgerConfig::default());
//!
//!     let args = vec!["Alice".to_string(), "5".to_string()];
//!     let reply = ledger.adjust(chat, admin, &args).await.unwrap();
//!     println!("{reply}");
//! }
//! ```

pub mod error;
pub mod rank;
pub mod service;

pub use error::{LedgerError, Result};
pub use rank::Leaderboard;
pub use service::{Ledger, LedgerConfig};
