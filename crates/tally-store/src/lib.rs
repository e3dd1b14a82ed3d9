//! # Tally Store
//!
//! Storage abstraction for the Tally points ledger. Provides a trait-based
//! interface over a namespaced key-value space of integer counters, with
//! SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts counter storage behind the [`ScoreStore`]
//! trait, keeping the ledger backend-agnostic. The primary implementation
//! is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`ScoreStore`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally_store::{ScoreStore, SqliteStore};
//!
//! async fn example() {
//!     let store = SqliteStore::open("tally.db").unwrap();
//!
//!     let total = store.incr("cls:Alice", 5).await.unwrap();
//!     assert_eq!(total, 5);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Atomic increment**: [`ScoreStore::incr`] is the single-key atomic
//!   unit. Concurrent increments against the same key never lose updates.
//! - **Absent vs zero**: a missing key means "never adjusted"; a key
//!   holding `0` means "adjusted and currently net-zero". `get` and
//!   `delete` fail with [`StoreError::NotFound`] on absent keys.
//! - **String values**: persisted values are the decimal string form of
//!   the score, so the on-disk layout matches any string-valued key-value
//!   backend.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ScoreStore;
