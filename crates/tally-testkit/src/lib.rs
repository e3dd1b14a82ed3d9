//! # Tally Testkit
//!
//! Testing utilities for the Tally ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a memory-backed ledger with a static oracle, seeded
//!   callers, and seeding helpers
//! - **Generators**: proptest strategies for names, deltas, and entry
//!   sets
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use tally_testkit::TestFixture;
//!
//! # async fn example() {
//! let fixture = TestFixture::new();
//! fixture.seed("Alice", 50).await;
//! let args = TestFixture::args(&["Alice"]);
//! let reply = fixture.ledger.show(&args).await.unwrap();
//! # }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tally_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn names_join_cleanly(tokens in generators::name_tokens()) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{TestFixture, ADMIN, CHAT, MEMBER};
