//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use tally_auth::StaticOracle;
use tally_core::{ChatId, ScoreName, UserId};
use tally_ledger::{Ledger, LedgerConfig};
use tally_store::{MemoryStore, ScoreStore};

/// The chat every fixture request originates from.
pub const CHAT: ChatId = ChatId(-1001);

/// A caller the fixture oracle recognizes as an administrator.
pub const ADMIN: UserId = UserId(1);

/// A caller with no administrator rights.
pub const MEMBER: UserId = UserId(2);

/// A test fixture with a memory-backed ledger and a static oracle.
///
/// The oracle knows exactly one chat ([`CHAT`]) with exactly one admin
/// ([`ADMIN`]).
pub struct TestFixture {
    pub ledger: Arc<Ledger<MemoryStore, StaticOracle>>,
}

impl TestFixture {
    /// Create a fresh fixture with an empty store.
    pub fn new() -> Self {
        let oracle = StaticOracle::with_chat(CHAT, [ADMIN]);
        Self {
            ledger: Arc::new(Ledger::new(MemoryStore::new(), oracle, LedgerConfig::default())),
        }
    }

    /// Create a fixture whose oracle always fails, for fail-closed tests.
    pub fn with_failing_oracle() -> Self {
        Self {
            ledger: Arc::new(Ledger::new(
                MemoryStore::new(),
                StaticOracle::failing(),
                LedgerConfig::default(),
            )),
        }
    }

    /// Write a score directly into the store, bypassing the command path.
    pub async fn seed(&self, name: &str, score: i64) {
        let key = self.ledger.keyspace().key(&ScoreName::from(name));
        self.ledger
            .store()
            .set(&key, score)
            .await
            .expect("seeding a memory store cannot fail");
    }

    /// Read a score directly from the store, bypassing the command path.
    pub async fn score_of(&self, name: &str) -> Option<i64> {
        let key = self.ledger.keyspace().key(&ScoreName::from(name));
        self.ledger.store().get(&key).await.ok()
    }

    /// Build an argument token list from string slices.
    pub fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
