//! The Ledger: the service context shared by all command handlers.
//!
//! Holds the store handle, the admin cache, and the key namespace. Each
//! command operation validates its arguments, enforces authorization where
//! required, reads or mutates the store, and produces the reply string.

use std::sync::Arc;
use std::time::Duration;

use tally_auth::{AdminCache, AdminOracle, DEFAULT_TTL};
use tally_core::{args, ChatId, KeySpace, UserId};
use tally_store::{ScoreStore, StoreError};

use crate::error::{LedgerError, Result};
use crate::rank::Leaderboard;

const USAGE_ADJUST: &str = "/adjust <name> <delta>";
const USAGE_SHOW: &str = "/show <name>";
const USAGE_RESET: &str = "/reset <name>";
const USAGE_DELETE: &str = "/delete <name>";

/// Configuration for the Ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Key namespace for score entries.
    pub keyspace: KeySpace,
    /// Freshness bound for cached admin sets.
    pub cache_ttl: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            keyspace: KeySpace::default(),
            cache_ttl: DEFAULT_TTL,
        }
    }
}

/// The ledger service.
///
/// Generic over the store backend and the admin oracle so tests run
/// against in-memory implementations of both.
pub struct Ledger<S: ScoreStore, O: AdminOracle> {
    /// The storage backend.
    store: Arc<S>,
    /// Process-wide admin cache.
    auth: AdminCache<O>,
    /// Key namespace.
    keyspace: KeySpace,
}

impl<S: ScoreStore, O: AdminOracle> Ledger<S, O> {
    /// Create a new ledger service.
    pub fn new(store: S, oracle: O, config: LedgerConfig) -> Self {
        Self {
            store: Arc::new(store),
            auth: AdminCache::with_ttl(oracle, config.cache_ttl),
            keyspace: config.keyspace,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the key namespace.
    pub fn keyspace(&self) -> &KeySpace {
        &self.keyspace
    }

    /// Fail with `PermissionDenied` unless `caller` administers `chat`.
    ///
    /// Oracle failures propagate as `AuthUnavailable`: the command fails
    /// closed, never open.
    async fn require_admin(&self, chat: ChatId, caller: UserId) -> Result<()> {
        if self.auth.is_admin(chat, caller).await? {
            Ok(())
        } else {
            Err(LedgerError::PermissionDenied)
        }
    }

    /// Adjust a user's points by a signed delta. Admin only.
    ///
    /// A first adjust creates the entry with the delta as its value;
    /// later adjusts accumulate atomically.
    pub async fn adjust(&self, chat: ChatId, caller: UserId, tokens: &[String]) -> Result<String> {
        self.require_admin(chat, caller).await?;

        let (name, delta) = args::parse_name_delta(tokens).map_err(|_| {
            LedgerError::InvalidArgument {
                usage: USAGE_ADJUST,
            }
        })?;

        let total = self.store.incr(&self.keyspace.key(&name), delta).await?;
        tracing::debug!(%name, delta, total, "adjusted points");

        let magnitude = delta.unsigned_abs();
        if delta < 0 {
            Ok(format!(
                "Deducted {magnitude} points from {name}.\nTheir total is now {total} points."
            ))
        } else {
            Ok(format!(
                "Added {magnitude} points to {name}.\nTheir total is now {total} points."
            ))
        }
    }

    /// Show a user's current points. No authorization required.
    pub async fn show(&self, tokens: &[String]) -> Result<String> {
        let name = args::parse_name(tokens).map_err(|_| LedgerError::InvalidArgument {
            usage: USAGE_SHOW,
        })?;

        match self.store.get(&self.keyspace.key(&name)).await {
            Ok(score) => Ok(format!("\"{name}\" has {score} points.")),
            Err(StoreError::NotFound(_)) => Err(LedgerError::NotFound(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Reset a user's points to zero, creating the entry if absent.
    /// Admin only.
    pub async fn reset(&self, chat: ChatId, caller: UserId, tokens: &[String]) -> Result<String> {
        self.require_admin(chat, caller).await?;

        let name = args::parse_name(tokens).map_err(|_| LedgerError::InvalidArgument {
            usage: USAGE_RESET,
        })?;

        self.store.set(&self.keyspace.key(&name), 0).await?;
        Ok(format!("\"{name}\" has been reset to 0 points."))
    }

    /// Delete a user's entry. Admin only.
    ///
    /// Fails for names that were never adjusted; deletion only makes
    /// sense for an existing entry.
    pub async fn delete(&self, chat: ChatId, caller: UserId, tokens: &[String]) -> Result<String> {
        self.require_admin(chat, caller).await?;

        let name = args::parse_name(tokens).map_err(|_| LedgerError::InvalidArgument {
            usage: USAGE_DELETE,
        })?;

        match self.store.delete(&self.keyspace.key(&name)).await {
            Ok(()) => Ok(format!("Removed \"{name}\" from the ledger.")),
            Err(StoreError::NotFound(_)) => Err(LedgerError::NeverAdjusted(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// List all known names, one per line, in scan order. Admin only.
    pub async fn users(&self, chat: ChatId, caller: UserId) -> Result<String> {
        self.require_admin(chat, caller).await?;

        let entries = self.store.scan(self.keyspace.prefix()).await?;
        let names: Vec<&str> = entries
            .iter()
            .filter_map(|(key, _)| self.keyspace.strip(key))
            .collect();

        if names.is_empty() {
            return Ok("No users yet.".to_string());
        }
        Ok(names.join("\n"))
    }

    /// Render the top-5 and bottom-5 leaderboards. No authorization
    /// required.
    pub async fn rank(&self) -> Result<String> {
        let entries = self.store.scan(self.keyspace.prefix()).await?;
        let stripped: Vec<(String, i64)> = entries
            .iter()
            .filter_map(|(key, score)| {
                self.keyspace.strip(key).map(|name| (name.to_string(), *score))
            })
            .collect();

        Ok(Leaderboard::compute(&stripped).render())
    }
}
