//! TTL cache over an admin oracle.
//!
//! The original memoizing-decorator behavior, reimplemented as an explicit
//! cache object: a map from chat identity to `(admin set, refreshed-at)`,
//! rebuilt lazily through the oracle when an entry ages past the TTL.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use tally_core::{ChatId, UserId};

use crate::error::Result;
use crate::oracle::AdminOracle;

/// Default freshness bound for cached admin sets.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// A cached admin set with its refresh timestamp.
#[derive(Debug, Clone)]
pub struct AdminSet {
    admins: HashSet<UserId>,
    refreshed_at: Instant,
}

impl AdminSet {
    fn new(admins: HashSet<UserId>) -> Self {
        Self {
            admins,
            refreshed_at: Instant::now(),
        }
    }

    /// Whether this entry is still trustworthy under the given TTL.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.refreshed_at.elapsed() < ttl
    }

    /// The cached admin identities.
    pub fn admins(&self) -> &HashSet<UserId> {
        &self.admins
    }
}

/// Process-wide TTL cache over an [`AdminOracle`].
///
/// Entries are keyed by chat and only ever replaced by a TTL-triggered
/// refresh, never proactively evicted. The refresh happens under the
/// write lock with a double-check, so concurrent lookups for the same
/// chat trigger at most one in-flight oracle call.
pub struct AdminCache<O> {
    oracle: O,
    ttl: Duration,
    entries: RwLock<HashMap<ChatId, AdminSet>>,
}

impl<O: AdminOracle> AdminCache<O> {
    /// Create a cache with the default TTL.
    pub fn new(oracle: O) -> Self {
        Self::with_ttl(oracle, DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(oracle: O, ttl: Duration) -> Self {
        Self {
            oracle,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the admin set for a chat, refreshing through the oracle if the
    /// cached entry is missing or stale.
    pub async fn get_or_refresh(&self, chat: ChatId) -> Result<HashSet<UserId>> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&chat) {
                if entry.is_fresh(self.ttl) {
                    return Ok(entry.admins.clone());
                }
            }
        }

        let mut entries = self.entries.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(entry) = entries.get(&chat) {
            if entry.is_fresh(self.ttl) {
                return Ok(entry.admins.clone());
            }
        }

        let admins = self.oracle.admins_of(chat).await?;
        tracing::debug!(%chat, admins = admins.len(), "refreshed admin set");
        entries.insert(chat, AdminSet::new(admins.clone()));
        Ok(admins)
    }

    /// Whether `user` currently administers `chat`.
    ///
    /// Oracle failures propagate as errors; the caller decides, and must
    /// fail closed.
    pub async fn is_admin(&self, chat: ChatId, user: UserId) -> Result<bool> {
        let admins = self.get_or_refresh(chat).await?;
        Ok(admins.contains(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::StaticOracle;

    const CHAT: ChatId = ChatId(-100);
    const ADMIN: UserId = UserId(1);
    const MEMBER: UserId = UserId(2);

    #[tokio::test]
    async fn test_cache_serves_without_reconsulting() {
        let cache = AdminCache::new(StaticOracle::with_chat(CHAT, [ADMIN]));

        assert!(cache.is_admin(CHAT, ADMIN).await.unwrap());
        assert!(!cache.is_admin(CHAT, MEMBER).await.unwrap());
        assert!(cache.is_admin(CHAT, ADMIN).await.unwrap());

        // Three checks, one oracle call.
        assert_eq!(cache.oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_triggers_refresh() {
        // A zero TTL makes every cached entry immediately stale.
        let cache = AdminCache::with_ttl(
            StaticOracle::with_chat(CHAT, [ADMIN]),
            Duration::ZERO,
        );

        assert!(cache.is_admin(CHAT, ADMIN).await.unwrap());
        assert!(cache.is_admin(CHAT, ADMIN).await.unwrap());
        assert_eq!(cache.oracle.call_count(), 2);
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates() {
        let cache = AdminCache::new(StaticOracle::failing());
        assert!(cache.is_admin(CHAT, ADMIN).await.is_err());
    }

    #[tokio::test]
    async fn test_distinct_chats_cached_separately() {
        let other = ChatId::new(-200);
        let mut map = HashMap::new();
        map.insert(CHAT, HashSet::from([ADMIN]));
        map.insert(other, HashSet::from([MEMBER]));
        let cache = AdminCache::new(StaticOracle::new(map));

        assert!(cache.is_admin(CHAT, ADMIN).await.unwrap());
        assert!(cache.is_admin(other, MEMBER).await.unwrap());
        assert!(!cache.is_admin(other, ADMIN).await.unwrap());
        assert_eq!(cache.oracle.call_count(), 2);
    }
}
