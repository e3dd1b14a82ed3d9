//! Oracle abstraction for administrator lookup.
//!
//! The oracle answers "who administers this chat?". Implementations may
//! call a remote API or serve fixed sets for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use tally_core::{ChatId, UserId};

use crate::error::{AuthError, Result};

/// Oracle trait for administrator membership.
///
/// Implementations must be thread-safe (Send + Sync). Calls are assumed
/// expensive; callers should go through [`crate::AdminCache`].
#[async_trait]
pub trait AdminOracle: Send + Sync {
    /// Return the current set of administrator identities for a chat.
    async fn admins_of(&self, chat: ChatId) -> Result<HashSet<UserId>>;
}

/// A fixed-answer oracle for testing.
///
/// Serves admin sets from an in-memory map and counts how many times it
/// was consulted, so cache behavior is observable.
pub struct StaticOracle {
    admins: HashMap<ChatId, HashSet<UserId>>,
    calls: AtomicUsize,
    failing: bool,
}

impl StaticOracle {
    /// Create an oracle that knows the given chats.
    pub fn new(admins: HashMap<ChatId, HashSet<UserId>>) -> Self {
        Self {
            admins,
            calls: AtomicUsize::new(0),
            failing: false,
        }
    }

    /// Create an oracle with a single chat's admin set.
    pub fn with_chat(chat: ChatId, admins: impl IntoIterator<Item = UserId>) -> Self {
        let mut map = HashMap::new();
        map.insert(chat, admins.into_iter().collect());
        Self::new(map)
    }

    /// Create an oracle whose every call fails, for fail-closed tests.
    pub fn failing() -> Self {
        Self {
            admins: HashMap::new(),
            calls: AtomicUsize::new(0),
            failing: true,
        }
    }

    /// How many times the oracle has been consulted.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdminOracle for StaticOracle {
    async fn admins_of(&self, chat: ChatId) -> Result<HashSet<UserId>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AuthError::Unavailable("static oracle set to fail".into()));
        }
        Ok(self.admins.get(&chat).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_oracle_serves_and_counts() {
        let chat = ChatId::new(-1);
        let oracle = StaticOracle::with_chat(chat, [UserId::new(1), UserId::new(2)]);

        let admins = oracle.admins_of(chat).await.unwrap();
        assert!(admins.contains(&UserId::new(1)));
        assert_eq!(oracle.call_count(), 1);

        // Unknown chats have no admins rather than erroring.
        let other = oracle.admins_of(ChatId::new(-2)).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_failing_oracle() {
        let oracle = StaticOracle::failing();
        let err = oracle.admins_of(ChatId::new(-1)).await.unwrap_err();
        assert!(matches!(err, AuthError::Unavailable(_)));
    }
}
