//! Strong type definitions for the Tally ledger.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller identity, as delivered by the command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Create a new UserId from its raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// An origin-chat identity, as delivered by the command source.
///
/// Group chats use negative values in the wire format; the ledger treats
/// the value as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl ChatId {
    /// Create a new ChatId from its raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The display identity a score is keyed by.
///
/// A `ScoreName` is the single-space join of one or more argument tokens,
/// used verbatim. Construction guarantees it is non-empty; it guarantees
/// nothing else. Internal spacing is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreName(String);

impl ScoreName {
    /// Join argument tokens into a score name.
    ///
    /// Returns `None` when the token list is empty.
    pub fn join(tokens: &[String]) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        Some(Self(tokens.join(" ")))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScoreName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ScoreName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_name_join() {
        let tokens = vec!["Alice".to_string(), "Lee".to_string()];
        let name = ScoreName::join(&tokens).unwrap();
        assert_eq!(name.as_str(), "Alice Lee");
    }

    #[test]
    fn test_score_name_join_empty() {
        assert!(ScoreName::join(&[]).is_none());
    }

    #[test]
    fn test_score_name_preserves_internal_spacing() {
        // A token that itself contains no space joins with single spaces,
        // but names built from different token sequences stay distinct.
        let a = ScoreName::from("Alice Lee");
        let b = ScoreName::from("Alice  Lee");
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_serde_transparent() {
        let user: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(user, UserId::new(42));
        let chat: ChatId = serde_json::from_str("-1001").unwrap();
        assert_eq!(chat, ChatId::new(-1001));
    }
}
