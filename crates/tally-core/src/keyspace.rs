//! The key namespace for ledger entries.
//!
//! Ledger keys share a flat key space with whatever else lives in the
//! backing store, distinguished by a string prefix. The prefix is an
//! explicit parameter rather than a hardcoded constant so the ledger stays
//! backend-agnostic.

use crate::types::ScoreName;

/// Default namespace prefix for score keys.
pub const DEFAULT_PREFIX: &str = "cls:";

/// A key namespace: maps score names to store keys and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    /// Create a namespace with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The namespace prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the store key for a score name.
    pub fn key(&self, name: &ScoreName) -> String {
        format!("{}{}", self.prefix, name.as_str())
    }

    /// Strip the prefix from a store key, returning the score name part.
    ///
    /// Returns `None` for keys outside this namespace.
    pub fn strip<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.prefix.as_str())
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        let ks = KeySpace::default();
        let name = ScoreName::from("Alice Lee");
        let key = ks.key(&name);
        assert_eq!(key, "cls:Alice Lee");
        assert_eq!(ks.strip(&key), Some("Alice Lee"));
    }

    #[test]
    fn test_strip_foreign_key() {
        let ks = KeySpace::default();
        assert_eq!(ks.strip("session:abc"), None);
    }

    #[test]
    fn test_custom_prefix() {
        let ks = KeySpace::new("points:");
        let key = ks.key(&ScoreName::from("Bob"));
        assert_eq!(key, "points:Bob");
        assert_eq!(ks.strip(&key), Some("Bob"));
    }

    #[test]
    fn test_stripped_name_never_contains_prefix() {
        let ks = KeySpace::default();
        // A name that happens to embed the prefix string still strips only
        // the leading occurrence.
        let name = ScoreName::from("cls:weird");
        let key = ks.key(&name);
        assert_eq!(ks.strip(&key), Some("cls:weird"));
    }
}
