//! In-memory implementation of the ScoreStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::traits::ScoreStore;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock;
/// `incr` holds the write lock across its read-modify-write.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, i64>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<bool> {
        let entries = self.entries.read().unwrap();
        Ok(entries.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<i64> {
        let entries = self.entries.read().unwrap();
        entries
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: i64) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn incr(&self, key: &str, delta: i64) -> Result<i64> {
        let mut entries = self.entries.write().unwrap();
        let current = entries.get(key).copied().unwrap_or(0);
        let next = current
            .checked_add(delta)
            .ok_or_else(|| StoreError::InvalidData(format!("counter overflow for {key}")))?;
        entries.insert(key.to_string(), next);
        Ok(next)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn scan(&self, prefix: &str) -> Result<Vec<(String, i64)>> {
        let entries = self.entries.read().unwrap();
        Ok(entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), *value))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryStore::new();

        assert!(!store.exists("cls:Alice").await.unwrap());
        store.set("cls:Alice", 10).await.unwrap();
        assert!(store.exists("cls:Alice").await.unwrap());
        assert_eq!(store.get("cls:Alice").await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_get_absent_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get("cls:Nobody").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_incr_creates_and_accumulates() {
        let store = MemoryStore::new();

        assert_eq!(store.incr("cls:Alice", 7).await.unwrap(), 7);
        assert_eq!(store.incr("cls:Alice", -10).await.unwrap(), -3);
        assert_eq!(store.get("cls:Alice").await.unwrap(), -3);
    }

    #[tokio::test]
    async fn test_delete_absent_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete("cls:Nobody").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        store.set("cls:Alice", 1).await.unwrap();
        store.delete("cls:Alice").await.unwrap();
        assert!(!store.exists("cls:Alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_scan_filters_by_prefix() {
        let store = MemoryStore::new();
        store.set("cls:Alice", 1).await.unwrap();
        store.set("cls:Bob", 2).await.unwrap();
        store.set("session:xyz", 99).await.unwrap();

        let mut entries = store.scan("cls:").await.unwrap();
        entries.sort();
        assert_eq!(
            entries,
            vec![("cls:Alice".to_string(), 1), ("cls:Bob".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn test_incr_overflow_is_rejected() {
        let store = MemoryStore::new();
        store.set("cls:Alice", i64::MAX).await.unwrap();
        let err = store.incr("cls:Alice", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
        // Value is unchanged after the failed increment.
        assert_eq!(store.get("cls:Alice").await.unwrap(), i64::MAX);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_incr_loses_no_updates() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for _ in 0..64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.incr("cls:Alice", 1).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.get("cls:Alice").await.unwrap(), 64);
    }
}
