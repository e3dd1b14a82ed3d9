//! ScoreStore trait: the abstract interface for counter persistence.
//!
//! This trait allows the ledger to be storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;

use crate::error::Result;

/// The ScoreStore trait: async interface for namespaced integer counters.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, we use `spawn_blocking` internally to avoid blocking the
/// runtime.
///
/// # Design Notes
///
/// - **Atomic increment**: `incr` performs the whole read-modify-write
///   under the backend's single-key atomicity guarantee. Two concurrent
///   `incr` calls against the same key are both reflected in the final
///   value.
/// - **Absent vs present**: `get` and `delete` fail with `NotFound` for
///   absent keys; `set` creates or overwrites unconditionally; `incr`
///   creates an absent key with the delta as its initial value.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Check whether a key exists.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Get the counter value for a key.
    ///
    /// Fails with `NotFound` if the key is absent.
    async fn get(&self, key: &str) -> Result<i64>;

    /// Create or overwrite a key unconditionally.
    async fn set(&self, key: &str, value: i64) -> Result<()>;

    /// Atomically add `delta` to a key, creating it with value `delta`
    /// if absent. Returns the resulting value.
    async fn incr(&self, key: &str, delta: i64) -> Result<i64>;

    /// Delete a key.
    ///
    /// Fails with `NotFound` if the key is absent.
    async fn delete(&self, key: &str) -> Result<()>;

    /// List all `(key, value)` entries whose key begins with `prefix`.
    ///
    /// Order is unspecified and may differ between calls.
    async fn scan(&self, prefix: &str) -> Result<Vec<(String, i64)>>;
}
