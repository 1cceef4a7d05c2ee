//! Thread-safe response cache with per-key freshness windows.
//!
//! Values are stored decoded, so a hit costs a clone, not a parse.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use tokio::time::Instant;

/// A cached, already-decoded upstream response.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub payload: V,
    /// When the response was stored.
    pub fetched_at: Instant,
}

impl<V> CacheEntry<V> {
    #[must_use]
    pub fn new(payload: V) -> Self {
        Self {
            payload,
            fetched_at: Instant::now(),
        }
    }

    /// An entry is fresh while less than `ttl` has elapsed since it was stored.
    #[must_use]
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Thread-safe cache of responses keyed by request.
///
/// Replacement is whole-entry under the write lock, so a reader sees either
/// the old entry or the new one, never a mix. There is no cross-key
/// consistency and no lock is held across a network call.
pub struct ResponseCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create a new, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the payload for `key` if it was stored less than `ttl` ago.
    #[must_use]
    pub fn get_fresh(&self, key: &K, ttl: Duration) -> Option<V> {
        self.entries
            .read()
            .get(key)
            .filter(|entry| entry.is_fresh(ttl))
            .map(|entry| entry.payload.clone())
    }

    /// Snapshot of the entry for `key`, fresh or not.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, key: &K) -> Option<CacheEntry<V>> {
        self.entries.read().get(key).cloned()
    }

    /// Store `payload` for `key`, replacing any previous entry.
    pub fn insert(&self, key: K, payload: V) {
        self.entries.write().insert(key, CacheEntry::new(payload));
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of entries in cache, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
