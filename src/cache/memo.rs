//! In-memory memoization with a fixed TTL.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

use super::entry::CacheEntry;

/// A key-value memo whose entries expire after a fixed TTL.
///
/// Expired entries are dropped lazily on lookup or by [`purge_expired`].
///
/// [`purge_expired`]: MemoCache::purge_expired
#[derive(Debug)]
pub struct MemoCache<K, V> {
    ttl_seconds: u64,
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    /// Create a cache whose entries live for `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            ttl_seconds,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get the configured TTL.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Look up a live entry.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value, replacing any previous entry.
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, self.ttl_seconds);
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, entry);
    }

    /// Drop expired entries and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
