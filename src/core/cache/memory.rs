//! Process-local cache tier
//!
//! A bounded key-value store with per-key TTL. Expiry is checked lazily on
//! read and enforced by a periodic sweep; when the store is full, expired
//! entries are cleared first and the oldest entry is evicted if needed.

use super::types::CacheEntry;
use dashmap::DashMap;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Tier-1 in-process store
#[derive(Debug)]
pub struct MemoryStore {
    entries: DashMap<String, CacheEntry<Value>>,
    max_entries: usize,
}

impl MemoryStore {
    /// Create a store bounded to `max_entries` live entries
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Get a value, removing it if expired
    ///
    /// When `refresh` is set, a hit extends the entry's lifetime.
    pub fn get(&self, key: &str, refresh: Option<Duration>) -> Option<Value> {
        let expired = match self.entries.get_mut(key) {
            Some(mut entry) => {
                if entry.is_expired() {
                    true
                } else {
                    if let Some(ttl) = refresh {
                        entry.touch(ttl);
                    }
                    return Some(entry.value.clone());
                }
            }
            None => return None,
        };

        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Insert a value with the given TTL, evicting if the store is full
    pub fn insert(&self, key: String, value: Value, ttl: Duration) {
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.sweep();
            if self.entries.len() >= self.max_entries {
                self.evict_oldest();
            }
        }
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    /// Remove a key; returns whether it was present
    pub fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Check for an unexpired entry without touching it
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    /// Enumerate unexpired keys
    pub fn keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_expired())
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Remove expired entries; returns the number removed
    pub fn sweep(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before.saturating_sub(self.entries.len())
    }

    /// Number of stored entries, including not-yet-swept expired ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.clear();
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().created_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            debug!("evicting oldest tier-1 entry: {}", key);
            self.entries.remove(&key);
        }
    }
}
