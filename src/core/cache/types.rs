//! Cache type definitions
//!
//! This module contains the type definitions for the cache coordinator:
//! entries, per-call options, statistics, and wildcard key matching.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Cache entry with expiry metadata
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry was created
    pub created_at: Instant,
    /// When the entry expires
    pub expires_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Create a new cache entry
    pub fn new(value: T, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Check if the entry is expired
    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }

    /// Extend the entry's lifetime from now
    pub fn touch(&mut self, ttl: Duration) {
        self.expires_at = Instant::now() + ttl;
    }
}

/// Per-call options for `CacheCoordinator::get`
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Skip the process-local tier
    pub skip_tier1: bool,
    /// Skip the shared tier
    pub skip_tier2: bool,
    /// TTL in seconds used for write-through and tier-2 expiry refresh;
    /// the configured default when unset
    pub ttl: Option<u64>,
    /// Extend entry lifetimes on read
    pub refresh_on_access: bool,
}

/// Per-call options for `CacheCoordinator::set`
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// TTL in seconds; the configured default when unset. A value of 0 stores
    /// the tier-2 entry without expiry; tier-1 always uses a finite TTL.
    pub ttl: Option<u64>,
    /// Skip the process-local tier
    pub skip_tier1: bool,
    /// Skip the shared tier
    pub skip_tier2: bool,
}

/// Cache statistics counters (lock-free, for the hot path)
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    /// Tier-1 hits
    pub tier1_hits: AtomicU64,
    /// Lookups that fell past tier-1
    pub tier1_misses: AtomicU64,
    /// Tier-2 hits
    pub tier2_hits: AtomicU64,
    /// Lookups that resolved to no cached value
    pub tier2_misses: AtomicU64,
    /// Tier-1 writes
    pub tier1_writes: AtomicU64,
    /// Tier-2 writes
    pub tier2_writes: AtomicU64,
}

impl AtomicCacheStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            tier1_hits: self.tier1_hits.load(Ordering::Relaxed),
            tier1_misses: self.tier1_misses.load(Ordering::Relaxed),
            tier2_hits: self.tier2_hits.load(Ordering::Relaxed),
            tier2_misses: self.tier2_misses.load(Ordering::Relaxed),
            tier1_writes: self.tier1_writes.load(Ordering::Relaxed),
            tier2_writes: self.tier2_writes.load(Ordering::Relaxed),
        }
    }

    /// Reset all stats to zero
    pub fn reset(&self) {
        self.tier1_hits.store(0, Ordering::Relaxed);
        self.tier1_misses.store(0, Ordering::Relaxed);
        self.tier2_hits.store(0, Ordering::Relaxed);
        self.tier2_misses.store(0, Ordering::Relaxed);
        self.tier1_writes.store(0, Ordering::Relaxed);
        self.tier2_writes.store(0, Ordering::Relaxed);
    }
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    /// Tier-1 hits
    pub tier1_hits: u64,
    /// Lookups that fell past tier-1
    pub tier1_misses: u64,
    /// Tier-2 hits
    pub tier2_hits: u64,
    /// Lookups that resolved to no cached value
    pub tier2_misses: u64,
    /// Tier-1 writes
    pub tier1_writes: u64,
    /// Tier-2 writes
    pub tier2_writes: u64,
}

impl CacheStats {
    /// Total hits across both tiers
    pub fn total_hits(&self) -> u64 {
        self.tier1_hits + self.tier2_hits
    }

    /// Total lookups
    ///
    /// Every `get` terminates in exactly one of tier-1 hit, tier-2 hit, or
    /// terminal miss, so this equals the number of `get` calls.
    pub fn total_lookups(&self) -> u64 {
        self.total_hits() + self.tier2_misses
    }

    /// Calculate hit rate, 0 when no lookups were recorded
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_lookups();
        if total == 0 {
            0.0
        } else {
            self.total_hits() as f64 / total as f64
        }
    }
}

/// Match a key against a pattern with a single `*` wildcard
///
/// The wildcard matches any sequence, including the empty one; a pattern
/// without `*` requires an exact match.
pub fn key_matches(pattern: &str, key: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            key.len() >= prefix.len() + suffix.len()
                && key.starts_with(prefix)
                && key.ends_with(suffix)
        }
        None => pattern == key,
    }
}
