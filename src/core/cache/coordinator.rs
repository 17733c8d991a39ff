//! Cache coordinator implementation
//!
//! Unifies the process-local tier and the shared Redis tier behind one read
//! and write path: tier-1 is consulted first, a tier-2 hit is promoted into
//! tier-1, and tier-2 failures degrade to misses. One coordinator instance is
//! constructed per process and shared by reference; there is no global state.

use super::memory::MemoryStore;
use super::types::{AtomicCacheStats, CacheStats, GetOptions, SetOptions, key_matches};
use crate::config::CacheSettings;
use crate::storage::redis::RedisPool;
use crate::utils::error::Result;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Two-tier cache coordinator
pub struct CacheCoordinator {
    /// Tier-1: in-process store
    tier1: MemoryStore,
    /// Tier-2: shared store (no-op pool when unavailable)
    tier2: RedisPool,
    /// Cache configuration
    settings: CacheSettings,
    /// Cache statistics (lock-free atomics for the hot path)
    stats: Arc<AtomicCacheStats>,
    /// Background maintenance task handles
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl CacheCoordinator {
    /// Create a new coordinator over the given tier-2 pool
    pub fn new(settings: CacheSettings, tier2: RedisPool) -> Self {
        Self {
            tier1: MemoryStore::new(settings.max_entries),
            tier2,
            settings,
            stats: Arc::new(AtomicCacheStats::default()),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Get a cached value
    ///
    /// Checks tier-1 first, then tier-2 with promotion into tier-1. Tier-2
    /// errors are logged and treated as misses; this call never fails.
    pub async fn get(&self, key: &str, options: &GetOptions) -> Option<Value> {
        if !options.skip_tier1 {
            let refresh = options.refresh_on_access.then(|| self.tier1_ttl());
            if let Some(value) = self.tier1.get(key, refresh) {
                self.stats.tier1_hits.fetch_add(1, Ordering::Relaxed);
                debug!("tier-1 cache hit for key: {}", key);
                return Some(value);
            }
            self.stats.tier1_misses.fetch_add(1, Ordering::Relaxed);
        }

        if !options.skip_tier2 && !self.tier2.is_noop() {
            match self.tier2.get(key).await {
                Ok(Some(payload)) => match serde_json::from_str::<Value>(&payload) {
                    Ok(value) => {
                        self.stats.tier2_hits.fetch_add(1, Ordering::Relaxed);
                        debug!("tier-2 cache hit for key: {}", key);
                        if !options.skip_tier1 {
                            self.tier1
                                .insert(key.to_string(), value.clone(), self.tier1_ttl());
                        }
                        if options.refresh_on_access {
                            let ttl = options.ttl.unwrap_or(self.settings.default_ttl);
                            if ttl > 0 {
                                if let Err(e) = self.tier2.expire(key, ttl).await {
                                    warn!("failed to refresh tier-2 expiry for {}: {}", key, e);
                                }
                            }
                        }
                        return Some(value);
                    }
                    Err(e) => {
                        warn!("discarding undecodable tier-2 payload for {}: {}", key, e);
                        if let Err(e) = self.tier2.delete(key).await {
                            warn!("tier-2 delete failed for {}: {}", key, e);
                        }
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    warn!("tier-2 read failed for {}, treating as miss: {}", key, e);
                }
            }
        }

        self.stats.tier2_misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Get a cached value, computing and storing it on miss
    ///
    /// The fallback is invoked at most once per call; a non-null result is
    /// written through `set` with the option TTL before being returned.
    /// Concurrent callers racing on the same missing key may each invoke
    /// their fallback; values for a key are assumed interchangeable.
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &str,
        options: GetOptions,
        fallback: F,
    ) -> Result<Option<Value>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Value>>>,
    {
        if let Some(value) = self.get(key, &options).await {
            return Ok(Some(value));
        }

        let computed = fallback().await?;
        if let Some(value) = computed {
            let set_options = SetOptions {
                ttl: options.ttl,
                skip_tier1: options.skip_tier1,
                skip_tier2: options.skip_tier2,
            };
            self.set(key, value.clone(), &set_options).await;
            return Ok(Some(value));
        }
        Ok(None)
    }

    /// Store a value in both tiers
    ///
    /// A TTL of 0 stores the tier-2 entry without expiry; tier-1 always uses
    /// a finite TTL. A tier-2 failure is logged and does not fail the write.
    /// Returns whether at least one tier accepted the value.
    pub async fn set(&self, key: &str, value: Value, options: &SetOptions) -> bool {
        let mut stored = false;

        if !options.skip_tier1 {
            let ttl = match options.ttl {
                Some(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => self.tier1_ttl(),
            };
            self.tier1.insert(key.to_string(), value.clone(), ttl);
            self.stats.tier1_writes.fetch_add(1, Ordering::Relaxed);
            stored = true;
        }

        if !options.skip_tier2 && !self.tier2.is_noop() {
            match serde_json::to_string(&value) {
                Ok(payload) => {
                    let ttl = options.ttl.unwrap_or(self.settings.default_ttl);
                    let expiry = (ttl > 0).then_some(ttl);
                    match self.tier2.set(key, &payload, expiry).await {
                        Ok(()) => {
                            self.stats.tier2_writes.fetch_add(1, Ordering::Relaxed);
                            stored = true;
                        }
                        Err(e) => warn!("tier-2 write failed for {}: {}", key, e),
                    }
                }
                Err(e) => warn!("failed to serialize value for {}: {}", key, e),
            }
        }

        stored
    }

    /// Remove a key from both tiers; idempotent
    pub async fn delete(&self, key: &str) {
        self.tier1.remove(key);
        if !self.tier2.is_noop() {
            if let Err(e) = self.tier2.delete(key).await {
                warn!("tier-2 delete failed for {}: {}", key, e);
            }
        }
    }

    /// Whether an unexpired entry exists in either tier
    pub async fn has(&self, key: &str) -> bool {
        if self.tier1.contains(key) {
            return true;
        }
        if !self.tier2.is_noop() {
            match self.tier2.exists(key).await {
                Ok(found) => return found,
                Err(e) => warn!("tier-2 exists failed for {}: {}", key, e),
            }
        }
        false
    }

    /// Delete every key matching a single-wildcard pattern
    ///
    /// Matches are the union of enumerated tier-1 keys and a native tier-2
    /// pattern query, deduplicated. Returns the number of keys removed.
    pub async fn invalidate_pattern(&self, pattern: &str) -> usize {
        let mut keys: HashSet<String> = self
            .tier1
            .keys()
            .into_iter()
            .filter(|key| key_matches(pattern, key))
            .collect();

        if !self.tier2.is_noop() {
            match self.tier2.keys(pattern).await {
                Ok(remote) => keys.extend(remote),
                Err(e) => warn!("tier-2 key scan failed for pattern {}: {}", pattern, e),
            }
        }

        let count = keys.len();
        futures::future::join_all(keys.iter().map(|key| self.delete(key))).await;

        if count > 0 {
            debug!("invalidated {} keys matching pattern {}", count, pattern);
        }
        count
    }

    /// Get cache statistics (snapshot, does not reset counters)
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Log the current reporting window's statistics and reset the counters
    pub fn report_and_reset(&self) {
        let snapshot = self.stats.snapshot();
        if snapshot.total_lookups() == 0 && snapshot.tier1_writes == 0 {
            return;
        }
        info!(
            "cache stats: {} tier-1 hits, {} tier-2 hits, {} misses, {} tier-1 writes, {} tier-2 writes, hit rate {:.2}",
            snapshot.tier1_hits,
            snapshot.tier2_hits,
            snapshot.tier2_misses,
            snapshot.tier1_writes,
            snapshot.tier2_writes,
            snapshot.hit_rate(),
        );
        self.stats.reset();
    }

    /// Spawn the tier-1 sweeper and the periodic statistics reporter
    ///
    /// Calling this again while maintenance is running is a no-op.
    pub fn start_maintenance(self: &Arc<Self>) {
        let mut tasks = self.tasks.lock();
        if !tasks.is_empty() {
            return;
        }

        let sweeper = {
            let coordinator = Arc::clone(self);
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(
                    coordinator.settings.sweep_interval,
                ));
                loop {
                    interval.tick().await;
                    let removed = coordinator.tier1.sweep();
                    if removed > 0 {
                        debug!("swept {} expired tier-1 entries", removed);
                    }
                }
            })
        };

        let reporter = {
            let coordinator = Arc::clone(self);
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(
                    coordinator.settings.report_interval,
                ));
                // The first tick completes immediately; skip it so the first
                // report covers a full window.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    coordinator.report_and_reset();
                }
            })
        };

        tasks.push(sweeper);
        tasks.push(reporter);
        debug!("cache maintenance tasks started");
    }

    /// Stop background maintenance tasks
    pub fn shutdown(&self) {
        for task in self.tasks.lock().drain(..) {
            task.abort();
        }
    }

    /// Close the tier-2 connection
    pub async fn close(&self) -> Result<()> {
        self.tier2.close().await
    }

    /// Drop all tier-1 entries and reset statistics
    pub fn clear_local(&self) {
        self.tier1.clear();
        self.stats.reset();
    }

    fn tier1_ttl(&self) -> Duration {
        Duration::from_secs(self.settings.tier1_ttl)
    }
}

impl Drop for CacheCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
