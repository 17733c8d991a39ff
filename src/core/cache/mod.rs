//! Two-tier cache coordination
//!
//! This module contains the cache coordinator that unifies the process-local
//! tier-1 store and the shared Redis tier-2 store, with per-key TTL, hit/miss
//! accounting, wildcard invalidation, and a compute-on-miss contract.

mod coordinator;
mod memory;
mod types;


pub use coordinator::CacheCoordinator;
pub use memory::MemoryStore;
pub use types::{CacheEntry, CacheStats, GetOptions, SetOptions, key_matches};
