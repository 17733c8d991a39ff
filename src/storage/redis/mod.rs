//! Redis storage implementation
//!
//! This module provides Redis connectivity and the tier-2 cache operations.
//!
//! ## Module Structure
//!
//! - `pool` - Connection pool and core connection management
//! - `cache` - Cache operations (get, set, delete, exists, expire, keys)
//! - `tests` - Module tests

mod cache;
mod pool;
#[cfg(test)]
mod tests;

pub use pool::{RedisConnection, RedisPool};
