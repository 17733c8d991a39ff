//! Storage layer for the quiz engine
//!
//! This module provides the shared, network-accessible cache tier.

/// Redis cache module
pub mod redis;

pub use redis::RedisPool;
