//! Tier-2 cache operations
//!
//! Core key-value operations: get, set, delete, exists, expire, and
//! keys-by-pattern. Every operation degrades to a miss in no-op mode.

use super::pool::RedisPool;
use crate::utils::error::{QuizError, Result};
use redis::AsyncCommands;

impl RedisPool {
    /// Get a value from the shared tier
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.noop_mode {
            return Ok(None);
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let value: Option<String> = c.get(key).await.map_err(QuizError::Redis)?;
            Ok(value)
        } else {
            Ok(None)
        }
    }

    /// Set a key-value pair with optional TTL in seconds
    ///
    /// `None` stores the key without expiry.
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        if self.noop_mode {
            return Ok(());
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            if let Some(ttl_seconds) = ttl {
                let _: () = c
                    .set_ex(key, value, ttl_seconds)
                    .await
                    .map_err(QuizError::Redis)?;
            } else {
                let _: () = c.set(key, value).await.map_err(QuizError::Redis)?;
            }
        }
        Ok(())
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> Result<()> {
        if self.noop_mode {
            return Ok(());
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let _: () = c.del(key).await.map_err(QuizError::Redis)?;
        }
        Ok(())
    }

    /// Check if a key exists
    pub async fn exists(&self, key: &str) -> Result<bool> {
        if self.noop_mode {
            return Ok(false);
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let exists: bool = c.exists(key).await.map_err(QuizError::Redis)?;
            Ok(exists)
        } else {
            Ok(false)
        }
    }

    /// Set expiration time for a key
    pub async fn expire(&self, key: &str, ttl: u64) -> Result<()> {
        if self.noop_mode {
            return Ok(());
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let _: () = c
                .expire(key, ttl as i64)
                .await
                .map_err(QuizError::Redis)?;
        }
        Ok(())
    }

    /// Enumerate keys matching a glob pattern
    ///
    /// Used by wildcard invalidation; selection keys are few enough that a
    /// native KEYS query stays cheap.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        if self.noop_mode {
            return Ok(Vec::new());
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let keys: Vec<String> = redis::cmd("KEYS")
                .arg(pattern)
                .query_async(c)
                .await
                .map_err(QuizError::Redis)?;
            Ok(keys)
        } else {
            Ok(Vec::new())
        }
    }
}
