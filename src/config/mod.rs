//! Configuration management for the quiz engine
//!
//! This module handles loading and validation of engine configuration from
//! YAML files and environment variables.

use crate::utils::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn default_cache_ttl() -> u64 {
    3600
}

fn default_tier1_ttl() -> u64 {
    300
}

fn default_max_entries() -> usize {
    10_000
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_report_interval() -> u64 {
    300
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_redis_enabled() -> bool {
    true
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_content_ttl() -> u64 {
    1800
}

fn default_max_count() -> usize {
    50
}

/// Main configuration struct for the quiz engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cache coordinator configuration
    #[serde(default)]
    pub cache: CacheSettings,
    /// Redis (tier-2) configuration
    #[serde(default)]
    pub redis: RedisConfig,
    /// Content selection configuration
    #[serde(default)]
    pub content: ContentSettings,
}

/// Cache coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Default TTL for tier-2 entries and write-through, in seconds
    #[serde(default = "default_cache_ttl")]
    pub default_ttl: u64,
    /// TTL for tier-1 entries, in seconds (always finite)
    #[serde(default = "default_tier1_ttl")]
    pub tier1_ttl: u64,
    /// Maximum number of tier-1 entries
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Interval between tier-1 expiry sweeps, in seconds
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: u64,
    /// Interval between statistics reports, in seconds
    #[serde(default = "default_report_interval")]
    pub report_interval: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_ttl: default_cache_ttl(),
            tier1_ttl: default_tier1_ttl(),
            max_entries: default_max_entries(),
            sweep_interval: default_sweep_interval(),
            report_interval: default_report_interval(),
        }
    }
}

/// Redis configuration for the shared cache tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Whether the shared tier is enabled; when false the coordinator runs
    /// tier-1 only
    #[serde(default = "default_redis_enabled")]
    pub enabled: bool,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            enabled: default_redis_enabled(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Content selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Directory of curated topic files; `None` runs on the built-in pool only
    #[serde(default)]
    pub dataset_dir: Option<PathBuf>,
    /// TTL for cached generator batches, in seconds
    #[serde(default = "default_content_ttl")]
    pub cache_ttl: u64,
    /// Upper bound on the number of questions per request
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            dataset_dir: None,
            cache_ttl: default_content_ttl(),
            max_count: default_max_count(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| QuizError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| QuizError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to this configuration
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("REDIS_URL") {
            self.redis.url = url;
        }
        if let Ok(enabled) = env::var("QUIZFORGE_REDIS_ENABLED") {
            self.redis.enabled = enabled
                .parse()
                .map_err(|e| QuizError::Config(format!("Invalid redis enabled flag: {}", e)))?;
        }
        if let Ok(ttl) = env::var("QUIZFORGE_CACHE_TTL") {
            self.cache.default_ttl = ttl
                .parse()
                .map_err(|e| QuizError::Config(format!("Invalid cache TTL: {}", e)))?;
        }
        if let Ok(ttl) = env::var("QUIZFORGE_TIER1_TTL") {
            self.cache.tier1_ttl = ttl
                .parse()
                .map_err(|e| QuizError::Config(format!("Invalid tier-1 TTL: {}", e)))?;
        }
        if let Ok(dir) = env::var("QUIZFORGE_DATASET_DIR") {
            self.content.dataset_dir = Some(PathBuf::from(dir));
        }
        if let Ok(ttl) = env::var("QUIZFORGE_CONTENT_TTL") {
            self.content.cache_ttl = ttl
                .parse()
                .map_err(|e| QuizError::Config(format!("Invalid content TTL: {}", e)))?;
        }
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.cache.tier1_ttl == 0 {
            return Err(QuizError::Config(
                "cache.tier1_ttl must be at least 1 second".to_string(),
            ));
        }
        if self.cache.max_entries == 0 {
            return Err(QuizError::Config(
                "cache.max_entries must be greater than 0".to_string(),
            ));
        }
        if self.cache.sweep_interval == 0 || self.cache.report_interval == 0 {
            return Err(QuizError::Config(
                "cache maintenance intervals must be at least 1 second".to_string(),
            ));
        }
        if self.content.max_count == 0 {
            return Err(QuizError::Config(
                "content.max_count must be greater than 0".to_string(),
            ));
        }
        if self.redis.enabled {
            if self.redis.url.is_empty() {
                return Err(QuizError::Config(
                    "redis.url must not be empty when redis is enabled".to_string(),
                ));
            }
            if self.redis.connection_timeout == 0 {
                return Err(QuizError::Config(
                    "redis.connection_timeout must be at least 1 second".to_string(),
                ));
            }
        }

        debug!("Configuration validation completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache.default_ttl, 3600);
        assert_eq!(config.cache.tier1_ttl, 300);
        assert!(config.redis.enabled);
        assert!(config.content.dataset_dir.is_none());
    }

    #[test]
    fn test_yaml_parsing_with_partial_fields() {
        let yaml = r#"
cache:
  default_ttl: 120
redis:
  enabled: false
content:
  dataset_dir: "data/topics"
  max_count: 10
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.cache.default_ttl, 120);
        assert_eq!(config.cache.tier1_ttl, 300);
        assert!(!config.redis.enabled);
        assert_eq!(
            config.content.dataset_dir.as_deref(),
            Some(Path::new("data/topics"))
        );
        assert_eq!(config.content.max_count, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_intervals() {
        let mut config = Config::default();
        config.cache.tier1_ttl = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.cache.max_entries = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.content.max_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_allows_empty_url_when_disabled() {
        let mut config = Config::default();
        config.redis.enabled = false;
        config.redis.url = String::new();
        assert!(config.validate().is_ok());
    }
}
