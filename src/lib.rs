//! # QuizForge
//!
//! A tiered content caching and acquisition engine for quiz generation.
//!
//! ## Features
//!
//! - **Two-Tier Caching**: Process-local tier-1 store in front of a shared
//!   Redis tier, with per-key TTL, promotion on tier-2 hits, wildcard
//!   invalidation, and hit/miss accounting
//! - **Graceful Degradation**: Runs tier-1 only when Redis is unreachable or
//!   disabled; generator outages fall back to curated question banks
//! - **Content Selection**: One pipeline from cache to generator to curated
//!   fallback, normalizing every source into a single record shape
//! - **Atomic Reload**: Curated datasets can be re-read while requests are in
//!   flight
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quizforge::{Config, QuizEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/quizforge.yaml").await?;
//!     let engine = QuizEngine::new(config, None).await?;
//!
//!     let questions = engine.select_content("javascript", "easy", 5).await?;
//!     for question in &questions {
//!         println!("{}", question.prompt);
//!     }
//!
//!     engine.shutdown().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::cache::{CacheCoordinator, CacheStats, GetOptions, SetOptions};
pub use core::content::{ContentSelector, CuratedBank, QuizQuestion, RawQuestion};
pub use core::traits::{GeneratedBatch, QuestionGenerator};
pub use storage::redis::RedisPool;
pub use utils::error::{QuizError, Result};

use std::sync::Arc;
use tracing::{debug, info, warn};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Quiz content engine
///
/// Owns the cache coordinator, the curated bank, and the content selector.
/// Construct one instance per process and share it by reference; components
/// are wired explicitly here rather than through global state, which keeps
/// degraded modes and reload behavior testable in isolation.
pub struct QuizEngine {
    /// Engine configuration
    config: Arc<Config>,
    /// Cache coordinator shared by all consumers
    cache: Arc<CacheCoordinator>,
    /// Curated question bank
    bank: Arc<CuratedBank>,
    /// Content selector
    selector: Arc<ContentSelector>,
}

impl QuizEngine {
    /// Create a new engine instance
    ///
    /// Connects to Redis when enabled, falling back to tier-1-only operation
    /// on failure; loads the curated bank; starts cache maintenance. Pass
    /// `None` as the generator to serve curated content exclusively.
    pub async fn new(
        config: Config,
        generator: Option<Arc<dyn QuestionGenerator>>,
    ) -> Result<Self> {
        info!("Initializing quiz engine");
        config.validate()?;
        let config = Arc::new(config);

        let pool = if config.redis.enabled {
            match RedisPool::new(&config.redis).await {
                Ok(pool) => pool,
                Err(e) => {
                    warn!(
                        "Redis connection failed, continuing with tier-1 cache only: {}",
                        e
                    );
                    RedisPool::create_noop()
                }
            }
        } else {
            debug!("Redis disabled, using tier-1 cache only");
            RedisPool::create_noop()
        };

        let cache = Arc::new(CacheCoordinator::new(config.cache.clone(), pool));
        cache.start_maintenance();

        let bank = Arc::new(CuratedBank::load(config.content.dataset_dir.clone()).await?);
        let selector = Arc::new(ContentSelector::new(
            Arc::clone(&cache),
            Arc::clone(&bank),
            generator,
            config.content.clone(),
        ));

        info!(
            "Quiz engine initialized: {} curated topics",
            bank.topics().len()
        );
        Ok(Self {
            config,
            cache,
            bank,
            selector,
        })
    }

    /// Select up to `count` questions for a topic and difficulty
    pub async fn select_content(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>> {
        self.selector.select_content(topic, difficulty, count).await
    }

    /// Get the content selector
    pub fn selector(&self) -> &ContentSelector {
        &self.selector
    }

    /// Get the cache coordinator
    pub fn cache(&self) -> &CacheCoordinator {
        &self.cache
    }

    /// Get the curated bank
    pub fn bank(&self) -> &CuratedBank {
        &self.bank
    }

    /// Get the engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stop maintenance tasks and close the tier-2 connection
    pub async fn shutdown(&self) -> Result<()> {
        info!("Shutting down quiz engine");
        self.cache.shutdown();
        self.cache.close().await?;
        Ok(())
    }
}
