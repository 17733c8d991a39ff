//! Question generator capability
//!
//! The primary content source: expensive, possibly unavailable, consumed
//! through a single call contract. The selector holds an
//! `Option<Arc<dyn QuestionGenerator>>`; `None` marks the capability as
//! unavailable and routes every request to the curated bank.

use crate::core::content::RawQuestion;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A batch of raw questions produced by a generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedBatch {
    /// Questions in generator order, prior to normalization
    pub questions: Vec<RawQuestion>,
}

/// Content generator consumed by the selector
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &str;

    /// Produce up to `count` questions for the topic and difficulty
    ///
    /// Implementations are expected to bound their own latency; the selector
    /// recovers from an error by falling back to curated content.
    async fn generate(&self, topic: &str, count: usize, difficulty: &str)
    -> Result<GeneratedBatch>;
}
