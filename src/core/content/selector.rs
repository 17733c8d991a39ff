//! Content selector
//!
//! Decides between generated and curated content for each request and
//! normalizes the result. The selection cache is keyed by
//! `quiz:{topic}:{difficulty}:{count}` through the cache coordinator; only
//! generator-sourced batches are cached, so repeated curated fallbacks
//! re-shuffle from the static pool each time.

use super::curated::CuratedBank;
use super::normalize::normalize_batch;
use super::types::{QuizQuestion, RawQuestion};
use crate::config::ContentSettings;
use crate::core::cache::{CacheCoordinator, GetOptions, SetOptions};
use crate::core::traits::QuestionGenerator;
use crate::utils::error::{QuizError, Result};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, warn};

/// Build the selection cache key for a normalized request
pub(crate) fn selection_key(topic: &str, difficulty: &str, count: usize) -> String {
    format!("quiz:{}:{}:{}", topic, difficulty, count)
}

/// Content selector orchestrating generator and curated sources
pub struct ContentSelector {
    cache: Arc<CacheCoordinator>,
    bank: Arc<CuratedBank>,
    generator: Option<Arc<dyn QuestionGenerator>>,
    settings: ContentSettings,
}

impl ContentSelector {
    /// Create a selector
    ///
    /// A `None` generator marks the capability as unavailable; every request
    /// is then served from the curated bank.
    pub fn new(
        cache: Arc<CacheCoordinator>,
        bank: Arc<CuratedBank>,
        generator: Option<Arc<dyn QuestionGenerator>>,
        settings: ContentSettings,
    ) -> Self {
        Self {
            cache,
            bank,
            generator,
            settings,
        }
    }

    /// Select up to `count` questions for a topic and difficulty
    ///
    /// Returns a non-empty batch (possibly shorter than requested) or an
    /// error; generator failures are recovered through the curated bank and
    /// never surface here.
    pub async fn select_content(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>> {
        if count == 0 {
            return Err(QuizError::invalid_request("count must be at least 1"));
        }
        if count > self.settings.max_count {
            return Err(QuizError::invalid_request(format!(
                "count must not exceed {}",
                self.settings.max_count
            )));
        }
        let topic = topic.trim().to_lowercase();
        if topic.is_empty() {
            return Err(QuizError::invalid_request("topic must not be blank"));
        }
        let difficulty = difficulty.trim().to_lowercase();

        let key = selection_key(&topic, &difficulty, count);

        if let Some(cached) = self.cache.get(&key, &GetOptions::default()).await {
            match serde_json::from_value::<Vec<QuizQuestion>>(cached) {
                Ok(batch) if !batch.is_empty() => {
                    debug!("serving {} cached questions for {}", batch.len(), key);
                    return Ok(shuffled_copy(&batch));
                }
                Ok(_) => self.cache.delete(&key).await,
                Err(e) => {
                    warn!("discarding undecodable cached batch for {}: {}", key, e);
                    self.cache.delete(&key).await;
                }
            }
        }

        if let Some(generated) = self.try_generate(&topic, &difficulty, count).await {
            match serde_json::to_value(&generated) {
                Ok(payload) => {
                    let options = SetOptions {
                        ttl: Some(self.settings.cache_ttl),
                        ..Default::default()
                    };
                    self.cache.set(&key, payload, &options).await;
                }
                Err(e) => warn!("failed to serialize generated batch for {}: {}", key, e),
            }
            return Ok(generated);
        }

        self.select_curated(&topic, &difficulty, count)
    }

    /// Snapshot of curated topic names
    pub fn available_topics(&self) -> Vec<String> {
        self.bank.topics()
    }

    /// Number of curated questions for an exactly-matching topic
    pub fn question_count(&self, topic: &str) -> usize {
        self.bank.question_count(topic)
    }

    /// Clear cached selections and re-read the curated dataset
    ///
    /// Safe to call while requests are in flight; the curated index is
    /// replaced atomically.
    pub async fn reload(&self) -> Result<()> {
        let cleared = self.cache.invalidate_pattern("quiz:*").await;
        debug!("cleared {} cached selections before reload", cleared);
        self.bank.reload().await
    }

    async fn try_generate(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> Option<Vec<QuizQuestion>> {
        let generator = self.generator.as_ref()?;
        match generator.generate(topic, count, difficulty).await {
            Ok(batch) if batch.questions.is_empty() => {
                warn!(
                    "generator {} returned no questions for {}",
                    generator.name(),
                    topic
                );
                None
            }
            Ok(batch) => {
                let normalized = normalize_batch(&batch.questions, topic, difficulty);
                if normalized.is_empty() {
                    warn!(
                        "generator {} batch for {} was dropped entirely during normalization",
                        generator.name(),
                        topic
                    );
                    None
                } else {
                    debug!(
                        "generator {} produced {} questions for {}",
                        generator.name(),
                        normalized.len(),
                        topic
                    );
                    Some(normalized)
                }
            }
            Err(e) => {
                warn!("generator {} failed for {}: {}", generator.name(), topic, e);
                None
            }
        }
    }

    fn select_curated(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>> {
        let pool = match self.bank.resolve(topic) {
            Some(pool) => pool,
            None => {
                debug!("no curated topic matches {}, using default pool", topic);
                self.bank.default_pool()
            }
        };
        if pool.is_empty() {
            return Err(QuizError::content_unavailable(format!(
                "no curated content available for topic {}",
                topic
            )));
        }

        let mut selected = filter_by_difficulty(&pool, difficulty, count);
        selected.shuffle(&mut rand::thread_rng());
        selected.truncate(count);

        let normalized = normalize_batch(&selected, topic, difficulty);
        if normalized.is_empty() {
            return Err(QuizError::content_unavailable(format!(
                "curated content for topic {} is malformed",
                topic
            )));
        }
        Ok(normalized)
    }
}

/// Return a freshly shuffled copy of a batch
///
/// Cached batches are never returned by reference, so responses cannot share
/// mutable state.
fn shuffled_copy(batch: &[QuizQuestion]) -> Vec<QuizQuestion> {
    let mut copy = batch.to_vec();
    copy.shuffle(&mut rand::thread_rng());
    copy
}

/// Apply the difficulty filter when the pool supports it
///
/// The filter applies only when the pool's first element carries a difficulty
/// label and the filtered subset can satisfy the request; otherwise the
/// unfiltered pool is used so sparse curated data cannot starve a request.
fn filter_by_difficulty(
    pool: &[RawQuestion],
    difficulty: &str,
    count: usize,
) -> Vec<RawQuestion> {
    let labelled = pool
        .first()
        .map(|question| question.difficulty.is_some())
        .unwrap_or(false);

    if labelled {
        let matching: Vec<RawQuestion> = pool
            .iter()
            .filter(|question| {
                question
                    .difficulty
                    .as_deref()
                    .map(|label| label.eq_ignore_ascii_case(difficulty))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        if matching.len() >= count {
            return matching;
        }
    }
    pool.to_vec()
}
