//! Shared test infrastructure

use async_trait::async_trait;
use quizforge::{Config, GeneratedBatch, QuestionGenerator, QuizError, RawQuestion, Result};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build `n` well-formed raw questions, optionally labelled with a difficulty
pub fn sample_questions(n: usize, difficulty: Option<&str>) -> Vec<RawQuestion> {
    (0..n)
        .map(|i| {
            let question = RawQuestion::new(
                format!("question {}", i),
                vec![
                    "choice a".to_string(),
                    "choice b".to_string(),
                    "choice c".to_string(),
                    "choice d".to_string(),
                ],
                i % 4,
            );
            match difficulty {
                Some(label) => question.with_difficulty(label),
                None => question,
            }
        })
        .collect()
}

/// Write a curated topic file in either dataset shape
pub fn write_topic_file(dir: &Path, name: &str, questions: &[RawQuestion], wrapped: bool) {
    let body = if wrapped {
        serde_json::json!({ "questions": questions }).to_string()
    } else {
        serde_json::to_string(questions).expect("serialize questions")
    };
    std::fs::write(dir.join(format!("{}.json", name)), body).expect("write topic file");
}

/// Engine configuration for tests: tier-1 only, short TTLs
pub fn test_config(dataset_dir: Option<&Path>) -> Config {
    let mut config = Config::default();
    config.redis.enabled = false;
    config.cache.default_ttl = 60;
    config.cache.tier1_ttl = 60;
    config.content.dataset_dir = dataset_dir.map(Path::to_path_buf);
    config
}

/// Behavior of the stub generator
#[derive(Debug, Clone, Copy)]
pub enum StubMode {
    /// Return a well-formed batch of the requested size
    Succeed,
    /// Fail with a generator error
    Fail,
    /// Return an empty batch
    Empty,
}

/// Hand-written generator stub with an observable call count
pub struct StubGenerator {
    mode: StubMode,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(mode: StubMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        _topic: &str,
        count: usize,
        difficulty: &str,
    ) -> Result<GeneratedBatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            StubMode::Succeed => Ok(GeneratedBatch {
                questions: sample_questions(count, Some(difficulty)),
            }),
            StubMode::Fail => Err(QuizError::generator("stub generator offline")),
            StubMode::Empty => Ok(GeneratedBatch::default()),
        }
    }
}
