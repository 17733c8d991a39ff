//! Engine wiring and degraded-mode tests

use crate::common::{StubGenerator, StubMode, sample_questions, test_config, write_topic_file};
use quizforge::{GetOptions, QuestionGenerator, QuizEngine, SetOptions};
use serde_json::json;
use std::sync::Arc;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_engine_runs_tier1_only_when_redis_disabled() {
    let stub = Arc::new(StubGenerator::new(StubMode::Succeed));
    let engine = QuizEngine::new(
        test_config(None),
        Some(Arc::clone(&stub) as Arc<dyn QuestionGenerator>),
    )
    .await
    .unwrap();

    let first = engine.select_content("rust", "easy", 4).await.unwrap();
    let second = engine.select_content("rust", "easy", 4).await.unwrap();

    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 4);
    // The second request was a cache hit; the generator ran once.
    assert_eq!(stub.calls(), 1);

    let stats = engine.cache().stats();
    assert!(stats.tier1_hits >= 1);
    assert_eq!(stats.tier2_hits, 0);

    assert_ok!(engine.shutdown().await);
}

#[tokio::test]
async fn test_engine_cache_roundtrip_and_invalidation() {
    let engine = QuizEngine::new(test_config(None), None).await.unwrap();
    let cache = engine.cache();

    cache
        .set("quiz:js:easy", json!(["a"]), &SetOptions::default())
        .await;
    cache
        .set("quiz:py:hard", json!(["b"]), &SetOptions::default())
        .await;
    cache
        .set("user:1", json!({"name": "ada"}), &SetOptions::default())
        .await;

    assert_eq!(
        cache.get("quiz:js:easy", &GetOptions::default()).await,
        Some(json!(["a"]))
    );

    let removed = cache.invalidate_pattern("quiz:*").await;
    assert_eq!(removed, 2);
    assert!(!cache.has("quiz:js:easy").await);
    assert!(cache.has("user:1").await);

    assert_ok!(engine.shutdown().await);
}

#[tokio::test]
async fn test_engine_exposes_dataset_topics() {
    let dir = tempfile::tempdir().unwrap();
    write_topic_file(dir.path(), "javascript", &sample_questions(4, None), true);
    write_topic_file(dir.path(), "python", &sample_questions(2, None), false);

    let engine = QuizEngine::new(test_config(Some(dir.path())), None)
        .await
        .unwrap();

    assert_eq!(
        engine.selector().available_topics(),
        vec!["javascript", "python"]
    );
    assert_eq!(engine.selector().question_count("javascript"), 4);
    assert_eq!(engine.selector().question_count("unknown"), 0);

    assert_ok!(engine.shutdown().await);
}
