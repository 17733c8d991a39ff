//! End-to-end selection flow tests

use crate::common::{StubGenerator, StubMode, sample_questions, test_config, write_topic_file};
use quizforge::{QuestionGenerator, QuizEngine};
use std::collections::HashSet;
use std::sync::Arc;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_generator_outage_serves_curated_content() {
    let dir = tempfile::tempdir().unwrap();
    write_topic_file(
        dir.path(),
        "javascript",
        &sample_questions(6, Some("easy")),
        true,
    );

    let stub = Arc::new(StubGenerator::new(StubMode::Fail));
    let engine = QuizEngine::new(
        test_config(Some(dir.path())),
        Some(Arc::clone(&stub) as Arc<dyn QuestionGenerator>),
    )
    .await
    .unwrap();

    let batch = engine.select_content("javascript", "easy", 5).await.unwrap();

    assert!(stub.calls() >= 1);
    assert_eq!(batch.len(), 5);
    for question in &batch {
        assert!(!question.choices.is_empty());
        assert!(question.correct_choice_index < question.choices.len());
        assert_eq!(question.topic, "javascript");
        assert_eq!(question.difficulty, "easy");
    }

    assert_ok!(engine.shutdown().await);
}

#[tokio::test]
async fn test_unknown_topic_never_fails() {
    let engine = QuizEngine::new(test_config(None), None).await.unwrap();

    let batch = engine
        .select_content("totally-unknown-topic", "medium", 3)
        .await
        .unwrap();

    assert_eq!(batch.len(), 3);
    for question in &batch {
        assert!(question.correct_choice_index < question.choices.len());
    }

    assert_ok!(engine.shutdown().await);
}

#[tokio::test]
async fn test_identical_requests_are_permutations_of_one_batch() {
    let stub = Arc::new(StubGenerator::new(StubMode::Succeed));
    let engine = QuizEngine::new(
        test_config(None),
        Some(Arc::clone(&stub) as Arc<dyn QuestionGenerator>),
    )
    .await
    .unwrap();

    let first = engine.select_content("networking", "hard", 6).await.unwrap();
    let second = engine.select_content("networking", "hard", 6).await.unwrap();
    let third = engine.select_content("networking", "hard", 6).await.unwrap();

    assert_eq!(stub.calls(), 1);
    let first_ids: HashSet<&str> = first.iter().map(|q| q.id.as_str()).collect();
    for other in [&second, &third] {
        let ids: HashSet<&str> = other.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(first_ids, ids);
    }

    assert_ok!(engine.shutdown().await);
}

#[tokio::test]
async fn test_empty_generator_batches_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    write_topic_file(dir.path(), "python", &sample_questions(4, None), false);

    let stub = Arc::new(StubGenerator::new(StubMode::Empty));
    let engine = QuizEngine::new(
        test_config(Some(dir.path())),
        Some(Arc::clone(&stub) as Arc<dyn QuestionGenerator>),
    )
    .await
    .unwrap();

    let batch = engine.select_content("python", "medium", 2).await.unwrap();
    assert_eq!(batch.len(), 2);
    assert!(stub.calls() >= 1);

    assert_ok!(engine.shutdown().await);
}
