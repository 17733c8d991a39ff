//! Reload behavior under concurrent load

use crate::common::{sample_questions, test_config, write_topic_file};
use quizforge::QuizEngine;
use std::sync::Arc;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_reload_is_atomic_under_concurrent_selections() {
    let dir = tempfile::tempdir().unwrap();
    write_topic_file(dir.path(), "alpha", &sample_questions(8, None), false);

    let engine = Arc::new(
        QuizEngine::new(test_config(Some(dir.path())), None)
            .await
            .unwrap(),
    );

    // Readers hammer the selector while the dataset is rewritten and
    // reloaded; every response must be complete and well-formed.
    let mut readers = Vec::new();
    for _ in 0..4 {
        let engine = Arc::clone(&engine);
        readers.push(tokio::spawn(async move {
            for _ in 0..25 {
                let batch = engine.select_content("alpha", "easy", 3).await.unwrap();
                assert!(!batch.is_empty());
                for question in &batch {
                    assert!(question.correct_choice_index < question.choices.len());
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    for round in 0..10 {
        write_topic_file(
            dir.path(),
            "alpha",
            &sample_questions(8 + round, None),
            false,
        );
        write_topic_file(dir.path(), "beta", &sample_questions(round + 1, None), false);
        engine.selector().reload().await.unwrap();
        tokio::task::yield_now().await;
    }

    for reader in readers {
        reader.await.unwrap();
    }

    // Readers observed either the old or the new index throughout; the final
    // state reflects the last reload.
    assert_eq!(engine.selector().available_topics(), vec!["alpha", "beta"]);
    assert_eq!(engine.selector().question_count("alpha"), 17);

    assert_ok!(engine.shutdown().await);
}

#[tokio::test]
async fn test_reload_drops_cached_selections() {
    let dir = tempfile::tempdir().unwrap();
    write_topic_file(dir.path(), "alpha", &sample_questions(4, None), false);

    let engine = QuizEngine::new(test_config(Some(dir.path())), None)
        .await
        .unwrap();

    // Seed a selection-shaped cache entry directly, then reload.
    engine
        .cache()
        .set(
            "quiz:alpha:easy:3",
            serde_json::json!([]),
            &quizforge::SetOptions::default(),
        )
        .await;
    assert!(engine.cache().has("quiz:alpha:easy:3").await);

    engine.selector().reload().await.unwrap();
    assert!(!engine.cache().has("quiz:alpha:easy:3").await);

    assert_ok!(engine.shutdown().await);
}
