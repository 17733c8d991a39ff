//! Record normalization
//!
//! All content reaching a consumer passes through here, whatever its source.
//! Field precedence is fixed: the concept comes from `conceptTested`, then
//! `concept`, then the request topic; missing explanation and hint take the
//! default strings below; a missing difficulty label takes the requested
//! difficulty. Items that cannot form a valid record are dropped.

use super::types::{QuizQuestion, RawQuestion};
use tracing::warn;
use uuid::Uuid;

const DEFAULT_EXPLANATION: &str = "No explanation available.";
const DEFAULT_HINT: &str = "No hint available.";

/// Normalize one raw item into a consumer-facing record
///
/// Returns `None` when the item has no choices or an out-of-range correct
/// index; a consumer never receives a malformed record.
pub fn normalize_question(
    raw: &RawQuestion,
    topic: &str,
    difficulty: &str,
) -> Option<QuizQuestion> {
    if raw.options.is_empty() {
        warn!("dropping question with no choices: {:?}", raw.question);
        return None;
    }
    if raw.correct_index >= raw.options.len() {
        warn!(
            "dropping question with out-of-range correct index {}: {:?}",
            raw.correct_index, raw.question
        );
        return None;
    }

    Some(QuizQuestion {
        id: Uuid::new_v4().to_string(),
        prompt: raw.question.clone(),
        choices: raw.options.clone(),
        correct_choice_index: raw.correct_index,
        explanation: raw
            .explanation
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string()),
        concept: raw
            .concept_tested
            .clone()
            .or_else(|| raw.concept.clone())
            .unwrap_or_else(|| topic.to_string()),
        hint: raw.hint.clone().unwrap_or_else(|| DEFAULT_HINT.to_string()),
        difficulty: raw
            .difficulty
            .clone()
            .unwrap_or_else(|| difficulty.to_string()),
        topic: topic.to_string(),
    })
}

/// Normalize a batch, dropping invalid items
pub fn normalize_batch(raw: &[RawQuestion], topic: &str, difficulty: &str) -> Vec<QuizQuestion> {
    raw.iter()
        .filter_map(|question| normalize_question(question, topic, difficulty))
        .collect()
}
