//! Content record shapes
//!
//! `RawQuestion` is the loosely-shaped unit consumed from generators and
//! curated topic files; `QuizQuestion` is the normalized record returned to
//! consumers. Both serialize camelCase to match the dataset format.

use serde::{Deserialize, Serialize};

/// A raw question as produced by a generator or a curated topic file
///
/// The concept may arrive under either `conceptTested` or `concept`; both are
/// kept so normalization can apply a fixed precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    /// Question text
    pub question: String,
    /// Answer choices
    #[serde(default)]
    pub options: Vec<String>,
    /// Index of the correct choice
    pub correct_index: usize,
    /// Optional explanation shown after answering
    #[serde(default)]
    pub explanation: Option<String>,
    /// Concept under test (preferred field name)
    #[serde(default)]
    pub concept_tested: Option<String>,
    /// Concept under test (alternate field name)
    #[serde(default)]
    pub concept: Option<String>,
    /// Optional hint
    #[serde(default)]
    pub hint: Option<String>,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl RawQuestion {
    /// Create a raw question with the required fields
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_index,
            explanation: None,
            concept_tested: None,
            concept: None,
            hint: None,
            difficulty: None,
        }
    }

    /// Set the difficulty label
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Set the explanation
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Set the concept under test
    #[must_use]
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept_tested = Some(concept.into());
        self
    }

    /// Set the hint
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// A normalized question returned to consumers
///
/// `correct_choice_index` is always a valid index into `choices`; `id` is
/// unique within one response batch but not globally persistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Batch-unique identifier
    pub id: String,
    /// Question text
    pub prompt: String,
    /// Answer choices, never empty
    pub choices: Vec<String>,
    /// Index of the correct choice
    pub correct_choice_index: usize,
    /// Explanation shown after answering
    pub explanation: String,
    /// Concept under test
    pub concept: String,
    /// Hint
    pub hint: String,
    /// Difficulty label
    pub difficulty: String,
    /// Topic the question was requested under, lowercased
    pub topic: String,
}
