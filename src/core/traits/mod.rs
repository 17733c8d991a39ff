//! Trait seams consumed by the engine

mod generator;

pub use generator::{GeneratedBatch, QuestionGenerator};

#[cfg(test)]
pub use generator::MockQuestionGenerator;
