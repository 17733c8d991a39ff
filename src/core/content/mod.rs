//! Content selection and curated fallback
//!
//! This module contains the content-selection pipeline: the curated question
//! bank, record normalization, and the selector that orchestrates generated
//! and curated sources behind the cache coordinator.

mod curated;
mod defaults;
mod normalize;
mod selector;
mod types;


pub use curated::{CuratedBank, TopicIndex};
pub use defaults::builtin_questions;
pub use normalize::{normalize_batch, normalize_question};
pub use selector::ContentSelector;
pub use types::{QuizQuestion, RawQuestion};
