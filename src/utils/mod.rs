//! Utility modules for the quiz engine
//!
//! - **error**: Error handling and the crate-wide `Result` alias
//! - **logging**: Structured logging initialization

pub mod error;
pub mod logging;

pub use error::{QuizError, Result};
