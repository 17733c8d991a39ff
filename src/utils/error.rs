//! Error types for the quiz engine

use thiserror::Error;

/// Result type alias for the quiz engine
pub type Result<T> = std::result::Result<T, QuizError>;

/// Main error type for the quiz engine
#[derive(Error, Debug)]
pub enum QuizError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generator failures; recovered locally by falling back to curated content
    #[error("Generator error: {0}")]
    Generator(String),

    /// No content could be produced for a request from any source
    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),

    /// Invalid request parameters, rejected before any I/O
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache errors
    #[error("Cache error: {0}")]
    Cache(String),
}

impl QuizError {
    /// Create a generator error
    pub fn generator(msg: impl Into<String>) -> Self {
        Self::Generator(msg.into())
    }

    /// Create a content-unavailable error
    pub fn content_unavailable(msg: impl Into<String>) -> Self {
        Self::ContentUnavailable(msg.into())
    }

    /// Create an invalid-request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a cache error
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }

    /// Whether the engine recovers from this error without surfacing it
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Generator(_) | Self::Redis(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuizError::invalid_request("count must be at least 1");
        assert_eq!(err.to_string(), "Invalid request: count must be at least 1");

        let err = QuizError::content_unavailable("no pool for topic");
        assert!(err.to_string().starts_with("Content unavailable"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(QuizError::generator("timeout").is_recoverable());
        assert!(!QuizError::invalid_request("bad count").is_recoverable());
        assert!(!QuizError::content_unavailable("empty").is_recoverable());
    }
}
