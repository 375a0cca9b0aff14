//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Rejected flashcard input. Raised before any mutation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question is required")]
    EmptyQuestion,

    #[error("answer is required")]
    EmptyAnswer,

    #[error("category is required")]
    EmptyCategory,
}

/// Errors raised by a flashcard repository.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode flashcards: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode flashcards: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid flashcard record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by a content suggestion service.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("suggestion service error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("suggestion service is not configured")]
    NotConfigured,
}
