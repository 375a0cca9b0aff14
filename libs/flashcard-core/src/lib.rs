//! Core flashcard library.
//!
//! Provides:
//! - The flashcard model and input normalization
//! - `FlashcardStore`, the authoritative collection, persisted through a
//!   `FlashcardRepository`
//! - `StudySession`, shuffled cyclic traversal over a filtered card set
//! - The content suggestion contract

pub mod codec;
pub mod error;
pub mod repository;
pub mod session;
pub mod store;
pub mod suggest;
pub mod types;

pub use error::{Result, StorageError, SuggestionError, ValidationError};
pub use repository::{FlashcardRepository, MemoryRepository, STORAGE_KEY};
pub use session::{shuffled, Face, Progress, StudySession};
pub use store::{FlashcardStore, Persistence, Snapshot};
pub use suggest::{request_suggestions, SuggestionGate, SuggestionOutcome, SuggestionService, Ticket};
pub use types::{normalize_category, CategoryFilter, Flashcard, FlashcardDraft};
