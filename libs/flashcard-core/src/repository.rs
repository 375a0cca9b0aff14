//! Persistence port for the flashcard collection.

use std::cell::{Cell, RefCell};

use crate::codec;
use crate::error::{Result, StorageError};
use crate::types::Flashcard;

/// Key under which the collection blob is stored.
pub const STORAGE_KEY: &str = "flashcards";

/// Storage for the whole flashcard collection as one blob.
pub trait FlashcardRepository {
    /// Read the persisted collection. `Ok(None)` means nothing was stored yet.
    fn load(&self) -> Result<Option<Vec<Flashcard>>>;

    /// Replace the persisted collection.
    fn save(&self, cards: &[Flashcard]) -> Result<()>;
}

impl<R: FlashcardRepository + ?Sized> FlashcardRepository for &R {
    fn load(&self) -> Result<Option<Vec<Flashcard>>> {
        (**self).load()
    }

    fn save(&self, cards: &[Flashcard]) -> Result<()> {
        (**self).save(cards)
    }
}

/// In-memory repository holding the encoded blob.
///
/// Reads and writes can be made to fail, which is how tests exercise the
/// store's recovery paths.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    blob: RefCell<Option<String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw blob, as if a previous run had stored it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let repo = Self::default();
        repo.blob.replace(Some(blob.into()));
        repo
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl FlashcardRepository for MemoryRepository {
    fn load(&self) -> Result<Option<Vec<Flashcard>>> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable("read refused".to_string()));
        }
        self.blob
            .borrow()
            .as_deref()
            .map(codec::decode)
            .transpose()
    }

    fn save(&self, cards: &[Flashcard]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("write refused".to_string()));
        }
        let blob = codec::encode(cards)?;
        self.blob.replace(Some(blob));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_repository_loads_nothing() {
        let repo = MemoryRepository::new();
        assert!(repo.load().unwrap().is_none());
        assert_eq!(repo.writes(), 0);
    }

    #[test]
    fn save_then_load() {
        let repo = MemoryRepository::new();
        repo.save(&[]).unwrap();
        assert_eq!(repo.blob().as_deref(), Some("[]"));
        assert_eq!(repo.load().unwrap(), Some(Vec::new()));
        assert_eq!(repo.writes(), 1);
    }

    #[test]
    fn injected_failures() {
        let repo = MemoryRepository::with_blob("[]");
        repo.fail_reads(true);
        repo.fail_writes(true);
        assert!(repo.load().is_err());
        assert!(repo.save(&[]).is_err());
        assert_eq!(repo.writes(), 0);
    }

    #[test]
    fn corrupt_blob_fails_to_load() {
        let repo = MemoryRepository::with_blob("{not json");
        assert!(matches!(repo.load(), Err(StorageError::Decode(_))));
    }
}
