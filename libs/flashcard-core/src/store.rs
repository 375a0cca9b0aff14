//! The authoritative flashcard collection and its persistence binding.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::error::ValidationError;
use crate::repository::FlashcardRepository;
use crate::types::{CategoryFilter, Flashcard, FlashcardDraft};

/// Immutable view of the whole collection, newest first.
pub type Snapshot = Arc<Vec<Flashcard>>;

/// Outcome of the most recent save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// Nothing has been written this session.
    Pristine,
    /// The last mutation reached storage.
    Saved,
    /// The last save failed; memory holds changes storage does not.
    Unsaved(String),
}

/// Single source of truth for the flashcard collection.
///
/// Every mutation rewrites the whole collection through the repository
/// once `load` has run. Mutations made before that only touch memory, so
/// they can never overwrite a blob that has not been read yet. A failed
/// write is logged and the in-memory change stands.
pub struct FlashcardStore<R> {
    repository: R,
    cards: Vec<Flashcard>,
    loaded: bool,
    persistence: Persistence,
    updates: watch::Sender<Snapshot>,
}

impl<R: FlashcardRepository> FlashcardStore<R> {
    /// Create an unloaded, empty store.
    pub fn new(repository: R) -> Self {
        let (updates, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            repository,
            cards: Vec::new(),
            loaded: false,
            persistence: Persistence::Pristine,
            updates,
        }
    }

    /// Create a store and load it from the repository.
    pub fn open(repository: R) -> Self {
        let mut store = Self::new(repository);
        store.load();
        store
    }

    /// Rehydrate from storage.
    ///
    /// A missing blob leaves the collection as it is. An unreadable or
    /// corrupt blob is logged and the collection starts empty.
    pub fn load(&mut self) {
        match self.repository.load() {
            Ok(Some(cards)) => {
                info!(count = cards.len(), "loaded flashcards");
                self.cards = cards;
            }
            Ok(None) => {
                debug!("no stored flashcards");
            }
            Err(e) => {
                error!(error = %e, "failed to load flashcards from storage");
                self.cards.clear();
            }
        }
        self.loaded = true;
        self.publish();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Add a new card at the front of the collection.
    pub fn create(
        &mut self,
        question: &str,
        answer: &str,
        category: &str,
    ) -> Result<Flashcard, ValidationError> {
        let draft = FlashcardDraft::new(question, answer, category)?;
        let card = Flashcard::issue(draft);
        debug!(id = %card.id, category = %card.category, "created flashcard");
        self.cards.insert(0, card.clone());
        self.commit();
        Ok(card)
    }

    /// Replace a card's content in place.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is unknown.
    pub fn update(
        &mut self,
        id: &str,
        question: &str,
        answer: &str,
        category: &str,
    ) -> Result<bool, ValidationError> {
        let draft = FlashcardDraft::new(question, answer, category)?;
        let Some(card) = self.cards.iter_mut().find(|card| card.id == id) else {
            debug!(id, "update ignored, no such flashcard");
            return Ok(false);
        };
        card.apply(draft);
        debug!(id, "updated flashcard");
        self.commit();
        Ok(true)
    }

    /// Remove a card. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        if self.cards.len() == before {
            return false;
        }
        debug!(id, "deleted flashcard");
        self.commit();
        true
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Flashcard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn list_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .filter(|card| seen.insert(card.category.as_str()))
            .map(|card| card.category.clone())
            .collect()
    }

    /// Copy of the cards matching `filter`, newest first.
    pub fn list(&self, filter: &CategoryFilter) -> Vec<Flashcard> {
        self.cards
            .iter()
            .filter(|card| filter.matches(card))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Receive a fresh snapshot after every load and mutation.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.subscribe()
    }

    fn commit(&mut self) {
        self.persist();
        self.publish();
    }

    fn persist(&mut self) {
        if !self.loaded {
            debug!("store not loaded yet, skipping save");
            return;
        }
        match self.repository.save(&self.cards) {
            Ok(()) => self.persistence = Persistence::Saved,
            Err(e) => {
                warn!(error = %e, "failed to save flashcards to storage");
                self.persistence = Persistence::Unsaved(e.to_string());
            }
        }
    }

    fn publish(&self) {
        self.updates.send_replace(Arc::new(self.cards.clone()));
    }
}
