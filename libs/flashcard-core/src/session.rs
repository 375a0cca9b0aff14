//! Shuffled traversal over a filtered set of flashcards.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::debug;

use crate::store::Snapshot;
use crate::types::{CategoryFilter, Flashcard};

/// Return a uniformly random permutation of `items`, leaving `items` as is.
///
/// Fisher-Yates: walk from the last index down to 1 and swap each slot with
/// a uniformly chosen slot in `[0, i]`.
pub fn shuffled<T: Clone, G: Rng + ?Sized>(items: &[T], rng: &mut G) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Visible side of the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Question,
    Answer,
}

/// "Card i of n" counter for the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// One-based index of the current card.
    pub current: usize,
    pub total: usize,
    pub percent: f64,
}

/// Study state over a snapshot of cards.
///
/// The session owns copies of the cards it was given and never writes back
/// to the store. A session created with [`StudySession::follow`] watches the
/// store and re-shuffles from the start whenever the cards matching its
/// filter change; changes outside the filter leave it alone.
pub struct StudySession<G = StdRng> {
    filter: CategoryFilter,
    source: Snapshot,
    cards: Vec<Flashcard>,
    order: Vec<Flashcard>,
    position: usize,
    face: Face,
    rng: G,
    updates: Option<watch::Receiver<Snapshot>>,
}

impl StudySession<StdRng> {
    /// Session over a fixed list of cards.
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self::with_rng(cards, StdRng::from_entropy())
    }

    /// Session tracking a store's snapshots through `updates`.
    pub fn follow(updates: watch::Receiver<Snapshot>, filter: CategoryFilter) -> Self {
        Self::follow_with_rng(updates, filter, StdRng::from_entropy())
    }
}

impl<G: Rng> StudySession<G> {
    pub fn with_rng(cards: Vec<Flashcard>, rng: G) -> Self {
        Self::build(Arc::new(cards), CategoryFilter::All, None, rng)
    }

    pub fn follow_with_rng(
        mut updates: watch::Receiver<Snapshot>,
        filter: CategoryFilter,
        rng: G,
    ) -> Self {
        let source = updates.borrow_and_update().clone();
        Self::build(source, filter, Some(updates), rng)
    }

    fn build(
        source: Snapshot,
        filter: CategoryFilter,
        updates: Option<watch::Receiver<Snapshot>>,
        rng: G,
    ) -> Self {
        let mut session = Self {
            filter,
            source,
            cards: Vec::new(),
            order: Vec::new(),
            position: 0,
            face: Face::Question,
            rng,
            updates,
        };
        let cards = session.matching();
        session.shuffle(&cards);
        session
    }

    /// Replace the study set with a fresh permutation of `cards` and go back
    /// to the first card.
    pub fn shuffle(&mut self, cards: &[Flashcard]) {
        self.cards = cards.to_vec();
        self.order = shuffled(cards, &mut self.rng);
        self.position = 0;
        self.face = Face::Question;
    }

    /// Shuffle the current study set again.
    pub fn reshuffle(&mut self) {
        let cards = std::mem::take(&mut self.cards);
        self.shuffle(&cards);
    }

    /// Switch category. Always re-shuffles from the start.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if let Some(updates) = self.updates.as_mut() {
            self.source = updates.borrow_and_update().clone();
        }
        debug!(from = %self.filter, to = %filter, "study filter changed");
        self.filter = filter;
        let cards = self.matching();
        self.shuffle(&cards);
    }

    /// Pick up the latest store snapshot, if any.
    ///
    /// Returns `true` when the filtered set changed and the session was
    /// re-shuffled.
    pub fn refresh(&mut self) -> bool {
        let Some(updates) = self.updates.as_mut() else {
            return false;
        };
        if !updates.has_changed().unwrap_or(false) {
            return false;
        }
        self.source = updates.borrow_and_update().clone();

        let cards = self.matching();
        if cards == self.cards {
            return false;
        }
        debug!(count = cards.len(), "study set changed, reshuffling");
        self.shuffle(&cards);
        true
    }

    /// Advance one card, wrapping past the end.
    pub fn next(&mut self) -> Option<&Flashcard> {
        if self.order.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.order.len();
        self.face = Face::Question;
        self.current()
    }

    /// Step back one card, wrapping from the first to the last.
    pub fn previous(&mut self) -> Option<&Flashcard> {
        if self.order.is_empty() {
            return None;
        }
        let len = self.order.len();
        self.position = (self.position + len - 1) % len;
        self.face = Face::Question;
        self.current()
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.order.get(self.position)
    }

    /// Turn the current card over.
    pub fn flip(&mut self) -> Face {
        self.face = match self.face {
            Face::Question => Face::Answer,
            Face::Answer => Face::Question,
        };
        self.face
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Traversal order, starting from the first shuffled card.
    pub fn order(&self) -> &[Flashcard] {
        &self.order
    }

    pub fn progress(&self) -> Option<Progress> {
        if self.order.is_empty() {
            return None;
        }
        let current = self.position + 1;
        let total = self.order.len();
        Some(Progress {
            current,
            total,
            percent: current as f64 / total as f64 * 100.0,
        })
    }

    fn matching(&self) -> Vec<Flashcard> {
        self.source
            .iter()
            .filter(|card| self.filter.matches(card))
            .cloned()
            .collect()
    }
}
