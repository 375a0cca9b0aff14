//! Core types for the flashcard application.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A question/answer pair filed under a category.
///
/// `id` and `created_at` are assigned by the store and never change. The
/// persisted form uses exactly the keys `id`, `question`, `answer`,
/// `category` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Flashcard {
    /// Build a new card from validated content with a fresh id and timestamp.
    pub(crate) fn issue(draft: FlashcardDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: draft.question,
            answer: draft.answer,
            category: draft.category,
            created_at: Utc::now(),
        }
    }

    /// Replace the mutable fields, keeping identity and creation time.
    pub(crate) fn apply(&mut self, draft: FlashcardDraft) {
        self.question = draft.question;
        self.answer = draft.answer;
        self.category = draft.category;
    }

    /// Check that a card read back from storage still satisfies the
    /// content invariants.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id is empty".to_string());
        }
        let draft = FlashcardDraft::new(&self.question, &self.answer, &self.category)
            .map_err(|e| e.to_string())?;
        if draft.category != self.category {
            return Err(format!("category {:?} is not lowercase", self.category));
        }
        Ok(())
    }
}

/// Normalized, validated card content supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDraft {
    question: String,
    answer: String,
    category: String,
}

impl FlashcardDraft {
    /// Trim question and answer, trim and lowercase category, and reject
    /// any field that ends up empty.
    pub fn new(question: &str, answer: &str, category: &str) -> Result<Self, ValidationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ValidationError::EmptyAnswer);
        }
        let category = normalize_category(category);
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Canonical form of a category label.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Which cards a listing or study session covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Filter for a single category. The label is normalized.
    pub fn only(category: &str) -> Self {
        Self::Only(normalize_category(category))
    }

    /// Parse a user-supplied filter. `None`, blank and `"all"` select every
    /// card.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(normalize_category) {
            None => Self::All,
            Some(category) if category.is_empty() || category == "all" => Self::All,
            Some(category) => Self::Only(category),
        }
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => card.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category),
        }
    }
}
