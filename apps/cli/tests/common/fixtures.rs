//! Test fixtures and factory functions for creating test data.

use flashcard_core::{Flashcard, FlashcardRepository, FlashcardStore};

/// Math and biology cards, in creation order.
pub const SAMPLE_CARDS: &[(&str, &str, &str)] = &[
    ("What is 2+2?", "4", "Math"),
    ("What is the powerhouse of the cell?", "Mitochondria", "Bio"),
    ("What is 3*3?", "9", "math"),
];

/// Create every sample card in `store`, returning them newest first.
pub fn seed_sample_cards<R: FlashcardRepository>(store: &mut FlashcardStore<R>) -> Vec<Flashcard> {
    let mut created: Vec<Flashcard> = SAMPLE_CARDS
        .iter()
        .map(|(question, answer, category)| {
            store
                .create(question, answer, category)
                .expect("sample card is valid")
        })
        .collect();
    created.reverse();
    created
}

/// Blob in the persisted format, as an earlier run would have written it.
pub fn stored_blob() -> &'static str {
    r#"[
  {
    "id": "1718000000001",
    "question": "Capital of France?",
    "answer": "Paris",
    "category": "geography",
    "createdAt": "2024-06-10T06:13:20.001Z"
  },
  {
    "id": "1718000000000",
    "question": "What is 2+2?",
    "answer": "4",
    "category": "math",
    "createdAt": "2024-06-10T06:13:20Z"
  }
]"#
}
