//! JSON encoding of the persisted flashcard collection.
//!
//! The blob is a bare JSON array of cards with no version marker. Decoding
//! is strict: a record with a missing or mistyped field, blank content, a
//! non-lowercase category or a repeated id rejects the whole blob. Unknown
//! extra keys are ignored.

use std::collections::HashSet;

use crate::error::{Result, StorageError};
use crate::types::Flashcard;

/// Serialize the collection, preserving its order.
pub fn encode(cards: &[Flashcard]) -> Result<String> {
    serde_json::to_string_pretty(cards).map_err(StorageError::Encode)
}

/// Parse a persisted blob back into a collection.
pub fn decode(blob: &str) -> Result<Vec<Flashcard>> {
    let cards: Vec<Flashcard> = serde_json::from_str(blob).map_err(StorageError::Decode)?;

    let mut seen = HashSet::with_capacity(cards.len());
    for (index, card) in cards.iter().enumerate() {
        card.check()
            .map_err(|reason| StorageError::InvalidRecord { index, reason })?;
        if !seen.insert(card.id.as_str()) {
            return Err(StorageError::InvalidRecord {
                index,
                reason: format!("duplicate id {}", card.id),
            });
        }
    }

    Ok(cards)
}
