//! Content suggestions for flashcard text.
//!
//! The model behind a [`SuggestionService`] is opaque: text goes in, a list
//! of suggestion strings (possibly empty) or an error comes out. Nothing
//! here touches the store or a study session.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::warn;

use crate::error::SuggestionError;

/// Something that proposes definitions and examples for a piece of card text.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, content: &str) -> Result<Vec<String>, SuggestionError>;
}

/// What the user gets to see for one suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Suggestions(Vec<String>),
    /// The service answered but had nothing to offer.
    NoneFound,
    /// The request was never sent because there was no text.
    MissingContent,
    /// The service failed. Safe to retry.
    Failed,
}

impl SuggestionOutcome {
    /// Message to show instead of a suggestion list.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Suggestions(_) => None,
            Self::NoneFound => Some("No suggestions found. Try being more specific."),
            Self::MissingContent => Some("Please enter some content first."),
            Self::Failed => Some("Failed to get suggestions. Please try again."),
        }
    }
}

/// Ask `service` about `content` and fold the result into an outcome.
pub async fn request_suggestions<S>(service: &S, content: &str) -> SuggestionOutcome
where
    S: SuggestionService + ?Sized,
{
    if content.trim().is_empty() {
        return SuggestionOutcome::MissingContent;
    }
    match service.suggest(content).await {
        Ok(suggestions) if suggestions.is_empty() => SuggestionOutcome::NoneFound,
        Ok(suggestions) => SuggestionOutcome::Suggestions(suggestions),
        Err(e) => {
            warn!(error = %e, "error generating content suggestions");
            SuggestionOutcome::Failed
        }
    }
}

/// Handle for one in-flight suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Drops responses that arrive after a newer request was issued.
#[derive(Debug, Default)]
pub struct SuggestionGate {
    latest: AtomicU64,
}

impl SuggestionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding every earlier one.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Pass `outcome` through only if `ticket` is still the latest request.
    pub fn accept(&self, ticket: Ticket, outcome: SuggestionOutcome) -> Option<SuggestionOutcome> {
        self.is_current(ticket).then_some(outcome)
    }

    /// Issue a ticket, run the request, and keep the result only if nothing
    /// newer started meanwhile.
    ///
    /// For front ends that can have several requests in flight, such as one
    /// re-requesting as the user edits. A one-shot caller can use
    /// [`request_suggestions`] directly.
    pub async fn run<S>(&self, service: &S, content: &str) -> Option<SuggestionOutcome>
    where
        S: SuggestionService + ?Sized,
    {
        let ticket = self.begin();
        let outcome = request_suggestions(service, content).await;
        self.accept(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    struct Canned {
        reply: fn() -> Result<Vec<String>, SuggestionError>,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(reply: fn() -> Result<Vec<String>, SuggestionError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SuggestionService for Canned {
        async fn suggest(&self, _content: &str) -> Result<Vec<String>, SuggestionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn returns_suggestions_verbatim() {
        let service = Canned::new(|| Ok(vec!["Photosynthesis: light to sugar".to_string()]));
        let outcome = request_suggestions(&service, "photosynthesis").await;
        assert_eq!(
            outcome,
            SuggestionOutcome::Suggestions(vec!["Photosynthesis: light to sugar".to_string()])
        );
        assert_eq!(outcome.message(), None);
    }

    #[tokio::test]
    async fn empty_result_is_not_a_failure() {
        let service = Canned::new(|| Ok(Vec::new()));
        let outcome = request_suggestions(&service, "xyz").await;
        assert_eq!(outcome, SuggestionOutcome::NoneFound);
        assert_eq!(outcome.message(), Some("No suggestions found. Try being more specific."));
    }

    #[tokio::test]
    async fn failure_maps_to_retryable_message() {
        let service = Canned::new(|| Err(SuggestionError::Network("timed out".to_string())));
        let outcome = request_suggestions(&service, "cells").await;
        assert_eq!(outcome, SuggestionOutcome::Failed);
        assert_eq!(outcome.message(), Some("Failed to get suggestions. Please try again."));
    }

    #[tokio::test]
    async fn blank_content_skips_the_service() {
        let service = Canned::new(|| Ok(vec!["unused".to_string()]));
        let outcome = request_suggestions(&service, "   ").await;
        assert_eq!(outcome, SuggestionOutcome::MissingContent);
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn gate_drops_superseded_responses() {
        let gate = SuggestionGate::new();
        let slow = gate.begin();
        let fast = gate.begin();

        assert_eq!(
            gate.accept(fast, SuggestionOutcome::NoneFound),
            Some(SuggestionOutcome::NoneFound)
        );
        assert_eq!(gate.accept(slow, SuggestionOutcome::Failed), None);
        assert!(gate.is_current(fast));
        assert!(!gate.is_current(slow));
    }

    #[tokio::test]
    async fn gate_run_keeps_latest() {
        let gate = SuggestionGate::new();
        let service = Canned::new(|| Ok(vec!["a".to_string()]));
        let outcome = gate.run(&service, "text").await;
        assert_eq!(outcome, Some(SuggestionOutcome::Suggestions(vec!["a".to_string()])));
    }
}
