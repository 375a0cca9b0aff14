//! Content suggestion command.

use std::io::Write;

use anyhow::Result;
use flashcard_core::{request_suggestions, SuggestionOutcome, SuggestionService};

/// Ask `service` for ideas about `content` and print them, one per line.
pub async fn suggest<S, W>(service: &S, content: &str, out: &mut W) -> Result<SuggestionOutcome>
where
    S: SuggestionService + ?Sized,
    W: Write,
{
    let outcome = request_suggestions(service, content).await;
    match &outcome {
        SuggestionOutcome::Suggestions(suggestions) => {
            for suggestion in suggestions {
                writeln!(out, "- {suggestion}")?;
            }
        }
        other => {
            if let Some(message) = other.message() {
                writeln!(out, "{message}")?;
            }
        }
    }
    Ok(outcome)
}
