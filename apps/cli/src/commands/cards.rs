//! Library management commands.

use std::io::Write;

use anyhow::{bail, Context, Result};
use flashcard_core::{CategoryFilter, Flashcard, FlashcardRepository, FlashcardStore};

/// Create a card.
pub fn add<R, W>(
    store: &mut FlashcardStore<R>,
    out: &mut W,
    question: &str,
    answer: &str,
    category: &str,
) -> Result<()>
where
    R: FlashcardRepository,
    W: Write,
{
    let card = store
        .create(question, answer, category)
        .context("invalid flashcard")?;
    writeln!(out, "Created flashcard {}", card.id)?;
    Ok(())
}

/// Replace a card's question, answer and category.
pub fn edit<R, W>(
    store: &mut FlashcardStore<R>,
    out: &mut W,
    id: &str,
    question: &str,
    answer: &str,
    category: &str,
) -> Result<()>
where
    R: FlashcardRepository,
    W: Write,
{
    let updated = store
        .update(id, question, answer, category)
        .context("invalid flashcard")?;
    if !updated {
        bail!("no flashcard with id {id}");
    }
    writeln!(out, "Updated flashcard {id}")?;
    Ok(())
}

/// Delete a card. Deleting an unknown id is not an error.
pub fn delete<R, W>(store: &mut FlashcardStore<R>, out: &mut W, id: &str) -> Result<()>
where
    R: FlashcardRepository,
    W: Write,
{
    if store.delete(id) {
        writeln!(out, "Deleted flashcard {id}")?;
    } else {
        writeln!(out, "No flashcard with id {id}, nothing deleted")?;
    }
    Ok(())
}

/// Print one card.
pub fn show<R, W>(store: &FlashcardStore<R>, out: &mut W, id: &str, json: bool) -> Result<()>
where
    R: FlashcardRepository,
    W: Write,
{
    let card = store
        .get_by_id(id)
        .with_context(|| format!("no flashcard with id {id}"))?;
    if json {
        serde_json::to_writer_pretty(&mut *out, card)?;
        writeln!(out)?;
    } else {
        write_card(out, card)?;
    }
    Ok(())
}

/// Print the library, newest first.
pub fn list<R, W>(
    store: &FlashcardStore<R>,
    out: &mut W,
    filter: &CategoryFilter,
    json: bool,
) -> Result<()>
where
    R: FlashcardRepository,
    W: Write,
{
    let cards = store.list(filter);
    if json {
        serde_json::to_writer_pretty(&mut *out, &cards)?;
        writeln!(out)?;
        return Ok(());
    }

    if cards.is_empty() {
        match filter {
            CategoryFilter::All => writeln!(out, "No flashcards yet. Create one with `flashcards add`.")?,
            CategoryFilter::Only(category) => {
                writeln!(out, "No flashcards in the \"{category}\" category.")?
            }
        }
        return Ok(());
    }

    for card in &cards {
        writeln!(out, "{}  [{}]  {}", card.id, card.category, card.question)?;
    }
    Ok(())
}

/// Print each distinct category on its own line.
pub fn categories<R, W>(store: &FlashcardStore<R>, out: &mut W) -> Result<()>
where
    R: FlashcardRepository,
    W: Write,
{
    let categories = store.list_categories();
    if categories.is_empty() {
        writeln!(out, "No categories yet.")?;
    }
    for category in categories {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, card: &Flashcard) -> std::io::Result<()> {
    writeln!(out, "id:        {}", card.id)?;
    writeln!(out, "category:  {}", card.category)?;
    writeln!(out, "created:   {}", card.created_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out, "question:  {}", card.question)?;
    writeln!(out, "answer:    {}", card.answer)
}
