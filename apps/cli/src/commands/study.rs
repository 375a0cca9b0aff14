//! Interactive study loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use flashcard_core::{CategoryFilter, Face, StudySession};
use rand::Rng;

const PROMPT: &str = "[n]ext [p]revious [f]lip [s]huffle [q]uit > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Previous,
    Flip,
    Shuffle,
    Quit,
}

impl Action {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "f" | "flip" => Some(Self::Flip),
            "s" | "shuffle" => Some(Self::Shuffle),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Drive `session` from line commands on `input` until quit or end of input.
pub fn study<G, I, W>(session: &mut StudySession<G>, input: &mut I, out: &mut W) -> Result<()>
where
    G: Rng,
    I: BufRead,
    W: Write,
{
    if session.is_empty() {
        writeln!(out, "No cards to study!")?;
        match session.filter() {
            CategoryFilter::All => writeln!(out, "You haven't created any flashcards yet.")?,
            CategoryFilter::Only(category) => {
                writeln!(out, "There are no cards in the \"{category}\" category.")?
            }
        }
        return Ok(());
    }

    loop {
        if session.refresh() {
            writeln!(out, "Cards changed, reshuffled.")?;
        }
        render(session, out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match Action::parse(&line) {
            Some(Action::Next) => {
                session.next();
            }
            Some(Action::Previous) => {
                session.previous();
            }
            Some(Action::Flip) => {
                session.flip();
            }
            Some(Action::Shuffle) => {
                session.reshuffle();
                writeln!(out, "Shuffled.")?;
            }
            Some(Action::Quit) => break,
            None => writeln!(out, "Unknown command {:?}", line.trim())?,
        }
    }
    Ok(())
}

fn render<G: Rng, W: Write>(session: &StudySession<G>, out: &mut W) -> std::io::Result<()> {
    let (Some(card), Some(progress)) = (session.current(), session.progress()) else {
        return Ok(());
    };
    writeln!(
        out,
        "Card {} of {} ({:.0}%)",
        progress.current, progress.total, progress.percent
    )?;
    match session.face() {
        Face::Question => writeln!(out, "Q: {}", card.question),
        Face::Answer => writeln!(out, "A: {}", card.answer),
    }
}
