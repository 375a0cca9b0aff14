//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "flashcards", version, about = "Create, organize and study flashcards.")]
pub struct Cli {
    /// Directory holding the flashcard collection. Overrides FLASHCARDS_DATA_DIR.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a flashcard.
    Add {
        question: String,
        answer: String,
        category: String,
    },
    /// Replace a flashcard's question, answer and category.
    Edit {
        id: String,
        question: String,
        answer: String,
        category: String,
    },
    /// Delete a flashcard.
    Delete { id: String },
    /// Show one flashcard.
    Show {
        id: String,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List flashcards, newest first.
    List {
        /// Only cards in this category ("all" for every card).
        #[arg(long, short)]
        category: Option<String>,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the categories in use.
    Categories,
    /// Study cards in shuffled order.
    Study {
        /// Only cards in this category ("all" for every card).
        #[arg(long, short)]
        category: Option<String>,
        /// Seed the shuffle for a repeatable order.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Ask the suggestion service for definitions and examples.
    Suggest {
        /// Card text to get suggestions for.
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },
}
