pub mod cli;
pub mod commands;
pub mod config;
pub mod storage;
pub mod suggest;

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use flashcard_core::{CategoryFilter, FlashcardStore, StudySession};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::storage::JsonFileRepository;
use crate::suggest::HttpSuggestionService;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(cli.command, &config, &mut stdin.lock(), &mut stdout.lock()).await
}

/// Run one subcommand against the collection in `config.data_dir`.
pub async fn execute<I, W>(
    command: Command,
    config: &Config,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()>
where
    I: BufRead,
    W: Write,
{
    let mut store = FlashcardStore::open(JsonFileRepository::new(&config.data_dir));

    match command {
        Command::Add {
            question,
            answer,
            category,
        } => commands::add(&mut store, out, &question, &answer, &category),
        Command::Edit {
            id,
            question,
            answer,
            category,
        } => commands::edit(&mut store, out, &id, &question, &answer, &category),
        Command::Delete { id } => commands::delete(&mut store, out, &id),
        Command::Show { id, json } => commands::show(&store, out, &id, json),
        Command::List { category, json } => {
            let filter = CategoryFilter::parse(category.as_deref());
            commands::list(&store, out, &filter, json)
        }
        Command::Categories => commands::categories(&store, out),
        Command::Study { category, seed } => {
            let filter = CategoryFilter::parse(category.as_deref());
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut session = StudySession::follow_with_rng(store.subscribe(), filter, rng);
            commands::study(&mut session, input, out)
        }
        Command::Suggest { content } => {
            let endpoint = config
                .suggest_url
                .as_deref()
                .context("no suggestion service configured, set FLASHCARDS_SUGGEST_URL")?;
            let service = HttpSuggestionService::new(endpoint, config.suggest_timeout)?;
            commands::suggest(&service, &content.join(" "), out).await?;
            Ok(())
        }
    }
}
