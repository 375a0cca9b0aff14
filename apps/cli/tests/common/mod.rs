//! Common test utilities for CLI integration tests.
//!
//! `TestContext` owns a temporary data directory and runs subcommands
//! against it, capturing what they print.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use flashcard_core::FlashcardStore;
use flashcards_cli::cli::Cli;
use flashcards_cli::config::Config;
use flashcards_cli::execute;
use flashcards_cli::storage::JsonFileRepository;

pub struct TestContext {
    dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::with_data_dir(dir.path());
        Self { dir, config }
    }

    /// Run `flashcards <args>` with no stdin.
    pub async fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        self.run_with_input(args, "").await
    }

    /// Run `flashcards <args>` feeding `input` on stdin.
    pub async fn run_with_input(&self, args: &[&str], input: &str) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("flashcards").chain(args.iter().copied()))?;
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        execute(cli.command, &self.config, &mut input, &mut output).await?;
        Ok(String::from_utf8(output).expect("utf-8 output"))
    }

    /// Open the collection the commands operate on.
    pub fn store(&self) -> FlashcardStore<JsonFileRepository> {
        FlashcardStore::open(self.repository())
    }

    pub fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(self.dir.path())
    }

    pub fn blob_path(&self) -> PathBuf {
        self.repository().path().to_path_buf()
    }
}

/// Pull the id out of "Created flashcard <id>".
pub fn created_id(output: &str) -> String {
    output
        .trim()
        .strip_prefix("Created flashcard ")
        .expect("create confirmation")
        .to_string()
}
