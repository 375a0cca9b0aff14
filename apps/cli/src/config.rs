//! Runtime configuration from the environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DATA_DIR_VAR: &str = "FLASHCARDS_DATA_DIR";
pub const SUGGEST_URL_VAR: &str = "FLASHCARDS_SUGGEST_URL";
pub const SUGGEST_TIMEOUT_VAR: &str = "FLASHCARDS_SUGGEST_TIMEOUT_SECS";

const DEFAULT_SUGGEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `flashcards.json`.
    pub data_dir: PathBuf,
    /// Content suggestion endpoint. Suggestions are disabled when unset.
    pub suggest_url: Option<String>,
    pub suggest_timeout: Duration,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let suggest_url = lookup(SUGGEST_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let suggest_timeout = match lookup(SUGGEST_TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: SUGGEST_TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_SUGGEST_TIMEOUT,
        };

        Ok(Self {
            data_dir,
            suggest_url,
            suggest_timeout,
        })
    }

    /// Configuration rooted at `data_dir` with suggestions disabled.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            suggest_url: None,
            suggest_timeout: DEFAULT_SUGGEST_TIMEOUT,
        }
    }
}

fn default_data_dir() -> PathBuf {
    // Use the platform data directory, fall back to the current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashcards")
}
