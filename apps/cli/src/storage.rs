//! Flashcard collection stored as a JSON file on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use flashcard_core::codec;
use flashcard_core::error::Result;
use flashcard_core::{Flashcard, FlashcardRepository, STORAGE_KEY};

/// Keeps the whole collection in `<dir>/flashcards.json`.
///
/// Saves write a sibling temp file and rename it over the blob, so a crash
/// mid-write leaves the previous collection in place.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl FlashcardRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<Vec<Flashcard>>> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        codec::decode(&blob).map(Some)
    }

    fn save(&self, cards: &[Flashcard]) -> Result<()> {
        let blob = codec::encode(cards)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }
}
