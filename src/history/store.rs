//! Storage backends for history and the last-used input.
//!
//! The [`HistoryStore`] trait is the persistence port; [`InMemoryStore`]
//! and [`JsonFileStore`] are the two adapters shipped with the crate.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HistoryEntry, SalaryInput};

/// A key-value style store for the history log and the last input.
///
/// Implementations must be thread-safe; callers that need atomic
/// read-modify-write sequences serialize them themselves (see
/// [`HistoryService`](super::HistoryService)).
pub trait HistoryStore: Send + Sync {
    /// Loads all stored history entries, oldest first.
    fn load_history(&self) -> EngineResult<Vec<HistoryEntry>>;

    /// Replaces the stored history entries.
    fn save_history(&self, entries: &[HistoryEntry]) -> EngineResult<()>;

    /// Loads the last-used input, if one was saved.
    fn load_last_input(&self) -> EngineResult<Option<SalaryInput>>;

    /// Replaces the last-used input.
    fn save_last_input(&self, input: &SalaryInput) -> EngineResult<()>;

    /// Removes all history entries. The last input is kept.
    fn clear_history(&self) -> EngineResult<()> {
        self.save_history(&[])
    }
}

/// The persisted document: one history array and one last-input record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// History entries, oldest first.
    #[serde(default)]
    pub salary_history: Vec<HistoryEntry>,
    /// The input of the most recent calculation.
    #[serde(default)]
    pub last_input: Option<SalaryInput>,
}

/// A store that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RwLock<StoreDocument>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryStore {
    fn load_history(&self) -> EngineResult<Vec<HistoryEntry>> {
        let document = self.document.read().map_err(|_| EngineError::LockPoisoned)?;
        Ok(document.salary_history.clone())
    }

    fn save_history(&self, entries: &[HistoryEntry]) -> EngineResult<()> {
        let mut document = self.document.write().map_err(|_| EngineError::LockPoisoned)?;
        document.salary_history = entries.to_vec();
        Ok(())
    }

    fn load_last_input(&self) -> EngineResult<Option<SalaryInput>> {
        let document = self.document.read().map_err(|_| EngineError::LockPoisoned)?;
        Ok(document.last_input.clone())
    }

    fn save_last_input(&self, input: &SalaryInput) -> EngineResult<()> {
        let mut document = self.document.write().map_err(|_| EngineError::LockPoisoned)?;
        document.last_input = Some(input.clone());
        Ok(())
    }
}

/// A store backed by a single JSON file.
///
/// A missing file reads as an empty document. Writes go to a sibling
/// temporary file which is then renamed over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> EngineError {
        EngineError::StoreIo {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }

    fn read_document(&self) -> EngineResult<StoreDocument> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(StoreDocument::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "History file not found, starting empty");
                Ok(StoreDocument::default())
            }
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write_document(&self, document: &StoreDocument) -> EngineResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(document)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))
    }

    fn update<F>(&self, apply: F) -> EngineResult<()>
    where
        F: FnOnce(&mut StoreDocument),
    {
        let _guard = self.write_lock.lock().map_err(|_| EngineError::LockPoisoned)?;
        let mut document = self.read_document()?;
        apply(&mut document);
        self.write_document(&document)
    }
}

impl HistoryStore for JsonFileStore {
    fn load_history(&self) -> EngineResult<Vec<HistoryEntry>> {
        Ok(self.read_document()?.salary_history)
    }

    fn save_history(&self, entries: &[HistoryEntry]) -> EngineResult<()> {
        self.update(|document| document.salary_history = entries.to_vec())
    }

    fn load_last_input(&self) -> EngineResult<Option<SalaryInput>> {
        Ok(self.read_document()?.last_input)
    }

    fn save_last_input(&self, input: &SalaryInput) -> EngineResult<()> {
        self.update(|document| document.last_input = Some(input.clone()))
    }
}
