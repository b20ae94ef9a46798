//! History service coordinating the log and its store.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{HistoryEntry, PayrollResult, SalaryInput};

use super::log::{DEFAULT_HISTORY_CAPACITY, HistoryLog};
use super::store::HistoryStore;

/// Records calculations into a bounded history and remembers the last
/// input for session restore.
///
/// Appending to the history is a read-modify-write on the store; the
/// service holds a lock across the whole sequence so concurrent callers
/// never lose entries.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use paye_engine::calculation::compute_payroll;
/// use paye_engine::history::{HistoryService, InMemoryStore};
/// use paye_engine::models::SalaryInput;
///
/// let service = HistoryService::new(Arc::new(InMemoryStore::new()));
/// let input = SalaryInput::default();
/// let result = compute_payroll(&input);
/// service.record(input, result)?;
/// assert_eq!(service.entries()?.len(), 1);
/// # Ok::<(), paye_engine::error::EngineError>(())
/// ```
#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn HistoryStore>,
    capacity: usize,
    lock: Arc<Mutex<()>>,
}

impl HistoryService {
    /// Creates a service keeping the default 10 entries.
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self::with_capacity(store, DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a service keeping at most `capacity` entries.
    pub fn with_capacity(store: Arc<dyn HistoryStore>, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Appends a new entry for `input` and `result`, evicting the oldest
    /// entry when the log is full.
    pub fn record(&self, input: SalaryInput, result: PayrollResult) -> EngineResult<HistoryEntry> {
        let _guard = self.lock.lock().map_err(|_| EngineError::LockPoisoned)?;

        let mut log = HistoryLog::from_entries(self.store.load_history()?, self.capacity);
        let entry = HistoryEntry::new(input, result);
        if let Some(evicted) = log.push(entry.clone()) {
            debug!(evicted_id = %evicted.id, "Evicted oldest history entry");
        }
        self.store.save_history(&log.to_vec())?;

        info!(entry_id = %entry.id, entries = log.len(), "Recorded calculation in history");
        Ok(entry)
    }

    /// Returns the history, newest first.
    pub fn entries(&self) -> EngineResult<Vec<HistoryEntry>> {
        let log = HistoryLog::from_entries(self.store.load_history()?, self.capacity);
        Ok(log.latest_first().cloned().collect())
    }

    /// Returns the entry with the given ID.
    pub fn find(&self, id: Uuid) -> EngineResult<HistoryEntry> {
        self.store
            .load_history()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| EngineError::HistoryEntryNotFound { id: id.to_string() })
    }

    /// Removes every history entry.
    pub fn clear(&self) -> EngineResult<()> {
        let _guard = self.lock.lock().map_err(|_| EngineError::LockPoisoned)?;
        self.store.clear_history()?;
        info!("Cleared calculation history");
        Ok(())
    }

    /// Saves `input` as the last-used input.
    pub fn remember_input(&self, input: &SalaryInput) -> EngineResult<()> {
        let _guard = self.lock.lock().map_err(|_| EngineError::LockPoisoned)?;
        self.store.save_last_input(input)
    }

    /// Returns the last-used input.
    pub fn last_input(&self) -> EngineResult<SalaryInput> {
        self.store.load_last_input()?.ok_or(EngineError::NoSavedInput)
    }
}
