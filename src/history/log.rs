//! Capacity-bounded history log.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::models::HistoryEntry;

/// Number of entries kept when no capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// An ordered log of past calculations holding at most `capacity` entries.
///
/// Entries are kept in insertion order. Pushing onto a full log evicts the
/// oldest entry first.
///
/// # Example
///
/// ```
/// use paye_engine::calculation::compute_payroll;
/// use paye_engine::history::HistoryLog;
/// use paye_engine::models::{HistoryEntry, SalaryInput};
///
/// let mut log = HistoryLog::with_capacity(2);
/// for _ in 0..3 {
///     let input = SalaryInput::default();
///     let result = compute_payroll(&input);
///     log.push(HistoryEntry::new(input, result));
/// }
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty log holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuilds a log from stored entries, oldest first, keeping only the
    /// most recent `capacity` of them.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut log = Self::with_capacity(capacity);
        for entry in entries {
            log.push(entry);
        }
        log
    }

    /// Appends an entry, returning the evicted oldest entry if the log was
    /// full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates entries newest first.
    pub fn latest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Finds the entry with the given ID.
    pub fn find(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the entries oldest first.
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
