//! History entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollResult, SalaryInput};

/// A snapshot of one past calculation.
///
/// Entries are immutable once recorded; the history log only ever appends
/// new entries and evicts the oldest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The input the calculation ran on.
    pub input: SalaryInput,
    /// The result of the calculation.
    pub result: PayrollResult,
}

impl HistoryEntry {
    /// Creates an entry stamped with a fresh ID and the current time.
    pub fn new(input: SalaryInput, result: PayrollResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            input,
            result,
        }
    }
}
