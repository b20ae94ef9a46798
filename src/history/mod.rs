//! Calculation history and session restore.
//!
//! This module keeps a capacity-bounded log of past calculations (10 by
//! default, oldest evicted first) and the last-used input, behind the
//! [`HistoryStore`] persistence trait.

mod log;
mod service;
mod store;

pub use log::{DEFAULT_HISTORY_CAPACITY, HistoryLog};
pub use service::HistoryService;
pub use store::{HistoryStore, InMemoryStore, JsonFileStore, StoreDocument};
