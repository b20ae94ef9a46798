//! Application state for the PAYE engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxTable};
use crate::history::{HistoryService, InMemoryStore};

/// Shared application state.
///
/// Holds the tax table every calculation uses and the history service
/// that records calculations.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax table.
    config: Arc<ConfigLoader>,
    /// History of past calculations and the last input.
    history: HistoryService,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, history: HistoryService) -> Self {
        Self {
            config: Arc::new(config),
            history,
        }
    }

    /// Creates a state using the statutory table and an in-memory history.
    pub fn in_memory() -> Self {
        Self::new(
            ConfigLoader::default(),
            HistoryService::new(Arc::new(InMemoryStore::new())),
        )
    }

    /// Returns the tax table.
    pub fn table(&self) -> &TaxTable {
        self.config.table()
    }

    /// Returns the history service.
    pub fn history(&self) -> &HistoryService {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_in_memory_state_uses_statutory_table() {
        let state = AppState::in_memory();
        assert_eq!(state.table(), &TaxTable::uganda());
        assert!(state.history().entries().unwrap().is_empty());
    }
}
