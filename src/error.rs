//! Error types for the PAYE engine.
//!
//! The calculation functions themselves are total and never fail. Errors
//! only arise while loading tax tables and while persisting history, and
//! are expressed with the `thiserror` crate.

use thiserror::Error;

/// The main error type for the PAYE engine.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax_table.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/tax_table.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax table was parsed but its bands or rates are inconsistent.
    #[error("Invalid tax table: {message}")]
    InvalidTaxTable {
        /// What is wrong with the table.
        message: String,
    },

    /// Reading or writing the history store failed.
    #[error("History store error at '{path}': {message}")]
    StoreIo {
        /// The backing file of the store.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Stored history could not be serialized or deserialized.
    #[error("History serialization error: {message}")]
    StoreSerialization {
        /// A description of the serialization error.
        message: String,
    },

    /// A history entry with the given ID does not exist.
    #[error("History entry not found: {id}")]
    HistoryEntryNotFound {
        /// The requested entry ID.
        id: String,
    },

    /// No input has been saved for session restore yet.
    #[error("No saved input available")]
    NoSavedInput,

    /// The history lock was poisoned by a panicking writer.
    #[error("History store lock poisoned")]
    LockPoisoned,

    /// A blocking history operation was cancelled or panicked.
    #[error("History task failed: {message}")]
    HistoryTaskFailed {
        /// The join error reported by the runtime.
        message: String,
    },
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::StoreSerialization {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_tax_table_displays_message() {
        let error = EngineError::InvalidTaxTable {
            message: "bands overlap".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid tax table: bands overlap");
    }

    #[test]
    fn test_store_io_displays_path_and_message() {
        let error = EngineError::StoreIo {
            path: "/tmp/history.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "History store error at '/tmp/history.json': permission denied"
        );
    }

    #[test]
    fn test_serde_json_error_converts_to_store_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: EngineError = err.into();
        assert!(matches!(error, EngineError::StoreSerialization { .. }));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_input() -> EngineResult<()> {
            Err(EngineError::NoSavedInput)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
