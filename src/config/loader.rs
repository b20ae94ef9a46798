//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax tables
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::TaxTable;

/// File name of the tax table inside a configuration directory.
pub const TAX_TABLE_FILE: &str = "tax_table.yaml";

/// Loads and provides access to the tax table.
///
/// # Directory Structure
///
/// ```text
/// config/uganda/
/// └── tax_table.yaml   # PAYE bands and NSSF rates
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uganda")?;
/// println!("{} PAYE bands", loader.table().paye.bands.len());
/// # Ok::<(), paye_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    table: TaxTable,
}

impl ConfigLoader {
    /// Loads the tax table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `tax_table.yaml` is missing
    /// - the file contains invalid YAML or is missing a field
    /// - the bands or rates fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let table_path = path.as_ref().join(TAX_TABLE_FILE);
        let table = Self::load_yaml::<TaxTable>(&table_path)?;
        table.validate()?;

        info!(
            path = %table_path.display(),
            bands = table.paye.bands.len(),
            nssf_cap = %table.nssf.cap,
            "Loaded tax table"
        );

        Ok(Self { table })
    }

    /// Wraps an already-built table after validating it.
    pub fn from_table(table: TaxTable) -> EngineResult<Self> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tax table.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }
}
