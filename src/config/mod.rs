//! Configuration loading and management for the PAYE engine.
//!
//! This module provides the statutory tax table, loading of alternative
//! tables from YAML files, and the environment-driven server settings.
//!
//! # Example
//!
//! ```no_run
//! use paye_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uganda").unwrap();
//! println!("NSSF cap: {}", config.table().nssf.cap);
//! ```

mod app;
mod loader;
mod types;

pub use app::{AppConfig, BIND_ADDR_VAR, CONFIG_DIR_VAR, HISTORY_FILE_VAR};
pub use loader::{ConfigLoader, TAX_TABLE_FILE};
pub use types::{NssfRates, PayeBand, PayeSchedule, TaxTable};
