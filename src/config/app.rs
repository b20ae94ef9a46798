//! Process-level settings read from the environment.

use std::env;
use std::path::PathBuf;

/// Environment variable holding the HTTP bind address.
pub const BIND_ADDR_VAR: &str = "PAYE_BIND_ADDR";
/// Environment variable holding the history file path.
pub const HISTORY_FILE_VAR: &str = "PAYE_HISTORY_FILE";
/// Environment variable holding the tax table directory.
pub const CONFIG_DIR_VAR: &str = "PAYE_CONFIG_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Settings for running the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the server binds to.
    pub bind_addr: String,
    /// JSON file backing the history log; in-memory when `None`.
    pub history_file: Option<PathBuf>,
    /// Directory containing `tax_table.yaml`; statutory table when `None`.
    pub config_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            bind_addr: non_empty(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            history_file: non_empty(HISTORY_FILE_VAR).map(PathBuf::from),
            config_dir: non_empty(CONFIG_DIR_VAR).map(PathBuf::from),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert!(config.history_file.is_none());
        assert!(config.config_dir.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (HISTORY_FILE_VAR, "/var/lib/paye/history.json"),
            (CONFIG_DIR_VAR, "./config/uganda"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(
            config.history_file,
            Some(PathBuf::from("/var/lib/paye/history.json"))
        );
        assert_eq!(config.config_dir, Some(PathBuf::from("./config/uganda")));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert!(config.history_file.is_none());
    }
}
