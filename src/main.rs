//! PAYE engine HTTP server.
//!
//! Settings come from `PAYE_BIND_ADDR`, `PAYE_CONFIG_DIR` and
//! `PAYE_HISTORY_FILE`; log verbosity from `RUST_LOG`.

use std::error::Error;
use std::sync::Arc;

use paye_engine::api::{AppState, create_router};
use paye_engine::config::{AppConfig, ConfigLoader};
use paye_engine::history::{HistoryService, HistoryStore, InMemoryStore, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(AppConfig::from_env()).await {
        error!(error = %err, "Server exited with an error");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let loader = match &config.config_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => {
            info!("No config directory set, using the statutory tax table");
            ConfigLoader::default()
        }
    };

    let store: Arc<dyn HistoryStore> = match &config.history_file {
        Some(path) => {
            info!(path = %path.display(), "Persisting history to file");
            Arc::new(JsonFileStore::new(path.clone()))
        }
        None => Arc::new(InMemoryStore::new()),
    };

    let state = AppState::new(loader, HistoryService::new(store));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Starting PAYE engine server");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
