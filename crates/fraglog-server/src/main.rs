//! Fraglog server binary.
//!
//! This is the main entry point that wires together ingestion and the
//! query API. It loads configuration, folds the configured game server
//! log into the in-memory repository, and then serves the repository
//! over HTTP until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `fraglog-config.yaml`
//! 3. Ingest the game server log into the repository
//! 4. Log the ingestion report
//! 5. Serve the query API

mod config;

use std::path::Path;
use std::sync::Arc;

use fraglog_api::{start_server, AppState, ServerConfig};
use fraglog_parser::LogParser;
use fraglog_store::{GameRepository, MemoryGameRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::FraglogConfig;

/// Application entry point for the Fraglog server.
///
/// # Errors
///
/// Returns an error if the log cannot be read or the server cannot
/// bind and serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("fraglog-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        log_path = config.ingest.log_path,
        host = config.server.host,
        port = config.server.port,
        "configuration loaded"
    );

    // 3. Ingest the game server log.
    let mut repository = MemoryGameRepository::new();
    let parser = LogParser::new();
    let report = parser.parse_file(Path::new(&config.ingest.log_path), &mut repository)?;

    // 4. Log the ingestion report.
    info!(
        lines_read = report.lines_read,
        events_handled = report.events_handled,
        lines_skipped = report.lines_skipped,
        lines_failed = report.lines_failed,
        games = repository.len(),
        "ingestion complete"
    );

    // 5. Serve the query API.
    let state = Arc::new(AppState::new(repository));
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

/// Load the server configuration from `fraglog-config.yaml`.
///
/// Looks for the config file relative to the current working
/// directory; environment overrides still apply when it is absent.
fn load_config() -> Result<FraglogConfig, config::ConfigError> {
    let config_path = Path::new("fraglog-config.yaml");
    if config_path.exists() {
        FraglogConfig::from_file(config_path)
    } else {
        info!("config file not found, using defaults");
        let mut config = FraglogConfig::default();
        config.apply_env_overrides();
        Ok(config)
    }
}
