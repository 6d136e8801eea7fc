//! Configuration loading for the Fraglog server binary.
//!
//! The canonical configuration lives in `fraglog-config.yaml` at the
//! project root. This module defines strongly-typed structs that
//! mirror the YAML structure, with defaults for every field and
//! environment-variable overrides for deployment.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FraglogConfig {
    /// Ingestion settings (log file path).
    #[serde(default)]
    pub ingest: IngestConfig,

    /// HTTP server settings (bind address).
    #[serde(default)]
    pub server: ServerSection,
}

impl FraglogConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `FRAGLOG_LOG_PATH` overrides `ingest.log_path`
    /// - `FRAGLOG_HOST` overrides `server.host`
    /// - `FRAGLOG_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override settings with environment variables when set.
    ///
    /// This allows a container deployment to set paths and ports
    /// without modifying the YAML config file.
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FRAGLOG_LOG_PATH") {
            self.ingest.log_path = val;
        }
        if let Ok(val) = std::env::var("FRAGLOG_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("FRAGLOG_PORT")
            && let Ok(port) = val.parse::<u16>()
        {
            self.server.port = port;
        }
    }
}

/// Ingestion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngestConfig {
    /// Path to the game server log to ingest at startup.
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_log_path() -> String {
    "games.log".to_owned()
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}
