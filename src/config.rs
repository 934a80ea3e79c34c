//! Configuration loading and defaults.
//!
//! Configuration is resolved in order of precedence (highest wins):
//!
//! 1. **Environment variables** — `MATH_API_LISTEN`, `MATH_API_LOG_LEVEL`
//! 2. **Config file** — path via `--config <path>`, or `math-api.toml` in CWD
//! 3. **Compiled defaults** — see each field's default value below
//!
//! The TOML file mirrors the struct hierarchy:
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:8000"
//! max_connections = 256
//! max_body_bytes = 65536  # 64 KB
//! cors = false
//!
//! [logging]
//! level = "info"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "math-api.toml";

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server and resource-limit settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default `0.0.0.0:8000`).
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Maximum requests processed concurrently (default 256).
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Maximum request body size in bytes (default 64 KB).
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Send permissive CORS headers so browser demos can call the API.
    #[serde(default)]
    pub cors: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter level (default `info`). Overridden by `RUST_LOG` env var.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}
fn default_max_connections() -> usize {
    256
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_connections: default_max_connections(),
            max_body_bytes: default_max_body_bytes(),
            cors: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration with the precedence chain: env vars > file > defaults.
    ///
    /// If `path` is `Some`, that file must exist. Otherwise `math-api.toml` in
    /// the current directory is used when present.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Config::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(listen) = lookup("MATH_API_LISTEN") {
            self.server.listen = listen;
        }
        if let Some(level) = lookup("MATH_API_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}
