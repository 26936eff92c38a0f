//! Configuration for doc-handler

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DocError, Result};

/// Environment variable whose presence marks a hosted production deployment
pub const PRODUCTION_MARKER_ENV: &str = "WEBSITE_SITE_NAME";

/// Environment variable holding the production listen port
pub const PORT_ENV: &str = "PORT";

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen host
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum accepted request body in bytes (base64 inflates ~4/3)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Launch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Production when `WEBSITE_SITE_NAME` is set, development otherwise
    #[default]
    Auto,
    Production,
    Development,
}

/// Process runtime configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub mode: LaunchMode,
    /// Tokio worker threads in production
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Document storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory receiving document copies, relative to the working directory
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
}

/// Log output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter level, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024 // 32MB
}

fn default_workers() -> usize {
    4
}

fn default_temp_dir() -> String {
    "temp_files".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mode: LaunchMode::Auto,
            workers: default_workers(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DocError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| DocError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig::default(),
            runtime: RuntimeConfig {
                mode: LaunchMode::Development,
                workers: default_workers(),
            },
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
        }
    }

    /// Resolve `Auto` against the environment
    fn resolved_mode_with(&self, env: impl Fn(&str) -> Option<String>) -> LaunchMode {
        match self.runtime.mode {
            LaunchMode::Auto if env(PRODUCTION_MARKER_ENV).is_some() => LaunchMode::Production,
            LaunchMode::Auto => LaunchMode::Development,
            mode => mode,
        }
    }

    /// Apply environment overrides for the resolved launch mode
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    fn apply_env_with(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        let mode = self.resolved_mode_with(&env);
        self.runtime.mode = mode;

        match mode {
            LaunchMode::Production => {
                if let Some(port) = env(PORT_ENV) {
                    self.server.port = port.parse().map_err(|e| {
                        DocError::Config(format!("Invalid {} '{}': {}", PORT_ENV, port, e))
                    })?;
                }
                if self.logging.format == "pretty" {
                    self.logging.format = "json".to_string();
                }
            }
            LaunchMode::Development | LaunchMode::Auto => {}
        }

        Ok(())
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.runtime.workers == 0 {
            return Err(DocError::Config("workers must be at least 1".to_string()));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(DocError::Config(
                "request_timeout_seconds must be at least 1".to_string(),
            ));
        }

        if self.storage.temp_dir.trim().is_empty() {
            return Err(DocError::Config("storage.temp_dir is empty".to_string()));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(DocError::Config(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            runtime: RuntimeConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
