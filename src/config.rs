//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every service path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
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
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(&|key: &str| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(&|key: &str| std::env::var(key).ok());
        Ok(config)
    }

    /// Default config file locations, most specific first
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("hospital-portal").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/hospital-portal/config.toml"));
        paths.push(PathBuf::from("./config.toml"));
        paths
    }

    /// Load from default locations or environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let loaded = Self::load_first(&Self::default_paths());
        loaded.log();
        loaded.config
    }

    /// Load the first of `paths` that exists and parses, with environment
    /// overrides. Files that fail to load are skipped and reported.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        Self::load_first_with(paths, |key| std::env::var(key).ok())
    }

    fn load_first_with<F>(paths: &[PathBuf], lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        errors,
                    };
                }
                Err(e) => errors.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        LoadedConfig {
            config,
            source: None,
            errors,
        }
    }

    /// Apply `HOSPITAL_*` overrides, reading variables through `lookup`
    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("HOSPITAL_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("HOSPITAL_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }
        if let Some(level) = lookup("HOSPITAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HOSPITAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of searching the config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` when only defaults and
    /// environment applied
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Report the search through `tracing`. Call once a subscriber is up.
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!("{}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Hospital Portal Configuration
#
# Environment variables override these settings:
# - HOSPITAL_API_URL
# - HOSPITAL_API_TIMEOUT_SECS
# - HOSPITAL_LOG_LEVEL
# - HOSPITAL_LOG_FORMAT

[api]
# Backend REST API base URL
base_url = "http://localhost:8080/api"

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
