use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::import::ImportConfig;
use self::storage::StorageConfig;

pub mod import;
pub mod storage;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub import: ImportConfig,

    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        let log_level = env::var("KANJI_LOG").unwrap_or_else(|_| default_log_level());

        Config {
            storage: StorageConfig::new(),
            import: ImportConfig::new(),

            log_level,
        }
    }

    /// Load a JSON config file, missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            import: ImportConfig::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}
