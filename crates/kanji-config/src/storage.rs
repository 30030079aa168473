use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("kanji-data")
}

fn default_collection_key() -> String {
    "kanjiData".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key the kanji collection is stored under
    #[serde(default = "default_collection_key")]
    pub collection_key: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("KANJI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let collection_key =
            env::var("KANJI_COLLECTION_KEY").unwrap_or_else(|_| default_collection_key());

        Self {
            data_dir,
            collection_key,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            collection_key: default_collection_key(),
        }
    }
}
