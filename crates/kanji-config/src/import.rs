use std::env;
use std::path::PathBuf;

use kanji_types::ImportMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    pub default_mode: ImportMode,
    /// Bundled sheet used by `import-default`
    pub default_sheet: Option<PathBuf>,
}

impl ImportConfig {
    pub fn new() -> Self {
        let default_mode = env::var("KANJI_IMPORT_MODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let default_sheet = env::var("KANJI_DEFAULT_SHEET").ok().map(PathBuf::from);

        Self {
            default_mode,
            default_sheet,
        }
    }
}
