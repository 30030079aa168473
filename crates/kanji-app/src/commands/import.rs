use std::path::Path;

use anyhow::Context;
use kanji_core::{EntryCollection, KeyValueStore, import_entries};
use kanji_types::{ImportMode, ImportStats};

/// Parse `path` and reconcile it into the collection.
///
/// A file that cannot be read or decoded leaves the collection untouched.
pub fn import_sheet<S: KeyValueStore>(
    collection: &mut EntryCollection<S>,
    path: &Path,
    mode: ImportMode,
) -> anyhow::Result<ImportStats> {
    let fresh = kanji_sheet::import_file(path)
        .with_context(|| format!("Failed to import {}", path.display()))?;

    if fresh.is_empty() {
        tracing::warn!("No kanji rows found in {}", path.display());
    }

    let stats = import_entries(collection, fresh, mode).context("Failed to save imported kanji")?;
    Ok(stats)
}

pub fn render_stats(stats: &ImportStats, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(stats)?)
    } else {
        Ok(stats.summary())
    }
}
