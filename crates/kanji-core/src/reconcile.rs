use std::collections::{HashMap, HashSet};

use kanji_types::{EntryStatus, ExampleWord, ImportMode, ImportStats, KanjiEntry};

use crate::error::StoreError;
use crate::preprocess::is_blank;
use crate::store::{EntryCollection, KeyValueStore};

/// Result of combining a fresh import with the stored collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Collection to persist
    pub final_set: Vec<KanjiEntry>,
    pub stats: ImportStats,
}

/// Classify `fresh` against the stored entry with the same key
pub fn classify(old: Option<&KanjiEntry>, fresh: &KanjiEntry) -> EntryStatus {
    let Some(old) = old else {
        return EntryStatus::New;
    };

    let unchanged = readings_equal(&old.hanviet, &fresh.hanviet)
        && readings_equal(&old.kun, &fresh.kun)
        && readings_equal(&old.on, &fresh.on)
        && examples_equal(&old.example, &fresh.example);

    if unchanged {
        EntryStatus::Existing
    } else {
        EntryStatus::Updated
    }
}

/// Blank items are ignored, the rest is compared position by position.
/// Two lists holding the same readings in a different order are not equal.
fn readings_equal(a: &[String], b: &[String]) -> bool {
    let a: Vec<&str> = a.iter().map(String::as_str).filter(|s| !is_blank(s)).collect();
    let b: Vec<&str> = b.iter().map(String::as_str).filter(|s| !is_blank(s)).collect();
    a == b
}

fn examples_equal(a: &[ExampleWord], b: &[ExampleWord]) -> bool {
    let a: Vec<&ExampleWord> = a.iter().filter(|e| !e.is_blank()).collect();
    let b: Vec<&ExampleWord> = b.iter().filter(|e| !e.is_blank()).collect();

    a.len() == b.len()
        && a
            .iter()
            .zip(&b)
            .all(|(x, y)| x.text == y.text && x.phonetic == y.phonetic)
}

/// Combine freshly parsed entries with the prior collection.
///
/// Every fresh entry gets a status. In merge mode, prior entries the import
/// does not mention are appended untouched; in replace mode they are dropped
/// and counted in `stats.removed`.
pub fn reconcile(fresh: Vec<KanjiEntry>, prior: &[KanjiEntry], mode: ImportMode) -> ImportOutcome {
    // Later duplicates overwrite earlier ones
    let prior_by_key: HashMap<&str, &KanjiEntry> =
        prior.iter().map(|e| (e.kanji.as_str(), e)).collect();

    let duplicates = duplicate_keys(&fresh);
    if !duplicates.is_empty() {
        tracing::warn!(
            "Import contains duplicate kanji, last row wins on lookup: {}",
            duplicates.join(" ")
        );
    }

    let mut stats = ImportStats {
        total: fresh.len(),
        ..Default::default()
    };

    let classified: Vec<KanjiEntry> = fresh
        .into_iter()
        .map(|entry| {
            let status = classify(prior_by_key.get(entry.kanji.as_str()).copied(), &entry);
            stats.record(status);
            entry.with_status(status)
        })
        .collect();

    let final_set = match mode {
        ImportMode::Merge => {
            let fresh_keys: HashSet<&str> = classified.iter().map(|e| e.kanji.as_str()).collect();
            let untouched: Vec<KanjiEntry> = prior
                .iter()
                .filter(|e| !fresh_keys.contains(e.kanji.as_str()))
                .cloned()
                .collect();
            tracing::debug!("Merge keeps {} untouched entries", untouched.len());

            let mut merged = classified;
            merged.extend(untouched);
            merged
        }
        ImportMode::Replace => {
            stats.removed = Some(prior.len());
            classified
        }
    };

    ImportOutcome { final_set, stats }
}

/// Keys that appear more than once, in first-seen order
pub fn duplicate_keys(entries: &[KanjiEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entry in entries {
        let key = entry.kanji.as_str();
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push(key.to_string());
        }
    }

    duplicates
}

/// Reconcile `fresh` against the stored collection and persist the result.
///
/// Nothing is written if loading the prior collection fails.
pub fn import_entries<S: KeyValueStore>(
    collection: &mut EntryCollection<S>,
    fresh: Vec<KanjiEntry>,
    mode: ImportMode,
) -> Result<ImportStats, StoreError> {
    let prior = collection.load()?;
    tracing::info!(
        "Importing {} entries in {} mode over {} stored",
        fresh.len(),
        mode,
        prior.len()
    );

    let outcome = reconcile(fresh, &prior, mode);
    collection.save(&outcome.final_set)?;

    tracing::info!("{}", outcome.stats.summary());
    Ok(outcome.stats)
}
