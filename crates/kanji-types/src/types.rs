use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One kanji with its readings and example words.
///
/// A record set never holds two entries with the same `kanji`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    pub kanji: String,
    #[serde(default)]
    pub hanviet: Vec<String>,
    #[serde(default)]
    pub kun: Vec<String>,
    #[serde(default)]
    pub on: Vec<String>,
    #[serde(default)]
    pub example: Vec<ExampleWord>,
    /// Set by reconciliation, absent on freshly parsed entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryStatus>,
}

impl KanjiEntry {
    pub fn new(kanji: impl Into<String>) -> Self {
        Self {
            kanji: kanji.into(),
            hanviet: Vec::new(),
            kun: Vec::new(),
            on: Vec::new(),
            example: Vec::new(),
            status: None,
        }
    }

    /// Copy of this entry with the given status attached
    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleWord {
    pub text: String,
    #[serde(default)]
    pub phonetic: Option<String>,
}

impl ExampleWord {
    pub fn new(text: impl Into<String>, phonetic: Option<String>) -> Self {
        Self {
            text: text.into(),
            phonetic,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    New,
    Updated,
    Existing,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::New => "new",
            EntryStatus::Updated => "updated",
            EntryStatus::Existing => "existing",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an import combines with the stored collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Keep stored entries the import does not mention
    #[default]
    Merge,
    /// Discard everything stored before the import
    Replace,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMode::Merge => "merge",
            ImportMode::Replace => "replace",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Ok(ImportMode::Merge),
            "replace" => Ok(ImportMode::Replace),
            other => Err(format!("unknown import mode: {other} (expected merge or replace)")),
        }
    }
}

/// Counts reported back to the caller after an import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    pub new: usize,
    pub updated: usize,
    pub existing: usize,
    /// Size of the discarded collection, replace mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
    /// Number of freshly parsed entries
    pub total: usize,
}

impl ImportStats {
    pub fn record(&mut self, status: EntryStatus) {
        match status {
            EntryStatus::New => self.new += 1,
            EntryStatus::Updated => self.updated += 1,
            EntryStatus::Existing => self.existing += 1,
        }
    }

    /// Returns a summary message suitable for display
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} new", self.new),
            format!("{} updated", self.updated),
            format!("{} unchanged", self.existing),
        ];
        if let Some(removed) = self.removed {
            parts.push(format!("{removed} removed"));
        }
        format!("{} entries imported ({})", self.total, parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_omitted_until_assigned() {
        let entry = KanjiEntry::new("人");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("status"));

        let json = serde_json::to_string(&entry.with_status(EntryStatus::Updated)).unwrap();
        assert!(json.contains(r#""status":"updated""#));
    }

    #[test]
    fn reads_browser_collection_shape() {
        let json = r#"[{"kanji":"人","hanviet":["nhân"],"kun":["ひと"],"on":["ジン"],
            "example":[{"text":"人間","phonetic":"にんげん"},{"text":"間柄","phonetic":null}],
            "status":"existing"}]"#;
        let entries: Vec<KanjiEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].example[1].phonetic, None);
        assert_eq!(entries[0].status, Some(EntryStatus::Existing));
    }

    #[test]
    fn removed_only_serialized_for_replace() {
        let stats = ImportStats {
            total: 2,
            new: 2,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("removed"));
        assert_eq!(stats.summary(), "2 entries imported (2 new, 0 updated, 0 unchanged)");
    }

    #[test]
    fn parses_import_mode() {
        assert_eq!("Replace".parse::<ImportMode>(), Ok(ImportMode::Replace));
        assert!("append".parse::<ImportMode>().is_err());
    }
}
