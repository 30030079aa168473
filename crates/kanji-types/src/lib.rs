pub mod types;

pub use types::{EntryStatus, ExampleWord, ImportMode, ImportStats, KanjiEntry};
