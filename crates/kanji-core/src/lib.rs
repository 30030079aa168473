pub mod error;
pub mod preprocess;
pub mod reconcile;
pub mod store;

pub use error::StoreError;
pub use reconcile::{ImportOutcome, classify, import_entries, reconcile};
pub use store::{EntryCollection, FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests;
