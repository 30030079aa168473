use kanji_config::Config;
use kanji_core::{EntryCollection, FileStore};

pub struct AppState {
    pub config: Config,
    pub collection: EntryCollection<FileStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.storage.data_dir.clone());
        let collection = EntryCollection::new(store, config.storage.collection_key.clone());

        Self { config, collection }
    }
}
