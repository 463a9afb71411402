use std::path::PathBuf;

use crate::infra::sqlite::queries::{delete_value, read_value, upsert_value};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::store::{KeyValueStore, StoreError};

/// Key-value slots kept in a local SQLite file.
pub struct SqliteStore {
    pub db_path: PathBuf,
}

impl SqliteStore {
    pub fn open(db_path: PathBuf) -> Result<Self, StoreError> {
        init_db(&db_path).map_err(|err| StoreError::Unavailable(format!("{err:#}")))?;
        Ok(Self { db_path })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        read_value(&self.db_path, key).map_err(|err| StoreError::Message(format!("{err:#}")))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        upsert_value(&self.db_path, key, value)
            .map_err(|err| StoreError::Message(format!("{err:#}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        delete_value(&self.db_path, key).map_err(|err| StoreError::Message(format!("{err:#}")))
    }
}
