use std::sync::Arc;

use crate::config::default_db_path;
use crate::infra::memory::MemoryStore;
use crate::infra::sqlite::repo::SqliteStore;
use crate::usecase::ports::store::{KeyValueStore, StoreError};

/// SQLite store under the user data directory. Falls back to an in-memory
/// store, with a status message, when the file cannot be opened.
pub fn open_default_store() -> (Arc<dyn KeyValueStore>, Option<String>) {
    let opened = default_db_path()
        .map_err(|err| StoreError::Unavailable(format!("{err:#}")))
        .and_then(SqliteStore::open);

    match opened {
        Ok(store) => {
            tracing::info!(db_path = %store.db_path.display(), "report store opened");
            (Arc::new(store), None)
        }
        Err(err) => {
            tracing::error!(error = %err, "report store unavailable, edits will not be kept");
            (
                Arc::new(MemoryStore::new()),
                Some(format!("Saved data unavailable: {err}")),
            )
        }
    }
}
