use crate::usecase::ports::store::{KeyValueStore, StoreError};

/// `window.localStorage`, looked up on every call.
pub struct LocalStorageStore;

fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        storage()?
            .get_item(key)
            .map_err(|err| StoreError::Message(format!("{err:?}")))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Message(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        storage()?
            .remove_item(key)
            .map_err(|err| StoreError::Message(format!("{err:?}")))
    }
}
