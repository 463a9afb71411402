use std::sync::Arc;

use crate::infra::web::local_storage::LocalStorageStore;
use crate::usecase::ports::store::KeyValueStore;

pub fn open_default_store() -> (Arc<dyn KeyValueStore>, Option<String>) {
    (Arc::new(LocalStorageStore), None)
}
