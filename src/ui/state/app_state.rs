use dioxus::prelude::{use_hook, use_signal, Signal};

use crate::config::STORAGE_KEY;
use crate::platform::open_default_store;
use crate::usecase::services::persistence_service::PersistenceService;
use crate::usecase::services::report_service::ReportSession;

pub struct AppState {
    pub session: Signal<ReportSession>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let (store, warning) = use_hook(open_default_store);
        let status = use_signal(|| warning.unwrap_or_else(|| "Ready".to_string()));
        let session =
            use_signal(move || ReportSession::open(PersistenceService::new(store, STORAGE_KEY)));
        Self { session, status }
    }
}
