use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::report::ReportState;
use crate::domain::entities::snapshot::SnapshotRecord;
use crate::usecase::ports::store::{KeyValueStore, StoreError};

/// Writes and restores the report snapshot under a single store key.
pub struct PersistenceService {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistenceService {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stamps `state` with `now` and overwrites the stored snapshot.
    pub fn save(&self, state: &mut ReportState, now: DateTime<Utc>) -> Result<(), StoreError> {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let json = SnapshotRecord::capture(state, timestamp.clone())
            .to_json()
            .map_err(|err| StoreError::Message(err.to_string()))?;
        self.store.put(&self.key, &json)?;
        state.timestamp = Some(timestamp);
        tracing::debug!(key = %self.key, bytes = json.len(), "report snapshot saved");
        Ok(())
    }

    /// Restored state, or `None` when nothing usable is stored. Read and parse
    /// failures are logged and otherwise ignored.
    pub fn load(&self) -> Option<ReportState> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no saved report snapshot");
                return None;
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read report snapshot");
                return None;
            }
        };

        match SnapshotRecord::from_json(&raw) {
            Ok(record) => {
                let state = record.restore();
                tracing::info!(
                    key = %self.key,
                    overview_rows = state.overview.len(),
                    holding_rows = state.holdings.len(),
                    "report snapshot restored"
                );
                Some(state)
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring corrupt report snapshot");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)?;
        tracing::info!(key = %self.key, "report snapshot cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryStore;
    use chrono::TimeZone;

    fn service() -> (Arc<MemoryStore>, PersistenceService) {
        let store = Arc::new(MemoryStore::new());
        let service = PersistenceService::new(store.clone(), "clientReportData");
        (store, service)
    }

    #[test]
    fn load_without_snapshot_returns_none() {
        let (_store, service) = service();
        assert!(service.load().is_none());
    }

    #[test]
    fn load_with_corrupt_snapshot_returns_none() {
        let (store, service) = service();
        store
            .put("clientReportData", "{\"overview\": 12")
            .expect("put should succeed");

        assert!(service.load().is_none());
    }

    #[test]
    fn save_then_load_reproduces_raw_inputs() {
        let (_store, service) = service();
        let mut state = ReportState::new();
        state.header.fund_name = "Balanced Fund".to_string();
        state.header.account_number = "AC-001".to_string();
        state.header.report_period = "Q1 2026".to_string();
        state.append_overview_row("Equity", "600");
        state.append_overview_row("Bonds", "not a number");
        state.append_holding_row("VTI", "Total Market", "10", "25.5");
        state.performance.monthly_return = "1".to_string();
        state.cash.start_balance = "1000".to_string();
        state.cash.deposits = "200".to_string();
        state.cash.withdrawals = "".to_string();

        let now = Utc
            .with_ymd_and_hms(2026, 10, 18, 9, 30, 0)
            .single()
            .expect("valid instant");
        service.save(&mut state, now).expect("save should succeed");
        let restored = service.load().expect("snapshot should load");

        assert!(restored.same_inputs(&state));
        assert_eq!(state.timestamp.as_deref(), Some("2026-10-18T09:30:00.000Z"));
        assert_eq!(restored.timestamp, state.timestamp);
    }

    #[test]
    fn clear_removes_snapshot() {
        let (_store, service) = service();
        let mut state = ReportState::new();
        service.save(&mut state, Utc::now()).expect("save should succeed");

        service.clear().expect("clear should succeed");

        assert!(service.load().is_none());
    }
}
