use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::paths::{ensure_webview_data_dir, webview_data_dir_for};
use crate::config::{default_db_path, STORAGE_KEY};
use crate::domain::entities::event::ReportEvent;
use crate::domain::entities::report::{HeaderField, HoldingColumn, OverviewColumn};
use crate::infra::sqlite::repo::SqliteStore;
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::store::KeyValueStore;
use crate::usecase::services::persistence_service::PersistenceService;
use crate::usecase::services::report_service::ReportSession;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("client-report-{prefix}-{nanos}"))
}

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

#[test]
fn init_db_creates_kv_table() {
    let temp_dir = unique_test_dir("init-db");
    let db_path = temp_dir.join("nested").join("report.sqlite");

    let result = init_db(&db_path);

    assert!(result.is_ok(), "init_db should succeed: {result:?}");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv'",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");

    assert_eq!(table_count, 1, "kv table should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn sqlite_store_put_get_remove() {
    let temp_dir = unique_test_dir("store");
    let store = SqliteStore::open(temp_dir.join("report.sqlite")).expect("store should open");

    assert_eq!(store.get("missing").expect("get should succeed"), None);

    store.put("slot", "first").expect("put should succeed");
    store.put("slot", "second").expect("overwrite should succeed");
    assert_eq!(
        store.get("slot").expect("get should succeed").as_deref(),
        Some("second"),
        "last write should win"
    );

    store.remove("slot").expect("remove should succeed");
    store.remove("slot").expect("removing twice should be harmless");
    assert_eq!(store.get("slot").expect("get should succeed"), None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn session_survives_reopen_on_sqlite_store() {
    let temp_dir = unique_test_dir("session");
    let db_path = temp_dir.join("report.sqlite");
    let store: Arc<dyn KeyValueStore> =
        Arc::new(SqliteStore::open(db_path.clone()).expect("store should open"));

    let mut session =
        ReportSession::open_on(PersistenceService::new(store, STORAGE_KEY), fixed_day());
    session.dispatch(ReportEvent::HeaderEdited(
        HeaderField::FundName,
        "Harbor Income".to_string(),
    ));
    session.dispatch(ReportEvent::OverviewRowAdded);
    session.dispatch(ReportEvent::OverviewRowAdded);
    session.dispatch(ReportEvent::OverviewRowAdded);
    let ids: Vec<_> = session.state().overview.iter().map(|row| row.id).collect();
    for (id, value) in ids.iter().zip(["600", "250", "400"]) {
        session.dispatch(ReportEvent::OverviewCellEdited(
            *id,
            OverviewColumn::MarketValue,
            value.to_string(),
        ));
    }
    session.dispatch(ReportEvent::RowDeleted(ids[1]));
    session.dispatch(ReportEvent::HoldingRowAdded);
    let holding_id = session.state().holdings[0].id;
    session.dispatch(ReportEvent::HoldingCellEdited(
        holding_id,
        HoldingColumn::Symbol,
        "VTI".to_string(),
    ));
    session.dispatch(ReportEvent::HoldingCellEdited(
        holding_id,
        HoldingColumn::Quantity,
        "10".to_string(),
    ));
    session.dispatch(ReportEvent::HoldingCellEdited(
        holding_id,
        HoldingColumn::UnitPrice,
        "25.5".to_string(),
    ));

    let reopened_store: Arc<dyn KeyValueStore> =
        Arc::new(SqliteStore::open(db_path).expect("store should reopen"));
    let reopened =
        ReportSession::open_on(PersistenceService::new(reopened_store, STORAGE_KEY), fixed_day());

    assert_eq!(reopened.state().header.fund_name, "Harbor Income");
    let values: Vec<&str> = reopened
        .state()
        .overview
        .iter()
        .map(|row| row.market_value.as_str())
        .collect();
    assert_eq!(values, vec!["600", "400"], "deleted row should stay deleted");
    assert_eq!(reopened.view().overview.total_display, "$1,000.00");
    assert_eq!(reopened.view().holdings.total_display, "$255.00");
    assert_eq!(reopened.view().report_date, "10/18/2026");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn corrupt_snapshot_in_store_opens_blank_report() {
    let temp_dir = unique_test_dir("corrupt");
    let store = Arc::new(SqliteStore::open(temp_dir.join("report.sqlite")).expect("store should open"));
    store
        .put(STORAGE_KEY, "{\"header\": {\"fundName\": [1, 2]}}")
        .expect("put should succeed");

    let session = ReportSession::open_on(PersistenceService::new(store.clone(), STORAGE_KEY), fixed_day());

    assert_eq!(session.state().header.fund_name, "");
    assert!(session.state().overview.is_empty());
    assert!(
        store.get(STORAGE_KEY).expect("get should succeed").is_some(),
        "opening should not overwrite what is stored"
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn snapshot_without_overview_opens_with_empty_overview() {
    let temp_dir = unique_test_dir("no-overview");
    let store = Arc::new(SqliteStore::open(temp_dir.join("report.sqlite")).expect("store should open"));
    store
        .put(
            STORAGE_KEY,
            r#"{"header":{"fundName":"F","accountNumber":"A","reportPeriod":"P"},
                "holdings":[{"cols":["VTI","Total Market","10","25.5"]}],
                "performance":{"monthlyReturn":"1"},
                "cash":{"startBalance":"1000","deposits":"200","withdrawals":"500"},
                "timestamp":"2026-10-01T12:00:00.000Z"}"#,
        )
        .expect("put should succeed");

    let session = ReportSession::open_on(PersistenceService::new(store, STORAGE_KEY), fixed_day());

    assert!(session.state().overview.is_empty());
    assert_eq!(session.view().overview.total_display, "$0.00");
    assert_eq!(session.view().holdings.total_display, "$255.00");
    assert_eq!(session.view().performance.annualized_display, "12.68%");
    assert_eq!(session.view().cash.end_balance_display, "$700.00");
    assert_eq!(
        session.state().timestamp.as_deref(),
        Some("2026-10-01T12:00:00.000Z")
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn default_db_path_uses_app_directory() {
    let db_path = default_db_path().expect("default db path should resolve");

    assert_eq!(
        db_path.file_name().and_then(|name| name.to_str()),
        Some("report.sqlite")
    );
    assert!(
        db_path
            .components()
            .any(|part| part.as_os_str().to_string_lossy().contains("client-report")),
        "db path should live under the app directory: {}",
        db_path.display()
    );
}

#[test]
fn webview_profile_sits_beside_report_database() {
    let db_path = default_db_path().expect("default db path should resolve");

    let webview_dir = webview_data_dir_for(&db_path);

    assert_eq!(webview_dir.parent(), db_path.parent());
    assert!(webview_dir.to_string_lossy().contains("client-report"));
}

#[test]
fn ensure_webview_data_dir_creates_profile_next_to_db() {
    let temp_dir = unique_test_dir("webview-data-dir");
    let db_path = temp_dir.join("data").join("report.sqlite");

    let webview_dir =
        ensure_webview_data_dir(&db_path).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.join("data").join("webview"));
    assert!(webview_dir.is_dir(), "webview directory should exist");
    assert!(!db_path.exists(), "only the profile directory is created");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
