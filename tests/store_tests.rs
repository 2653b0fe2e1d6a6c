use ragenda::errors::AppError;
use ragenda::models::coverage::{Coverage, CoverageSet};
use ragenda::models::status::EventStatus;
use rusqlite::Connection;

mod common;
use common::{d, event, open_store, t};

fn log_count(db_path: &str, operation: &str) -> i64 {
    let conn = Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = ?1",
        [operation],
        |row| row.get(0),
    )
    .expect("count log rows")
}

#[test]
fn test_create_then_get_returns_all_fields() {
    let (mut store, _) = open_store("store_roundtrip");

    let mut fields = event("Board meeting", "2024-03-10", "09:00", "10:30");
    fields.is_presidential_agenda = true;
    fields.location = "Main hall".into();
    fields.address = "Av. Paulista, 1000".into();
    fields.coverage = CoverageSet::new([Coverage::Video, Coverage::Social, Coverage::Press]);
    fields.responsible_parties = "Fred, Ana".into();
    fields.equipment = "Tripod, mic".into();
    fields.notes = "Bring badges".into();
    fields.needs_driver = true;
    fields.driver_name = "Carlos".into();
    fields.driver_phone = "(11) 98888-7777".into();
    fields.status = EventStatus::Cancelled;

    let id = store.create(&fields).expect("create");
    let loaded = store.get(id).expect("get").expect("event exists");

    assert_eq!(loaded.id, id);
    assert_eq!(loaded.fields, fields);
}

#[test]
fn test_list_all_is_sorted_by_date_then_start() {
    let (mut store, _) = open_store("store_ordering");

    let inputs = [
        ("c", "2024-03-11", "08:00"),
        ("a", "2024-03-10", "14:00"),
        ("b", "2024-03-10", "09:00"),
        ("d", "2024-01-31", "23:00"),
        ("e", "2024-03-10", "09:00"),
    ];
    for (title, date, start) in inputs {
        store
            .create(&event(title, date, start, "23:59"))
            .expect("create");
    }

    let titles: Vec<String> = store
        .list_all()
        .expect("list")
        .into_iter()
        .map(|e| e.fields.title)
        .collect();

    // same (date, start): insertion order
    assert_eq!(titles, vec!["d", "b", "e", "a", "c"]);
}

#[test]
fn test_toggle_status_twice_restores_original() {
    let (mut store, db_path) = open_store("store_toggle");
    let id = store
        .create(&event("Press conference", "2024-03-10", "11:00", "12:00"))
        .expect("create");

    assert_eq!(store.toggle_status(id).expect("toggle"), EventStatus::Cancelled);
    assert_eq!(store.toggle_status(id).expect("toggle"), EventStatus::Active);

    let ev = store.require(id).expect("event");
    assert_eq!(ev.fields.status, EventStatus::Active);
    assert_eq!(log_count(&db_path, "status"), 2);
}

#[test]
fn test_toggle_status_unknown_id_is_not_found() {
    let (mut store, _) = open_store("store_toggle_missing");
    let err = store.toggle_status(42).unwrap_err();
    assert!(matches!(err, AppError::NotFound(42)));
}

#[test]
fn test_update_replaces_every_field() {
    let (mut store, _) = open_store("store_update");

    let mut original = event("Visit", "2024-05-01", "10:00", "11:00");
    original.needs_driver = true;
    original.driver_phone = "555-0101".into();
    original.coverage = CoverageSet::new([Coverage::Photo]);
    let id = store.create(&original).expect("create");

    let replacement = event("Visit (moved)", "2024-05-02", "15:00", "16:00");
    store.update(id, &replacement).expect("update");

    let loaded = store.require(id).expect("event");
    assert_eq!(loaded.fields, replacement);
    assert!(!loaded.fields.needs_driver);
    assert!(loaded.fields.coverage.is_empty());
}

#[test]
fn test_update_unknown_id_is_not_found_and_creates_nothing() {
    let (mut store, _) = open_store("store_update_missing");

    let err = store
        .update(7, &event("Ghost", "2024-05-01", "10:00", "11:00"))
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(7)));
    assert!(store.list_all().expect("list").is_empty());
}

#[test]
fn test_delete_removes_event() {
    let (mut store, db_path) = open_store("store_delete");
    let id = store
        .create(&event("Lunch", "2024-03-10", "12:00", "13:00"))
        .expect("create");

    store.delete(id).expect("delete");

    assert!(store.get(id).expect("get").is_none());
    assert!(matches!(store.delete(id).unwrap_err(), AppError::NotFound(_)));
    assert_eq!(log_count(&db_path, "del"), 1);
}

#[test]
fn test_blank_title_is_rejected_before_writing() {
    let (mut store, db_path) = open_store("store_validation");

    let err = store
        .create(&event("   ", "2024-03-10", "09:00", "10:00"))
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.list_all().expect("list").is_empty());
    assert_eq!(log_count(&db_path, "add"), 0);
}

#[test]
fn test_end_before_start_is_accepted() {
    let (mut store, _) = open_store("store_overnight");
    let id = store
        .create(&event("Night shift", "2024-03-10", "22:00", "02:00"))
        .expect("create");

    let ev = store.require(id).expect("event");
    assert_eq!(ev.fields.start_time, t("22:00"));
    assert_eq!(ev.fields.end_time, t("02:00"));
}

#[test]
fn test_failed_create_is_rolled_back() {
    let (mut store, db_path) = open_store("store_rollback_create");

    // make the audit insert fail after the event row was written
    let other = Connection::open(&db_path).expect("open db");
    other
        .execute_batch(
            "CREATE TRIGGER block_log BEFORE INSERT ON log
             BEGIN SELECT RAISE(ABORT, 'log is read-only'); END;",
        )
        .expect("create trigger");

    let err = store
        .create(&event("Doomed", "2024-03-10", "09:00", "10:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));

    other
        .execute_batch("DROP TRIGGER block_log;")
        .expect("drop trigger");

    assert!(store.list_all().expect("list").is_empty());

    // the connection is still usable
    let id = store
        .create(&event("Survivor", "2024-03-10", "09:00", "10:00"))
        .expect("create after failure");
    assert_eq!(store.require(id).expect("event").fields.title, "Survivor");
}

#[test]
fn test_failed_update_leaves_previous_values() {
    let (mut store, db_path) = open_store("store_rollback_update");
    let original = event("Stable", "2024-03-10", "09:00", "10:00");
    let id = store.create(&original).expect("create");

    let other = Connection::open(&db_path).expect("open db");
    other
        .execute_batch(
            "CREATE TRIGGER block_log BEFORE INSERT ON log
             BEGIN SELECT RAISE(ABORT, 'log is read-only'); END;",
        )
        .expect("create trigger");

    let err = store
        .update(id, &event("Half-written", "2025-01-01", "18:00", "19:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));

    assert_eq!(store.require(id).expect("event").fields, original);
}

#[test]
fn test_malformed_stored_time_reads_as_midnight() {
    let (mut store, db_path) = open_store("store_malformed_time");
    let id = store
        .create(&event("Legacy row", "2024-03-10", "09:00", "10:00"))
        .expect("create");

    let conn = Connection::open(&db_path).expect("open db");
    conn.execute(
        "UPDATE eventos SET start_time = 'soon', end_time = '10:15:00' WHERE id = ?1",
        [id],
    )
    .expect("corrupt row");

    let ev = store.require(id).expect("event");
    assert_eq!(ev.fields.start_time, t("00:00"));
    assert_eq!(ev.fields.end_time, t("10:15"));
}

#[test]
fn test_list_all_orders_unpadded_stored_times_by_value() {
    let (mut store, db_path) = open_store("store_unpadded_time");
    let ten = store
        .create(&event("Ten", "2024-03-10", "10:00", "11:00"))
        .expect("create");
    let nine = store
        .create(&event("Nine", "2024-03-10", "09:00", "09:30"))
        .expect("create");

    // written by another tool without zero padding
    let conn = Connection::open(&db_path).expect("open db");
    conn.execute("UPDATE eventos SET start_time = '9:00' WHERE id = ?1", [nine])
        .expect("rewrite row");

    let all = store.list_all().expect("list");
    let order: Vec<i64> = all.iter().map(|e| e.id).collect();
    assert_eq!(order, vec![nine, ten]);
    assert_eq!(all[0].fields.start_time, t("09:00"));
}

#[test]
fn test_reopen_keeps_data_and_migrations_run_once() {
    let (mut store, db_path) = open_store("store_reopen");
    store
        .create(&event("Persisted", "2024-03-10", "09:00", "10:00"))
        .expect("create");
    drop(store);

    let reopened = ragenda::core::store::EventStore::open(&db_path).expect("reopen");
    let all = reopened.list_all().expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].fields.date, d("2024-03-10"));

    let applied = ragenda::db::migrate::applied_versions(&reopened.pool().conn).expect("versions");
    assert_eq!(applied.len(), 2);
}

#[test]
fn test_in_memory_store() {
    let pool = ragenda::db::pool::DbPool::in_memory().expect("memory db");
    let mut store = ragenda::core::store::EventStore::from_pool(pool).expect("store");

    let id = store
        .create(&event("Scratch", "2024-03-10", "09:00", "10:00"))
        .expect("create");
    assert_eq!(store.list_all().expect("list")[0].id, id);
}
