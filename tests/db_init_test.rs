use tempfile::TempDir;
use thrive::db;

#[test]
fn open_creates_new_db_at_nonexistent_path() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("subdir").join("thrive.db");

    assert!(!db_path.exists());

    let conn = db::open_database(&db_path).unwrap();

    assert!(db_path.exists());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM local_storage", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn health_check_passes_on_valid_db() {
    let conn = db::open_memory_database().unwrap();

    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.schema_version, db::schema::CURRENT_SCHEMA_VERSION);
    assert_eq!(report.key_count, 0);
}

#[test]
fn busy_timeout_is_set() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("test.db");

    let conn = db::open_database(&db_path).unwrap();

    let timeout: i64 = conn
        .pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);
}

#[test]
fn reopening_keeps_schema_version() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("thrive.db");

    drop(db::open_database(&db_path).unwrap());
    let conn = db::open_database(&db_path).unwrap();

    assert_eq!(
        db::schema::get_schema_version(&conn).unwrap(),
        db::schema::CURRENT_SCHEMA_VERSION
    );
}
