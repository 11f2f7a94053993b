use std::fs;

use gridstate_lib::settings::{SettingsBackend, SettingsProvider};
use gridstate_tui::paths::rotate_logs_in;
use gridstate_tui::settings::SqliteBackend;

#[test]
fn test_sqlite_backend_round_trip() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    assert_eq!(backend.get("deals-table-state").unwrap(), None);

    backend.set("deals-table-state", "{}".to_string()).unwrap();
    backend.set("deals-table-state", r#"{"columnWidths":{}}"#.to_string()).unwrap();
    assert_eq!(
        backend.get("deals-table-state").unwrap().as_deref(),
        Some(r#"{"columnWidths":{}}"#)
    );

    backend.set("other", "1".to_string()).unwrap();
    let mut keys = backend.keys_with_prefix("deals").unwrap();
    keys.sort();
    assert_eq!(keys, ["deals-table-state"]);

    backend.delete("deals-table-state").unwrap();
    assert_eq!(backend.get("deals-table-state").unwrap(), None);
}

#[test]
fn test_sqlite_backend_persists_across_opens() {
    let dir = std::env::temp_dir().join(format!("gridstate-settings-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.db");

    {
        let provider = SettingsProvider::new(SqliteBackend::open(&path).unwrap());
        provider.set("widths", &vec![150u32, 80]).unwrap();
    }
    let provider = SettingsProvider::new(SqliteBackend::open(&path).unwrap());
    assert_eq!(provider.get::<Vec<u32>>("widths").unwrap(), Some(vec![150, 80]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_rotate_logs_keeps_recent_archives() {
    let dir = std::env::temp_dir().join(format!("gridstate-logs-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    for i in 0..30 {
        fs::write(dir.join(format!("20240101_0000{i:02}.log")), "").unwrap();
    }
    fs::write(dir.join("latest.log"), "last run").unwrap();

    rotate_logs_in(&dir, "20250101_000000".to_string());

    assert!(!dir.join("latest.log").exists());
    assert!(dir.join("20250101_000000.log").exists());
    let count = fs::read_dir(&dir).unwrap().count();
    assert_eq!(count, 25);
    assert!(!dir.join("20240101_000000.log").exists());

    let _ = fs::remove_dir_all(&dir);
}
