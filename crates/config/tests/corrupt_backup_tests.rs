//! Regression tests for corrupt settings backup behavior.
//!
//! A corrupt settings file must never stop the viewer: loading returns
//! defaults, the bad file is preserved as a backup, and the next save
//! writes a fresh file.

use es_config::{PersistedSettings, SettingsStore};
use std::io::Write;

#[test]
fn test_corrupt_settings_backup_then_save_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings_path = temp_dir.path().join("settings.json");

    let mut file = std::fs::File::create(&settings_path).unwrap();
    file.write_all(b"{ invalid json }").unwrap();
    drop(file);

    let store = SettingsStore::with_path(&settings_path);
    assert_eq!(store.load(), PersistedSettings::default());

    let backups: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.to_string_lossy().contains(".corrupt."))
        .collect();
    assert_eq!(backups.len(), 1, "corrupt file should be backed up once");
    assert_eq!(
        std::fs::read_to_string(&backups[0]).unwrap(),
        "{ invalid json }"
    );

    let updated = PersistedSettings {
        host: "recovered".to_string(),
        ..PersistedSettings::default()
    };
    store.save(&updated).unwrap();
    assert_eq!(store.load().host, "recovered");
}

#[test]
fn test_try_load_surfaces_parse_error_without_backup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings_path = temp_dir.path().join("settings.json");
    std::fs::write(&settings_path, "[1, 2").unwrap();

    let store = SettingsStore::with_path(&settings_path);
    let err = store.try_load().unwrap_err();

    assert!(matches!(err, es_config::SettingsError::Parse { .. }));
    assert!(settings_path.exists(), "try_load must not move the file");
}
