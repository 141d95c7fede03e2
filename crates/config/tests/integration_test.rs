//! End-to-end tests for settings-driven configuration.
//!
//! Covers the startup path of the viewer: read the settings snapshot,
//! layer overrides on top, build a `Config`, and save a new snapshot.

use es_config::{ConfigLoader, PersistedSettings, Scheme, SettingsStore};
use std::time::Duration;

#[test]
fn test_saved_settings_drive_next_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::with_path(temp_dir.path().join("settings.json"));

    let first = PersistedSettings {
        host: "es-prod.internal".to_string(),
        port: 9243,
        index: "logs-2024".to_string(),
        https_enabled: true,
        verify_ssl: true,
        auth_enabled: true,
        username: "elastic".to_string(),
        last_query: Some(r#"{"query":{"match_all":{}},"size":2}"#.to_string()),
    };
    store.save(&first).unwrap();

    let loaded = store.load();
    let loader = ConfigLoader::new().from_settings(&loaded);
    assert_eq!(loader.index(), "logs-2024");

    let config = loader
        .with_password("changeme".to_string())
        .with_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(config.connection.scheme, Scheme::Https);
    assert_eq!(config.base_url(), "https://es-prod.internal:9243");
    assert_eq!(config.connection.timeout, Duration::from_secs(5));
    assert!(config.auth.is_enabled());
}

#[test]
fn test_saved_file_never_contains_password() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("settings.json");
    let store = SettingsStore::with_path(&path);

    let settings = PersistedSettings {
        auth_enabled: true,
        username: "elastic".to_string(),
        ..PersistedSettings::default()
    };
    store.save(&settings).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("password"));
    assert!(raw.contains("\"username\": \"elastic\""));
}
