//! File-backed settings store.
//!
//! Responsibilities:
//! - Load the settings snapshot, falling back to the legacy dotfile and then defaults.
//! - Save the snapshot atomically.
//! - Reset (delete) the stored snapshot.
//!
//! Does NOT handle:
//! - Deciding when to save (the CLI saves after each successful operation).
//!
//! Invariants:
//! - `load()` never returns an error; failures are logged with `tracing::warn!`.
//! - A corrupt settings file is backed up before defaults are returned, so the
//!   next `save()` does not destroy its contents.
//! - The legacy dotfile is read-only: an unreadable one is ignored, never moved.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::path::{default_settings_path, legacy_settings_path};
use super::state::{PersistedSettings, SettingsError, read_settings_file};
use super::create_corrupt_backup;

/// Reads and writes `PersistedSettings` at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    legacy_path: Option<PathBuf>,
}

impl SettingsStore {
    /// Store at the platform default location, with the legacy dotfile as fallback.
    pub fn new() -> Result<Self, SettingsError> {
        Ok(Self {
            path: default_settings_path()?,
            legacy_path: legacy_settings_path(),
        })
    }

    /// Store at an explicit path. No legacy fallback is consulted.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            legacy_path: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings snapshot, returning defaults on any failure.
    pub fn load(&self) -> PersistedSettings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!(path = %self.path.display(), "No settings file found, using defaults");
                PersistedSettings::default()
            }
            Err(SettingsError::Parse { path, source }) => {
                warn!(path = %path.display(), error = %source, "Settings file is corrupt, using defaults");
                match create_corrupt_backup(&path) {
                    Ok(backup) => {
                        warn!(backup = %backup.display(), "Backed up corrupt settings file")
                    }
                    Err(e) => warn!(error = %e, "Failed to back up corrupt settings file"),
                }
                PersistedSettings::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                PersistedSettings::default()
            }
        }
    }

    /// Load the settings snapshot, surfacing errors for the settings file.
    ///
    /// Returns `Ok(None)` when neither the settings file nor a readable
    /// legacy dotfile exists. Never modifies any file.
    pub fn try_load(&self) -> Result<Option<PersistedSettings>, SettingsError> {
        if self.path.exists() {
            return read_settings_file(&self.path).map(Some);
        }

        match &self.legacy_path {
            Some(legacy) if legacy.exists() => {
                debug!(path = %legacy.display(), "Reading legacy settings file");
                // The legacy file belongs to the desktop viewer: never surface
                // its errors, so it is never backed up or renamed
                match read_settings_file(legacy) {
                    Ok(settings) => Ok(Some(settings)),
                    Err(e) => {
                        warn!(error = %e, "Ignoring unreadable legacy settings file");
                        Ok(None)
                    }
                }
            }
            _ => Ok(None),
        }
    }

    /// Write the snapshot atomically.
    pub fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(settings)?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(|e| SettingsError::Write {
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| SettingsError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }

    /// Delete the stored snapshot. Returns whether a file was removed.
    pub fn reset(&self) -> Result<bool, SettingsError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SettingsError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
