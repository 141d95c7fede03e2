//! Path helpers for settings file locations.
//!
//! Responsibilities:
//! - Determine the standard and legacy settings file paths.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use super::state::SettingsError;
use crate::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};

/// Legacy dotfile name in the user's home directory.
const LEGACY_FILE_NAME: &str = ".es_viewer_config.json";

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/es-viewer/settings.json`
/// - macOS: `~/Library/Application Support/es-viewer/settings.json`
/// - Windows: `%AppData%\es-viewer\config\settings.json`
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .ok_or(SettingsError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// Returns the dotfile path used by the desktop viewer (`~/.es_viewer_config.json`).
///
/// Only read as a fallback when the standard file does not exist yet.
pub fn legacy_settings_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(LEGACY_FILE_NAME))
}
