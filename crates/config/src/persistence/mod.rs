//! Settings persistence for the viewer's last-used inputs.
//!
//! Responsibilities:
//! - Locate the settings file (standard path, legacy dotfile path).
//! - Read and write the flat settings snapshot (`PersistedSettings`) to disk.
//! - Back up corrupt settings files before they are overwritten.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Merging settings into a connection `Config` (see `loader`).
//! - Persisting passwords (they are never written).
//!
//! Invariants:
//! - Loading never fails the caller: missing or unreadable files yield defaults.
//! - Writes are atomic (temp file + rename).
//! - Corrupt files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod path;
mod state;
mod store;

pub use path::{default_settings_path, legacy_settings_path};
pub use state::{PersistedSettings, SettingsError};
pub use store::SettingsStore;

/// Creates a backup of a corrupt settings file before it is overwritten.
///
/// The original file is renamed to `<name>.corrupt.<timestamp>` so its
/// contents stay recoverable without blocking startup.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
