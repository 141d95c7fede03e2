//! Settings snapshot types and serialization.
//!
//! Responsibilities:
//! - Define the persisted settings snapshot (`PersistedSettings`).
//! - Define settings file errors (`SettingsError`).
//! - Read and parse settings files, including the legacy dotfile layout.
//!
//! Does NOT handle:
//! - Choosing which file to read or write (see `store.rs`).
//!
//! Invariants:
//! - Unknown keys are ignored, so legacy files carrying a `password` key load
//!   without the password ever reaching memory as configuration.
//! - `port` accepts either a number or a numeric string (the legacy form);
//!   a blank string means the default port.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_ES_PORT, DEFAULT_HOST, DEFAULT_INDEX};

/// Flat snapshot of the viewer's last-used inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub host: String,
    #[serde(deserialize_with = "port_from_number_or_string")]
    pub port: u16,
    pub index: String,
    pub https_enabled: bool,
    pub verify_ssl: bool,
    pub auth_enabled: bool,
    pub username: String,
    /// Last Query-DSL body sent with `search`, stored as text.
    #[serde(alias = "query")]
    pub last_query: Option<String>,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_ES_PORT,
            index: DEFAULT_INDEX.to_string(),
            https_enabled: false,
            verify_ssl: true,
            auth_enabled: false,
            username: String::new(),
            last_query: None,
        }
    }
}

fn port_from_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        // The legacy form keeps the raw text of an input box, which may be empty
        Port::Text(text) if text.trim().is_empty() => Ok(DEFAULT_ES_PORT),
        Port::Text(text) => text
            .trim()
            .parse::<u16>()
            .map_err(|_| serde::de::Error::custom(format!("invalid port: {text:?}"))),
    }
}

/// Errors that can occur when reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write settings file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to determine the settings directory")]
    ConfigDirUnavailable,
}

/// Reads and parses a settings file from disk.
pub(crate) fn read_settings_file(path: &Path) -> Result<PersistedSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
