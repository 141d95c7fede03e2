//! Configuration management for es-viewer.
//!
//! This crate provides connection types, a layered configuration loader
//! (settings file, environment variables, command-line overrides), and the
//! settings store that remembers the last-used connection, index and query.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use persistence::{PersistedSettings, SettingsError, SettingsStore};
pub use types::{AuthConfig, BasicAuth, Config, ConnectionConfig, Scheme};
