//! Centralized constants for the es-viewer workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default host when nothing else is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Elasticsearch HTTP port.
pub const DEFAULT_ES_PORT: u16 = 9200;

/// Default HTTP request timeout in seconds.
///
/// Every client operation is bounded by this value; exceeding it is reported
/// as a connection failure.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Document Defaults
// =============================================================================

/// Index used when neither the settings file nor the command line names one.
pub const DEFAULT_INDEX: &str = "my-index";

// =============================================================================
// Settings Store
// =============================================================================

/// Application directory name used for the settings file location.
pub const APP_DIR_NAME: &str = "es-viewer";

/// File name of the persisted settings snapshot.
pub const SETTINGS_FILE_NAME: &str = "settings.json";
