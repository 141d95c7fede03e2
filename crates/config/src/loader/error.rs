//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, values).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Host is required. Set ES_HOST, pass --host, or save one in the settings file.")]
    MissingHost,

    #[error("Invalid host {host:?}: {message}")]
    InvalidHost { host: String, message: String },

    #[error("Port must be between 1 and 65535")]
    InvalidPort,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("A password was provided without a username")]
    PasswordWithoutUsername,

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is reported, never the line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
