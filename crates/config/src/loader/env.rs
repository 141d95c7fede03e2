//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ES_*` environment variables.
//! - Apply environment variable values to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("ES_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none("ES_PORT") {
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
            var: "ES_PORT".to_string(),
            message: "must be a number between 1 and 65535".to_string(),
        })?;
        loader.set_port(Some(port));
    }
    if let Some(https) = env_var_or_none("ES_HTTPS") {
        loader.set_https(Some(parse_bool("ES_HTTPS", &https)?));
    }
    if let Some(verify) = env_var_or_none("ES_VERIFY_SSL") {
        loader.set_verify_ssl(Some(parse_bool("ES_VERIFY_SSL", &verify)?));
    }
    if let Some(username) = env_var_or_none("ES_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("ES_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(timeout) = env_var_or_none("ES_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "ES_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(index) = env_var_or_none("ES_INDEX") {
        loader.set_index(Some(index));
    }
    Ok(())
}
