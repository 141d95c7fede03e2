//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from the settings snapshot, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Persisting configuration changes (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Layers are applied in call order; later layers overwrite earlier ones.
//!   Callers apply settings, then environment, then CLI overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ES_PORT, DEFAULT_HOST, DEFAULT_INDEX, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::persistence::PersistedSettings;
use crate::types::{AuthConfig, BasicAuth, Config, ConnectionConfig, Scheme};

/// Configuration loader that builds a `Config` from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    host: Option<String>,
    port: Option<u16>,
    https: Option<bool>,
    verify_ssl: Option<bool>,
    username: Option<String>,
    password: Option<SecretString>,
    timeout: Option<Duration>,
    index: Option<String>,
}

impl ConfigLoader {
    /// Create a new empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("1") | Some("true") | Some("TRUE")
        )
    }

    /// Load a `.env` file from the current directory, if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", this is a no-op.
    /// A missing `.env` file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply the persisted settings snapshot.
    ///
    /// The username is only taken when authentication was enabled; the
    /// password is never part of the snapshot.
    pub fn from_settings(mut self, settings: &PersistedSettings) -> Self {
        if !settings.host.trim().is_empty() {
            self.host = Some(settings.host.trim().to_string());
        }
        self.port = Some(settings.port);
        self.https = Some(settings.https_enabled);
        self.verify_ssl = Some(settings.verify_ssl);
        if settings.auth_enabled && !settings.username.is_empty() {
            self.username = Some(settings.username.clone());
        }
        if !settings.index.trim().is_empty() {
            self.index = Some(settings.index.trim().to_string());
        }
        self
    }

    /// Apply `ES_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = Some(https);
        self
    }

    pub fn with_verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_index(mut self, index: String) -> Self {
        self.index = Some(index);
        self
    }

    /// The default index resolved from all layers applied so far.
    pub fn index(&self) -> String {
        self.index
            .clone()
            .unwrap_or_else(|| DEFAULT_INDEX.to_string())
    }

    /// Build the final `Config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the host is blank or not a valid URL host,
    /// the port is 0, the timeout is outside 1..=3600 seconds, or a password
    /// is given without a username.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host = self
            .host
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .trim()
            .to_string();
        if host.is_empty() {
            return Err(ConfigError::MissingHost);
        }

        let port = self.port.unwrap_or(DEFAULT_ES_PORT);
        if port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        let scheme = Scheme::from_https(self.https.unwrap_or(false));
        validate_host(scheme, &host, port)?;

        let connection = ConnectionConfig {
            scheme,
            host,
            port,
            verify_ssl: self.verify_ssl.unwrap_or(true),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        Self::validate_timeout_config(&connection)?;

        let basic = match (self.username, self.password) {
            (Some(username), password) if !username.trim().is_empty() => Some(BasicAuth::new(
                username,
                password.unwrap_or_else(|| SecretString::new(String::new().into())),
            )),
            (_, Some(_)) => return Err(ConfigError::PasswordWithoutUsername),
            _ => None,
        };

        Ok(Config {
            connection,
            auth: AuthConfig { basic },
        })
    }

    fn validate_timeout_config(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_https(&mut self, https: Option<bool>) {
        self.https = https;
    }

    pub(crate) fn set_verify_ssl(&mut self, verify: Option<bool>) {
        self.verify_ssl = verify;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_index(&mut self, index: Option<String>) {
        self.index = index;
    }
}

/// Reject hosts that cannot form a valid base URL (spaces, schemes, paths).
fn validate_host(scheme: Scheme, host: &str, port: u16) -> Result<(), ConfigError> {
    if host.contains("://") || host.contains('/') {
        return Err(ConfigError::InvalidHost {
            host: host.to_string(),
            message: "give a bare host name or address; use --https for TLS".to_string(),
        });
    }

    let parsed = url::Url::parse(&format!("{scheme}://{host}:{port}")).map_err(|e| {
        ConfigError::InvalidHost {
            host: host.to_string(),
            message: e.to_string(),
        }
    })?;

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidHost {
            host: host.to_string(),
            message: "host is required".to_string(),
        });
    }

    Ok(())
}
