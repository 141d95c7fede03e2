//! Connection configuration types for es-viewer.
//!
//! Responsibilities:
//! - Define connection settings (scheme, host, port, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Derive the cluster base URL from the connection settings.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Settings persistence (see `persistence` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `Config::default()` targets `http://localhost:9200` without authentication.
//! - A `ConnectionConfig` is immutable once handed to a client.

use crate::constants::{DEFAULT_ES_PORT, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// URL scheme used to reach the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn from_https(https: bool) -> Self {
        if https { Scheme::Https } else { Scheme::Http }
    }

    pub fn is_https(self) -> bool {
        self == Scheme::Https
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection configuration for an Elasticsearch cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// Whether TLS certificates are verified (only meaningful for https)
    pub verify_ssl: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Http,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_ES_PORT,
            verify_ssl: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConnectionConfig {
    /// Base URL of the cluster, e.g. `https://localhost:9200`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the given endpoint with no authentication.
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16) -> Self {
        Self {
            connection: ConnectionConfig {
                scheme,
                host: host.into(),
                port,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::default(),
        }
    }

    /// Base URL derived from the connection settings.
    pub fn base_url(&self) -> String {
        self.connection.base_url()
    }
}
