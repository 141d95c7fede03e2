//! Client builder for constructing [`EsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL (present, absolute, http or https)
//! - Normalizing the base URL (removing one trailing slash)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`EsClient`] methods and [`crate::endpoints`])
//! - Loading connection settings (handled by `es_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - `verify_ssl = false` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use es_config::{Config, constants::DEFAULT_TIMEOUT_SECS};

use crate::auth::BasicCredentials;
use crate::client::EsClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`EsClient`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use es_client::EsClient;
///
/// let client = EsClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .verify_ssl(false)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok::<(), es_client::ClientError>(())
/// ```
#[derive(Debug)]
pub struct EsClientBuilder {
    base_url: Option<String>,
    credentials: Option<BasicCredentials>,
    verify_ssl: bool,
    timeout: Duration,
}

impl Default for EsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            verify_ssl: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cluster, e.g. `http://localhost:9200`.
    ///
    /// A single trailing slash is removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the Basic credentials sent with every request.
    pub fn credentials(mut self, credentials: Option<BasicCredentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set whether to verify the server's TLS certificate.
    ///
    /// # Security Warning
    /// Only disable verification for clusters with self-signed certificates
    /// on trusted networks.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 10 seconds. Exceeding it is reported as a connection failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    ///
    /// ```rust,no_run
    /// use es_client::EsClient;
    /// use es_config::Config;
    ///
    /// let config = Config::default();
    /// let client = EsClient::builder().from_config(&config).build()?;
    /// # Ok::<(), es_client::ClientError>(())
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.base_url());
        self.credentials = config.auth.basic.as_ref().map(BasicCredentials::from);
        self.verify_ssl = config.connection.verify_ssl;
        self.timeout = config.connection.timeout;
        self
    }

    /// Strip one trailing slash so endpoint paths can be appended directly.
    ///
    /// - `"http://localhost:9200/"` -> `"http://localhost:9200"`
    /// - `"http://localhost:9200"` -> `"http://localhost:9200"`
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim();
        url.strip_suffix('/').unwrap_or(url).to_string()
    }

    /// Build the [`EsClient`] with the configured options.
    ///
    /// No connection is opened here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing, empty, or
    /// not an absolute `http://` / `https://` URL.
    /// Returns [`ClientError::Build`] if the HTTP client fails to build.
    pub fn build(self) -> Result<EsClient> {
        let base_url = self
            .base_url
            .as_deref()
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let is_https = match parsed.scheme() {
            "https" => true,
            "http" => false,
            other => {
                return Err(ClientError::InvalidUrl(format!(
                    "{}: unsupported scheme '{}', expected http or https",
                    base_url, other
                )));
            }
        };

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("es-viewer/", env!("CARGO_PKG_VERSION")));

        if !self.verify_ssl {
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "verify_ssl=false has no effect on HTTP URLs. Certificate verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build().map_err(ClientError::Build)?;

        Ok(EsClient {
            http,
            base_url,
            credentials: self.credentials,
            timeout: self.timeout,
        })
    }
}
