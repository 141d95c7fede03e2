//! Elasticsearch document client.
//!
//! This module provides [`EsClient`], a thin wrapper that turns the document
//! operations into single HTTP calls against a configured base URL.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Validating index names and ids (see [`crate::models::DocumentRef`])
//! - Retries. A 401/403 is surfaced like any other HTTP error.
//!
//! # Invariants
//! - All fields are immutable after construction, so one client can be shared
//!   across tasks.
//! - Every operation issues exactly one request.

pub mod builder;

use std::time::Duration;

use secrecy::SecretString;
use serde_json::Value;

use crate::auth::BasicCredentials;
use crate::endpoints;
use crate::error::Result;

/// Elasticsearch document client.
///
/// ```rust,no_run
/// use es_client::EsClient;
/// use serde_json::json;
///
/// # async fn example() -> es_client::Result<()> {
/// let client = EsClient::new("http://localhost:9200/", None, true)?;
/// let hits = client
///     .search("logs-2024", &json!({"query": {"match_all": {}}, "size": 2}))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Option<BasicCredentials>,
    pub(crate) timeout: Duration,
}

impl EsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EsClientBuilder {
        builder::EsClientBuilder::new()
    }

    /// Create a client with the default timeout.
    ///
    /// `credentials` is a `(username, password)` pair; with `None` no
    /// `Authorization` header is sent.
    pub fn new(
        base_url: &str,
        credentials: Option<(String, SecretString)>,
        verify_ssl: bool,
    ) -> Result<Self> {
        Self::builder()
            .base_url(base_url.to_string())
            .credentials(
                credentials.map(|(username, password)| BasicCredentials::new(username, password)),
            )
            .verify_ssl(verify_ssl)
            .build()
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Cluster metadata (`GET /`).
    pub async fn info(&self) -> Result<Value> {
        endpoints::get_cluster_info(&self.http, &self.base_url, self.credentials.as_ref()).await
    }

    /// Run a raw Query-DSL search against `index`.
    pub async fn search(&self, index: &str, query: &Value) -> Result<Value> {
        endpoints::search(
            &self.http,
            &self.base_url,
            self.credentials.as_ref(),
            index,
            query,
        )
        .await
    }

    /// Fetch one document by id.
    pub async fn get_document(&self, index: &str, id: &str) -> Result<Value> {
        endpoints::get_document(
            &self.http,
            &self.base_url,
            self.credentials.as_ref(),
            index,
            id,
        )
        .await
    }

    /// Index a document, with a caller-chosen id (PUT) or a server-assigned one (POST).
    pub async fn index_document(
        &self,
        index: &str,
        document: &Value,
        id: Option<&str>,
    ) -> Result<Value> {
        endpoints::index_document(
            &self.http,
            &self.base_url,
            self.credentials.as_ref(),
            index,
            document,
            id,
        )
        .await
    }

    /// Apply a partial update (`doc` or `script` payload) to a document.
    pub async fn update_document(&self, index: &str, id: &str, payload: &Value) -> Result<Value> {
        endpoints::update_document(
            &self.http,
            &self.base_url,
            self.credentials.as_ref(),
            index,
            id,
            payload,
        )
        .await
    }

    /// Delete a document by id.
    pub async fn delete_document(&self, index: &str, id: &str) -> Result<Value> {
        endpoints::delete_document(
            &self.http,
            &self.base_url,
            self.credentials.as_ref(),
            index,
            id,
        )
        .await
    }
}
