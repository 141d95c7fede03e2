//! Input helpers shared by the client and its callers.
//!
//! Responsibilities:
//! - Validate the index / document id pair before a request is built.
//! - Parse caller-supplied JSON bodies (queries, documents, update payloads).
//! - Build the acknowledgement object for bodiless successes.
//!
//! Does NOT handle:
//! - Validating the shape of query or update payloads. They are forwarded as-is.

use serde_json::{Value, json};

use crate::error::{ClientError, Result};

/// Target of a document operation.
///
/// An absent id means "create with a server-assigned id" when indexing, and
/// is rejected by [`DocumentRef::require_id`] for get, update and delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    index: String,
    id: Option<String>,
}

impl DocumentRef {
    /// Build a reference from raw input, trimming both parts.
    ///
    /// A blank id is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the index is empty after trimming.
    pub fn new(index: &str, id: Option<&str>) -> Result<Self> {
        let index = index.trim();
        if index.is_empty() {
            return Err(ClientError::InvalidInput("index name is required".to_string()));
        }

        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Self {
            index: index.to_string(),
            id,
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The document id, for operations that address an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if no id was given.
    pub fn require_id(&self) -> Result<&str> {
        self.id
            .as_deref()
            .ok_or_else(|| ClientError::InvalidInput("document id is required".to_string()))
    }
}

/// Parse a caller-supplied JSON body.
///
/// `context` names the body in the error message, e.g. `"query"` or `"document"`.
pub fn parse_json_body(context: &str, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| ClientError::MalformedJson {
        context: context.to_string(),
        source,
    })
}

/// Acknowledgement returned in place of a 204 or empty response body.
pub fn acknowledgement(method: &str, status: u16) -> Value {
    json!({
        "acknowledged": true,
        "status": status,
        "operation": method,
    })
}

/// Query used when nothing else was supplied: the first ten documents.
pub fn default_query() -> Value {
    json!({"query": {"match_all": {}}, "size": 10})
}

/// Placeholder partial-update payload offered as a starting point for edits.
pub fn default_update_payload() -> Value {
    json!({"doc": {"field_name": "new_value"}})
}
