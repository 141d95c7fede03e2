//! Error types for the Elasticsearch client.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Body of a non-2xx response.
///
/// The cluster normally answers errors with a structured `{"error": {...}}`
/// document; proxies and misconfigured endpoints may answer with plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body was not valid JSON (possibly empty).
    Text(String),
}

impl ErrorBody {
    /// Decode a raw response body, preferring JSON.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ErrorBody::Json(value) => Some(value),
            ErrorBody::Text(_) => None,
        }
    }

    /// Suffix appended to the `Http` error message.
    fn detail_suffix(&self) -> String {
        match self {
            ErrorBody::Json(value) => format!("\nDetails: {value}"),
            ErrorBody::Text(text) if text.trim().is_empty() => String::new(),
            ErrorBody::Text(text) => format!("\nResponse body: {text}"),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{value}"),
            ErrorBody::Text(text) => f.write_str(text),
        }
    }
}

/// Errors that can occur during client operations.
///
/// Transport failures are split into `TlsVerification` and `Connection` so
/// callers can offer different guidance; everything the cluster answers with a
/// non-2xx status is `Http`.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The cluster answered with a non-2xx status.
    #[error("HTTP error: {status} {reason}{}", .body.detail_suffix())]
    Http {
        status: u16,
        reason: String,
        body: ErrorBody,
    },

    /// The TLS handshake failed, typically because the certificate could not be verified.
    #[error("SSL error: could not verify the server certificate.\nDetails: {detail}")]
    TlsVerification { detail: String },

    /// The request never completed: timeout, DNS failure, refused or reset connection.
    #[error("Connection failed: {detail}")]
    Connection { detail: String },

    /// A required input (index, document id) was missing or blank.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A request body could not be parsed before sending, or a non-empty
    /// response body was not valid JSON.
    #[error("Invalid JSON in {context}: {source}")]
    MalformedJson {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL is missing or not an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status code, if the cluster answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_tls_error(&self) -> bool {
        matches!(self, Self::TlsVerification { .. })
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error indicates rejected or insufficient credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Whether the error was detected before any request was sent.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidUrl(_) | Self::MalformedJson { .. }
        )
    }

    /// Short advisory message for presenting the error to an operator.
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::TlsVerification { .. } => Some(
                "The certificate could not be verified. If the cluster uses a self-signed certificate, retry with certificate verification disabled (--insecure).",
            ),
            Self::Connection { .. } => {
                Some("Check the host, port and scheme (http/https), and that the cluster is reachable.")
            }
            Self::Http { status: 401, .. } => {
                Some("The cluster rejected the credentials. Check the username and password.")
            }
            Self::Http { status: 403, .. } => {
                Some("The user is not allowed to perform this operation on the index.")
            }
            Self::Http { status: 404, .. } => Some("Check the index name and document id."),
            Self::MalformedJson { .. } => Some("Fix the JSON and try again."),
            Self::InvalidInput(_) => Some("Provide the missing value and try again."),
            _ => None,
        }
    }
}
