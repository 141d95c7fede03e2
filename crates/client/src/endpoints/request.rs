//! Request execution and the uniform response contract.
//!
//! Responsibilities:
//! - Attach JSON content negotiation headers and Basic credentials.
//! - Turn 204 / empty-body successes into an acknowledgement object.
//! - Map non-2xx responses to [`ClientError::Http`] with the decoded body.
//! - Split transport failures into TLS verification and connection errors.
//!
//! Does NOT handle:
//! - Retries of any kind. Every call is exactly one HTTP round trip.
//! - Timeouts. The per-request bound is configured on the `reqwest::Client`.
//!
//! Invariants:
//! - A request that reaches the server yields either a JSON value or `Http`.
//! - `TlsVerification` is only produced for failures inside the TLS layer.

use std::error::Error as StdError;
use std::io;
use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::auth::{BasicCredentials, with_credentials};
use crate::error::{ClientError, ErrorBody, Result};
use crate::models::acknowledgement;

/// Fragments that identify a certificate or handshake failure.
///
/// Bare "tls" is not a marker: rustls also names itself in plain I/O errors
/// such as a peer closing the stream without `close_notify`.
const TLS_MARKERS: &[&str] = &[
    "certificate",
    "handshake",
    "unknownissuer",
    "corrupt message",
];

/// Send one JSON request and decode the response.
///
/// `path` must start with `/` and already have its segments percent-encoded.
pub async fn send_json_request(
    client: &Client,
    base_url: &str,
    method: Method,
    path: &str,
    credentials: Option<&BasicCredentials>,
    body: Option<&Value>,
) -> Result<Value> {
    let url = format!("{}{}", base_url, path);

    let mut builder = client
        .request(method.clone(), &url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    builder = with_credentials(builder, credentials);
    if let Some(body) = body {
        builder = builder.json(body);
    }

    let started = Instant::now();
    let response = builder.send().await.map_err(classify_transport_error)?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(classify_transport_error)?;

    debug!(
        method = %method,
        path,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    decode_response(&method, path, status, &bytes)
}

/// Apply the response contract to a fully read response.
fn decode_response(method: &Method, path: &str, status: StatusCode, bytes: &[u8]) -> Result<Value> {
    if !status.is_success() {
        return Err(ClientError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: ErrorBody::from_bytes(bytes),
        });
    }

    if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(acknowledgement(method.as_str(), status.as_u16()));
    }

    serde_json::from_slice(bytes).map_err(|source| ClientError::MalformedJson {
        context: format!("response from {} {}", method, path),
        source,
    })
}

/// Map a `reqwest` transport error onto the client taxonomy.
pub(crate) fn classify_transport_error(err: reqwest::Error) -> ClientError {
    let detail = error_chain(&err);

    if err.is_timeout() {
        return ClientError::Connection {
            detail: format!("request timed out: {}", detail),
        };
    }

    if is_tls_failure(&err) {
        ClientError::TlsVerification { detail }
    } else {
        ClientError::Connection { detail }
    }
}

fn sources<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e: &&'a (dyn StdError + 'static)| (*e).source())
}

/// Render an error and all of its causes as `outer: inner: root`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in sources(err) {
        let text = cause.to_string();
        // hyper and reqwest repeat the inner message in the outer one
        if parts.last().is_some_and(|last| last.contains(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(": ")
}

fn is_tls_failure(err: &reqwest::Error) -> bool {
    // The outermost message embeds the request URL, which may contain anything
    sources(err).skip(1).any(|cause| {
        if cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::InvalidData)
        {
            return true;
        }
        let text = cause.to_string().to_ascii_lowercase();
        TLS_MARKERS.iter().any(|marker| text.contains(marker))
    })
}
