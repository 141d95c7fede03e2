//! Single-document endpoints.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::BasicCredentials;
use crate::endpoints::send_json_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;

fn doc_path(index: &str, id: &str) -> String {
    format!(
        "/{}/_doc/{}",
        encode_path_segment(index),
        encode_path_segment(id)
    )
}

/// Fetch one document (`GET /{index}/_doc/{id}`).
pub async fn get_document(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
    index: &str,
    id: &str,
) -> Result<Value> {
    let path = doc_path(index, id);
    send_json_request(client, base_url, Method::GET, &path, credentials, None).await
}

/// Index a document.
///
/// With an id this is `PUT /{index}/_doc/{id}` (create or overwrite).
/// Without one it is `POST /{index}/_doc` and the server assigns the id, so
/// repeating the call creates a second document.
pub async fn index_document(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
    index: &str,
    document: &Value,
    id: Option<&str>,
) -> Result<Value> {
    let (method, path) = match id {
        Some(id) => (Method::PUT, doc_path(index, id)),
        None => (Method::POST, format!("/{}/_doc", encode_path_segment(index))),
    };
    send_json_request(client, base_url, method, &path, credentials, Some(document)).await
}

/// Partially update a document (`POST /{index}/_update/{id}`).
///
/// The payload is forwarded without validation; the cluster expects a `doc`
/// or `script` key.
pub async fn update_document(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
    index: &str,
    id: &str,
    payload: &Value,
) -> Result<Value> {
    let path = format!(
        "/{}/_update/{}",
        encode_path_segment(index),
        encode_path_segment(id)
    );
    send_json_request(client, base_url, Method::POST, &path, credentials, Some(payload)).await
}

/// Delete a document (`DELETE /{index}/_doc/{id}`).
pub async fn delete_document(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
    index: &str,
    id: &str,
) -> Result<Value> {
    let path = doc_path(index, id);
    send_json_request(client, base_url, Method::DELETE, &path, credentials, None).await
}
