//! Query-DSL search endpoint.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::BasicCredentials;
use crate::endpoints::send_json_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;

/// Run a raw Query-DSL search (`POST /{index}/_search`).
///
/// The query body is forwarded as-is and the response (hits, aggregations,
/// shard statistics) is returned unmodified.
pub async fn search(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
    index: &str,
    query: &Value,
) -> Result<Value> {
    let path = format!("/{}/_search", encode_path_segment(index));
    send_json_request(client, base_url, Method::POST, &path, credentials, Some(query)).await
}
