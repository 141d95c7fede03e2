//! Cluster metadata endpoint.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::BasicCredentials;
use crate::endpoints::send_json_request;
use crate::error::Result;

/// Probe the cluster root (`GET /`): name, uuid, version and tagline.
pub async fn get_cluster_info(
    client: &Client,
    base_url: &str,
    credentials: Option<&BasicCredentials>,
) -> Result<Value> {
    send_json_request(client, base_url, Method::GET, "/", credentials, None).await
}
