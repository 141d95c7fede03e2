//! Elasticsearch document client.
//!
//! This crate provides a small async client for the Elasticsearch document
//! API (cluster info, Query-DSL search, get/index/update/delete by id) and the
//! normalizer that turns any JSON response into an ordered tree for display.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod tree;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::BasicCredentials;
pub use client::EsClient;
pub use client::builder::EsClientBuilder;
pub use error::{ClientError, ErrorBody, Result};
pub use models::{
    DocumentRef, acknowledgement, default_query, default_update_payload, parse_json_body,
};
pub use tree::{FlatRow, JsonTree, RowKind, TreeRow, flatten, normalize, reconstruct, render};
