//! Elasticsearch REST endpoint implementations.
//!
//! Each endpoint is a free function taking the shared `reqwest::Client`, the
//! normalized base URL and optional credentials, so it can be exercised
//! directly against a mock server without building an [`crate::EsClient`].

mod cluster;
mod documents;
mod request;
mod search;
pub mod url_encoding;

pub use cluster::get_cluster_info;
pub use documents::{delete_document, get_document, index_document, update_document};
pub use request::send_json_request;
pub use search::search;
