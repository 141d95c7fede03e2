//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use es_client::testing::load_fixture;

#[allow(unused_imports)]
pub use es_client::{BasicCredentials, ClientError, EsClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use serde_json::{Value, json};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client for the mock server with a short timeout.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> EsClient {
    EsClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Credentials used across auth tests.
#[allow(dead_code)]
pub fn elastic_credentials() -> BasicCredentials {
    BasicCredentials::new(
        "elastic",
        secrecy::SecretString::new("changeme".to_string().into()),
    )
}
