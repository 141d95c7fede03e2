//! HTTP Basic credentials.

use es_config::BasicAuth;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username and password sent with every request as HTTP Basic auth.
///
/// The password is held in a `SecretString` and is redacted from `Debug` output.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    username: String,
    password: SecretString,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach an `Authorization: Basic ...` header to the request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

impl From<&BasicAuth> for BasicCredentials {
    fn from(auth: &BasicAuth) -> Self {
        Self::new(auth.username.clone(), auth.password.clone())
    }
}

/// Attach credentials when present; no header is sent otherwise.
pub(crate) fn with_credentials(
    builder: RequestBuilder,
    credentials: Option<&BasicCredentials>,
) -> RequestBuilder {
    match credentials {
        Some(credentials) => credentials.apply(builder),
        None => builder,
    }
}
