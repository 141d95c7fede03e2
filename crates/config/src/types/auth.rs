//! Authentication types for es-viewer configuration.
//!
//! Responsibilities:
//! - Define HTTP Basic credentials.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//! - Persisting credentials (the password is never written to disk).
//!
//! Invariants:
//! - Passwords are held in `secrecy::SecretString` and never appear in `Debug` output.

use secrecy::SecretString;

/// Username/password pair for HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: SecretString,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Authentication configuration.
///
/// `None` means requests are sent without an `Authorization` header.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub basic: Option<BasicAuth>,
}

impl AuthConfig {
    /// Whether basic authentication is enabled.
    pub fn is_enabled(&self) -> bool {
        self.basic.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_basic_auth_debug_redacts_password() {
        let auth = BasicAuth::new("elastic", SecretString::new("hunter2".to_string().into()));
        let debug_output = format!("{:?}", auth);

        assert!(debug_output.contains("elastic"));
        assert!(!debug_output.contains("hunter2"));
        assert_eq!(auth.password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_auth_config_default_is_disabled() {
        assert!(!AuthConfig::default().is_enabled());
    }
}
