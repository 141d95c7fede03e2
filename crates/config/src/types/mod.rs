//! Configuration type definitions for es-viewer.
//!
//! Responsibilities:
//! - Define connection settings (scheme, host, port, TLS verification, timeout).
//! - Define basic-auth credentials.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Settings persistence (see `persistence` module).
//! - Actual network connections or authentication (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, BasicAuth};
pub use connection::{Config, ConnectionConfig, Scheme};
