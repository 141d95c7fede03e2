//! Configuration loader for settings files and environment variables.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the settings snapshot.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Precedence: builder overrides > environment variables > settings snapshot > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use error::ConfigError;
