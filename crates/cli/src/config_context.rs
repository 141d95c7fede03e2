//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Resolve the connection configuration from settings file, environment and flags.
//! - Distinguish between real and placeholder contexts.
//! - Save the settings snapshot after a successful operation.
//!
//! Does NOT handle:
//! - Reading or writing the settings file format (see `es_config::persistence`).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Precedence is flags > environment > settings file > defaults.
//! - Placeholder contexts cannot be used for cluster connections.
//! - Settings file failures are logged and never fail a command.
//! - The password is never written to the settings file.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use es_config::{Config, ConfigLoader, PersistedSettings, SettingsStore};
use serde_json::Value;
use tracing::{debug, warn};

use crate::args::Cli;

/// Everything a cluster command needs: the connection, the default index,
/// and the settings snapshot to update once the command succeeds.
#[derive(Debug)]
pub(crate) struct CommandContext {
    pub config: Config,
    pub index: String,
    settings: PersistedSettings,
    store: Option<SettingsStore>,
    save: bool,
}

impl CommandContext {
    /// Resolve the context from the settings file, `ES_*` variables and flags.
    pub(crate) fn load(cli: &Cli) -> Result<Self> {
        let store = open_store(cli.settings_path.as_deref());
        let settings = store.as_ref().map(SettingsStore::load).unwrap_or_default();

        let loader = ConfigLoader::new()
            .from_settings(&settings)
            .from_env()
            .context("Failed to load configuration from environment")?;

        Self::resolve(cli, loader, settings, store)
    }

    /// Apply the flag overrides on top of `loader` and build the connection.
    fn resolve(
        cli: &Cli,
        loader: ConfigLoader,
        settings: PersistedSettings,
        store: Option<SettingsStore>,
    ) -> Result<Self> {
        let loader = apply_overrides(loader, cli);

        // build() consumes the loader
        let index = loader.index();
        let config = loader.build().context("Failed to build configuration")?;

        Ok(Self {
            config,
            index,
            settings,
            store,
            save: !cli.no_save,
        })
    }

    /// The query remembered from the last successful search, if any.
    pub(crate) fn last_query(&self) -> Option<&str> {
        self.settings
            .last_query
            .as_deref()
            .filter(|query| !query.trim().is_empty())
    }

    /// The snapshot that would be saved after a successful operation on `index`.
    pub(crate) fn snapshot(&self, index: &str, last_query: Option<&Value>) -> PersistedSettings {
        let connection = &self.config.connection;
        let mut snapshot = self.settings.clone();

        snapshot.host = connection.host.clone();
        snapshot.port = connection.port;
        snapshot.https_enabled = connection.scheme.is_https();
        snapshot.verify_ssl = connection.verify_ssl;
        snapshot.index = index.to_string();
        snapshot.auth_enabled = self.config.auth.is_enabled();
        if let Some(basic) = &self.config.auth.basic {
            snapshot.username = basic.username.clone();
        }
        if let Some(query) = last_query {
            snapshot.last_query = Some(query.to_string());
        }
        snapshot
    }

    /// Save the snapshot for a successful operation on `index`.
    pub(crate) fn remember(&self, index: &str, last_query: Option<&Value>) {
        if !self.save {
            debug!("--no-save given, settings left unchanged");
            return;
        }
        let Some(store) = &self.store else {
            return;
        };

        let snapshot = self.snapshot(index, last_query);
        if let Err(e) = store.save(&snapshot) {
            warn!(error = %e, "Failed to save settings");
        }
    }
}

/// Context for command execution, distinguishing between real and placeholder configs.
///
/// Settings commands run without a connection, so a broken `ES_PORT` or host
/// never prevents inspecting or resetting the settings file.
pub(crate) enum ConfigCommandContext {
    /// A resolved connection, used for cluster operations.
    Real(Box<CommandContext>),
    /// For commands that don't need connection details.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real context, failing if this is a placeholder.
    pub(crate) fn into_real(self) -> Result<CommandContext> {
        match self {
            ConfigCommandContext::Real(context) => Ok(*context),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring real connection details"
                )
            }
        }
    }
}

fn apply_overrides(mut loader: ConfigLoader, cli: &Cli) -> ConfigLoader {
    if let Some(ref host) = cli.host {
        loader = loader.with_host(host.clone());
    }
    if let Some(port) = cli.port {
        loader = loader.with_port(port);
    }
    if cli.https {
        loader = loader.with_https(true);
    } else if cli.http {
        loader = loader.with_https(false);
    }
    if cli.insecure {
        loader = loader.with_verify_ssl(false);
    } else if cli.verify_ssl {
        loader = loader.with_verify_ssl(true);
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(ref index) = cli.index {
        loader = loader.with_index(index.clone());
    }
    loader
}

/// Open the settings store at `path`, or at the per-user default location.
///
/// Returns `None` (with a warning) when no default location can be determined.
pub(crate) fn open_store(path: Option<&Path>) -> Option<SettingsStore> {
    if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
        return Some(SettingsStore::with_path(path));
    }
    match SettingsStore::new() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "Settings file location unavailable, settings will not be remembered");
            None
        }
    }
}
