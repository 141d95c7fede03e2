//! Shared test utilities for es-viewer integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every command at a per-test settings file.
//!
//! Invariants / Assumptions:
//! - No `ES_*` variable from the host environment reaches the binary.
//! - Settings never land in the real per-user config directory.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;
use wiremock::MockServer;

const CLEARED_VARS: &[&str] = &[
    "ES_HOST",
    "ES_PORT",
    "ES_HTTPS",
    "ES_VERIFY_SSL",
    "ES_USERNAME",
    "ES_PASSWORD",
    "ES_TIMEOUT",
    "ES_INDEX",
    "RUST_LOG",
];

/// A temporary settings location shared by the commands of one test.
pub struct TestSettings {
    dir: TempDir,
}

impl TestSettings {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Returns a hermetic `es-viewer` command using this settings file.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("es-viewer");

        // Hermeticity: prevent loading local .env
        cmd.env("DOTENV_DISABLED", "1");
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("ES_VIEWER_SETTINGS", self.path());
        cmd
    }

    /// Returns a hermetic command connected to `server`.
    #[allow(dead_code)]
    pub fn cmd_for(&self, server: &MockServer) -> Command {
        let mut cmd = self.cmd();
        cmd.env("ES_HOST", server.address().ip().to_string());
        cmd.env("ES_PORT", server.address().port().to_string());
        cmd.env("ES_TIMEOUT", "5");
        cmd
    }
}

/// A port with nothing listening on it.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}
