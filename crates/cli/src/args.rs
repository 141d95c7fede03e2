//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the connection configuration (see `config_context` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::settings::SettingsCommand;

#[derive(Parser)]
#[command(name = "es-viewer")]
#[command(about = "Inspect and edit documents in an Elasticsearch cluster", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  es-viewer info\n  es-viewer --index logs-2024 search '{\"query\":{\"match\":{\"level\":\"warn\"}},\"size\":5}'\n  es-viewer get 42 --output json\n  es-viewer index --id 42 @doc.json\n  echo '{\"doc\":{\"status\":\"closed\"}}' | es-viewer update 42 -\n  es-viewer --https --insecure -u elastic delete 42 --yes\n"
)]
pub struct Cli {
    /// Cluster host name or IP address
    #[arg(long, global = true, env = "ES_HOST")]
    pub host: Option<String>,

    /// Cluster HTTP port [env: ES_PORT]
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Connect with HTTPS instead of HTTP
    #[arg(long, global = true, overrides_with = "http")]
    pub https: bool,

    /// Connect with plain HTTP (undoes a remembered --https)
    #[arg(long, global = true, overrides_with = "https")]
    pub http: bool,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, overrides_with = "verify_ssl")]
    pub insecure: bool,

    /// Verify TLS certificates (undoes a remembered --insecure)
    #[arg(long, global = true, overrides_with = "insecure")]
    pub verify_ssl: bool,

    /// Username for HTTP Basic authentication
    #[arg(short, long, global = true, env = "ES_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP Basic authentication
    #[arg(short, long, global = true, env = "ES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds [env: ES_TIMEOUT]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Index to operate on (defaults to the last used index)
    #[arg(short, long, global = true, env = "ES_INDEX")]
    pub index: Option<String>,

    /// Path to the settings file (overrides the default location)
    #[arg(long, global = true, env = "ES_VIEWER_SETTINGS", value_name = "FILE")]
    pub settings_path: Option<PathBuf>,

    /// Do not remember connection, index and query after a successful command
    #[arg(long, global = true)]
    pub no_save: bool,

    /// Output format (tree, json, yaml, flat)
    #[arg(short, long, global = true, default_value = "tree")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Collapse the tree below this many levels
    #[arg(long, global = true, value_name = "N")]
    pub depth: Option<usize>,

    /// Log format on stderr (text, json)
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show cluster name, version and tagline
    Info,

    /// Run a Query-DSL search against the index
    Search {
        /// Query body: inline JSON, @FILE, or - for stdin (defaults to the last query)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Read the query body from a file
        #[arg(long, value_name = "FILE", conflicts_with = "query")]
        query_file: Option<PathBuf>,
    },

    /// Fetch a document by id
    Get {
        /// Document id
        id: String,
    },

    /// Index a document (PUT with --id, POST with a server-assigned id otherwise)
    Index {
        /// Document id; omit to let the cluster assign one
        #[arg(long)]
        id: Option<String>,

        /// Document body: inline JSON, @FILE, or - for stdin
        #[arg(value_name = "BODY")]
        body: String,
    },

    /// Partially update a document with a `doc` or `script` payload
    Update {
        /// Document id
        id: String,

        /// Update payload: inline JSON, @FILE, or - for stdin
        #[arg(value_name = "BODY")]
        body: Option<String>,
    },

    /// Delete a document by id
    Delete {
        /// Document id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show, locate or reset the remembered settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

impl Commands {
    /// Whether the command talks to the cluster.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Settings { .. })
    }
}
