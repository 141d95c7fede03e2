//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the output formats: tree, JSON, YAML and flat (CSV).
//! - Render any cluster response through one `Formatter` trait.
//!
//! Does NOT handle:
//! - Normalizing JSON into rows (see `es_client::tree`).
//! - Deciding where output goes (see `common::output_result`).
//!
//! Invariants:
//! - Every formatter is total over JSON values.
//! - Output always ends with a newline.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty object / array | Rationale |
//! |--------|----------------------|-----------|
//! | Tree | `{}` / `[]` | Shows the shape that came back |
//! | JSON | `{}` / `[]` | Machine parseable |
//! | YAML | `{}` / `[]` | Machine parseable |
//! | Flat | Header row only | Pipelines can parse headers |

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use es_config::PersistedSettings;
use serde_json::Value;

mod common;
mod flat;
mod json;
mod tree;
mod yaml;

pub use common::output_result;
pub use flat::FlatFormatter;
pub use json::JsonFormatter;
pub use tree::TreeFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Json,
    Yaml,
    Flat,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "flat" | "csv" => Ok(OutputFormat::Flat),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: tree, json, yaml, flat",
                s
            ),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Flat => "flat",
        };
        f.write_str(name)
    }
}

/// Renders cluster responses and the settings snapshot.
pub trait Formatter {
    /// Format any JSON response.
    fn format_value(&self, value: &Value) -> Result<String>;

    /// Format the remembered settings.
    fn format_settings(&self, settings: &PersistedSettings) -> Result<String> {
        self.format_value(&serde_json::to_value(settings)?)
    }
}

/// Get a formatter for the specified format.
///
/// `max_depth` only affects the tree format.
pub fn get_formatter(format: OutputFormat, max_depth: Option<usize>) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Tree => Box::new(TreeFormatter { max_depth }),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Flat => Box::new(FlatFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("tree".parse::<OutputFormat>().unwrap(), OutputFormat::Tree);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Flat);

        let err = "table".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("tree, json, yaml, flat"));
    }

    #[test]
    fn test_every_format_ends_with_newline() {
        let value = json!({"cluster_name": "docker-cluster", "version": {"number": "8.13.0"}});
        for format in [
            OutputFormat::Tree,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Flat,
        ] {
            let output = get_formatter(format, None).format_value(&value).unwrap();
            assert!(output.ends_with('\n'), "{} output: {:?}", format, output);
        }
    }

    #[test]
    fn test_settings_are_formatted_as_json_object() {
        let settings = PersistedSettings {
            last_query: Some(r#"{"size":1}"#.to_string()),
            ..PersistedSettings::default()
        };
        let output = JsonFormatter.format_settings(&settings).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["host"], "localhost");
        assert_eq!(parsed["port"], 9200);
        assert_eq!(parsed["last_query"], r#"{"size":1}"#);
        assert!(parsed.get("password").is_none());
    }
}
