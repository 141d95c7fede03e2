//! JSON body arguments.
//!
//! A `BODY`/`QUERY` argument is one of:
//! - `-`: read the body from stdin
//! - `@path`: read the body from a file
//! - anything else: the JSON text itself

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use es_client::{ClientError, parse_json_body};
use serde_json::Value;

/// Resolve a body argument to its text, reading stdin for `-`.
pub(crate) fn read_body(arg: &str) -> Result<String> {
    read_body_from(arg, std::io::stdin().lock())
}

fn read_body_from(arg: &str, mut stdin: impl Read) -> Result<String> {
    if arg == "-" {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read body from stdin")?;
        return Ok(text);
    }

    if let Some(path) = arg.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(ClientError::InvalidInput("expected a file path after '@'".to_string()).into());
        }
        return read_file(Path::new(path));
    }

    Ok(arg.to_string())
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Resolve and parse a body argument. `context` names the body in errors.
pub(crate) fn parse_body(context: &str, arg: &str) -> Result<Value> {
    let text = read_body(arg)?;
    Ok(parse_json_body(context, &text)?)
}
