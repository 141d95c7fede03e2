//! Search command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use es_client::{DocumentRef, default_query, parse_json_body};
use serde_json::Value;
use tracing::{info, warn};

use super::{OutputOptions, build_client};
use crate::config_context::CommandContext;
use crate::input::{parse_body, read_file};

pub async fn run(
    context: CommandContext,
    query: Option<String>,
    query_file: Option<PathBuf>,
    output: &OutputOptions,
) -> Result<()> {
    let target = DocumentRef::new(&context.index, None)?;
    let body = resolve_query(&context, query.as_deref(), query_file)?;

    let client = build_client(&context.config)?;
    info!(index = target.index(), "Executing search");

    let results = client
        .search(target.index(), &body)
        .await
        .with_context(|| format!("Search on index '{}' failed", target.index()))?;

    context.remember(target.index(), Some(&body));
    output.emit(&results)
}

/// The query to send: explicit argument, file, remembered query, or the default.
fn resolve_query(
    context: &CommandContext,
    query: Option<&str>,
    query_file: Option<PathBuf>,
) -> Result<Value> {
    if let Some(path) = query_file {
        let text = read_file(&path)?;
        return Ok(parse_json_body("query", &text)?);
    }
    if let Some(arg) = query {
        return parse_body("query", arg);
    }

    match context.last_query().map(|text| parse_json_body("saved query", text)) {
        Some(Ok(saved)) => Ok(saved),
        Some(Err(e)) => {
            warn!(error = %e, "Ignoring saved query");
            Ok(default_query())
        }
        None => Ok(default_query()),
    }
}
