//! Document command implementations: get, index, update and delete by id.
//!
//! Responsibilities:
//! - Validate the index, id and body before any request is sent.
//! - Call the matching client operation and print its response.
//!
//! Invariants:
//! - Invalid input never reaches the cluster.
//! - A declined delete prompt sends nothing and exits successfully.

use anyhow::{Context, Result};
use es_client::{ClientError, DocumentRef, default_update_payload};
use tracing::info;

use super::{OutputOptions, build_client};
use crate::config_context::CommandContext;
use crate::input::parse_body;
use crate::interactive::confirm_delete;

pub async fn get(context: CommandContext, id: &str, output: &OutputOptions) -> Result<()> {
    let doc = DocumentRef::new(&context.index, Some(id))?;
    let id = doc.require_id()?;

    let client = build_client(&context.config)?;
    let document = client
        .get_document(doc.index(), id)
        .await
        .with_context(|| format!("Failed to get document '{}' from index '{}'", id, doc.index()))?;

    context.remember(doc.index(), None);
    output.emit(&document)
}

pub async fn index(
    context: CommandContext,
    id: Option<&str>,
    body: &str,
    output: &OutputOptions,
) -> Result<()> {
    let doc = DocumentRef::new(&context.index, id)?;
    let document = parse_body("document", body)?;

    let client = build_client(&context.config)?;
    info!(index = doc.index(), id = doc.id(), "Indexing document");
    let response = client
        .index_document(doc.index(), &document, doc.id())
        .await
        .with_context(|| format!("Failed to index document into '{}'", doc.index()))?;

    context.remember(doc.index(), None);
    output.emit(&response)
}

pub async fn update(
    context: CommandContext,
    id: &str,
    body: Option<&str>,
    output: &OutputOptions,
) -> Result<()> {
    let doc = DocumentRef::new(&context.index, Some(id))?;
    let id = doc.require_id()?;
    let Some(body) = body else {
        return Err(ClientError::InvalidInput(format!(
            "update payload is required, for example: {}",
            default_update_payload()
        ))
        .into());
    };
    let payload = parse_body("update payload", body)?;

    let client = build_client(&context.config)?;
    let response = client
        .update_document(doc.index(), id, &payload)
        .await
        .with_context(|| format!("Failed to update document '{}' in index '{}'", id, doc.index()))?;

    context.remember(doc.index(), None);
    output.emit(&response)
}

pub async fn delete(
    context: CommandContext,
    id: &str,
    yes: bool,
    output: &OutputOptions,
) -> Result<()> {
    let doc = DocumentRef::new(&context.index, Some(id))?;
    let id = doc.require_id()?;

    if !yes && !confirm_delete(doc.index(), id)? {
        return Ok(());
    }

    let client = build_client(&context.config)?;
    let response = client
        .delete_document(doc.index(), id)
        .await
        .with_context(|| format!("Failed to delete document '{}' from index '{}'", id, doc.index()))?;

    context.remember(doc.index(), None);
    output.emit(&response)
}
