//! Adapt command: move a document onto another archetype's header.

use crate::commands::common::{Catalog, load_document};
use anyhow::{Context, Result};
use composer_core::Document;
use composer_core::cli::ExitCode;
use std::path::Path;
use tracing::info;

/// Adapts `document` to the archetype `to`.
///
/// Header sections are swapped for the archetype's header (if it has one),
/// content sections are kept, globals are carried over, and the target
/// becomes the archetype's profile.
///
/// # Errors
///
/// Returns `Error::ResourceNotFound` for unknown archetypes.
pub fn adapt_document(catalog: &Catalog, document: &Document, to: &str) -> Result<Document> {
    let archetype = catalog.archetype(to)?;
    Ok(Document {
        target: archetype.target,
        globals: document.globals.clone(),
        sections: composer_engine::adapt(&document.sections, Some(archetype)),
    })
}

/// Runs the adapt command, printing the adapted document JSON.
///
/// # Errors
///
/// Returns an error if the document cannot be read or the archetype is
/// unknown.
pub fn run(catalog: &Catalog, document_path: &Path, to: &str) -> Result<ExitCode> {
    let document = load_document(document_path)?;
    let adapted = adapt_document(catalog, &document, to)?;

    info!(
        document = %document_path.display(),
        archetype = to,
        before = document.sections.len(),
        after = adapted.sections.len(),
        "adapted document"
    );

    println!(
        "{}",
        adapted.to_json().context("failed to serialize document")?
    );
    Ok(ExitCode::SUCCESS)
}
