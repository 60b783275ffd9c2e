//! Render command: assemble a document file into its final text.

use crate::commands::common::{Catalog, emit, load_document, parse_target};
use anyhow::Result;
use composer_core::cli::ExitCode;
use composer_core::{Document, TargetProfile};
use std::path::Path;
use tracing::info;

/// Assembles `document`, optionally under a different profile than its own.
#[must_use]
pub fn render_document(
    catalog: &Catalog,
    document: &Document,
    target: Option<TargetProfile>,
) -> String {
    let profile = target.unwrap_or(document.target);
    catalog
        .engine
        .assemble(&document.sections, &document.globals, profile)
}

/// Runs the render command.
///
/// The rendered text is printed verbatim regardless of `--format`.
///
/// # Errors
///
/// Returns an error if the document cannot be read, the target is unknown,
/// or the output file cannot be written.
pub fn run(
    catalog: &Catalog,
    document_path: &Path,
    target: Option<&str>,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let target = target.map(parse_target).transpose()?;
    let document = load_document(document_path)?;

    info!(
        document = %document_path.display(),
        sections = document.sections.len(),
        target = %target.unwrap_or(document.target),
        "rendering document"
    );

    let text = render_document(catalog, &document, target);
    emit(&text, output)?;
    Ok(ExitCode::SUCCESS)
}
