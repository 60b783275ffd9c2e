//! Components command: list the component catalog.

use crate::commands::common::Catalog;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use composer_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use tracing::info;

/// One row of the component listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Component id
    pub id: String,
    /// Palette category
    pub category: String,
    /// Field names in declaration order
    pub fields: Vec<String>,
    /// Whether output is computed by a post-processor instead of the template
    pub computed: bool,
}

/// Lists components, optionally restricted to one category.
#[must_use]
pub fn list_components(catalog: &Catalog, category: Option<&str>) -> Vec<ComponentSummary> {
    let table = catalog.engine.post_processors();
    catalog
        .registry()
        .iter()
        .filter(|c| category.is_none_or(|cat| c.category == cat))
        .map(|c| ComponentSummary {
            id: c.id.to_string(),
            category: c.category.clone(),
            fields: c.fields.iter().map(|f| f.name.clone()).collect(),
            computed: table.resolve(c.id.as_str()).is_some(),
        })
        .collect()
}

/// Runs the components command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn run(
    catalog: &Catalog,
    category: Option<&str>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let components = list_components(catalog, category);
    info!(count = components.len(), ?category, "listing components");

    let formatted = format_output(&components, output_format)
        .context("failed to format component list")?;
    println!("{formatted}");
    Ok(ExitCode::SUCCESS)
}
