//! Archetypes command: list the archetype catalog.

use crate::commands::common::Catalog;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use composer_core::TargetProfile;
use composer_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use tracing::info;

/// One row of the archetype listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArchetypeSummary {
    /// Archetype id
    pub id: String,
    /// Display name
    pub name: String,
    /// Target profile of documents started from it
    pub target: TargetProfile,
    /// Component ids of the default sections, in order
    pub sections: Vec<String>,
}

/// Lists every archetype in id order.
#[must_use]
pub fn list_archetypes(catalog: &Catalog) -> Vec<ArchetypeSummary> {
    catalog
        .archetypes
        .iter()
        .map(|a| ArchetypeSummary {
            id: a.id.clone(),
            name: a.name.clone(),
            target: a.target,
            sections: a
                .sections
                .iter()
                .map(|s| s.component_id.to_string())
                .collect(),
        })
        .collect()
}

/// Runs the archetypes command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn run(catalog: &Catalog, output_format: OutputFormat) -> Result<ExitCode> {
    let archetypes = list_archetypes(catalog);
    info!(count = archetypes.len(), "listing archetypes");

    let formatted = format_output(&archetypes, output_format)
        .context("failed to format archetype list")?;
    println!("{formatted}");
    Ok(ExitCode::SUCCESS)
}
