//! New command: start a document from an archetype.

use crate::commands::common::{Catalog, parse_target};
use anyhow::{Context, Result};
use composer_core::cli::ExitCode;
use composer_core::{Document, GlobalValues, Section, TargetProfile};
use tracing::info;

/// Builds a fresh document from an archetype's default sections.
///
/// Sections get fresh ids so several documents started from one archetype
/// never share section identity. The profile is `target` if given, else the
/// archetype's own.
///
/// # Errors
///
/// Returns `Error::ResourceNotFound` for unknown archetypes.
///
/// # Examples
///
/// ```
/// use composer_cli::Catalog;
/// use composer_cli::commands::config::CatalogConfig;
/// use composer_cli::commands::new::new_document;
/// use composer_core::TargetProfile;
///
/// let catalog = Catalog::load(&CatalogConfig::default()).unwrap();
/// let doc = new_document(&catalog, "cursor-rule", None, Some("linter")).unwrap();
///
/// assert_eq!(doc.target, TargetProfile::Cursor);
/// assert_eq!(doc.globals.get("agentName"), Some("linter"));
/// ```
pub fn new_document(
    catalog: &Catalog,
    archetype_id: &str,
    target: Option<TargetProfile>,
    agent_name: Option<&str>,
) -> Result<Document> {
    let archetype = catalog.archetype(archetype_id)?;

    let mut document = Document::new(target.unwrap_or(archetype.target));
    document.sections = archetype.sections.iter().map(Section::duplicate).collect();
    if let Some(name) = agent_name {
        document.globals.set(GlobalValues::AGENT_NAME, name);
    }

    Ok(document)
}

/// Runs the new command, printing the document JSON.
///
/// # Errors
///
/// Returns an error if the archetype or target is unknown.
pub fn run(
    catalog: &Catalog,
    archetype_id: &str,
    target: Option<&str>,
    agent_name: Option<&str>,
) -> Result<ExitCode> {
    let target = target.map(parse_target).transpose()?;
    let document = new_document(catalog, archetype_id, target, agent_name)?;

    info!(
        archetype = archetype_id,
        target = %document.target,
        sections = document.sections.len(),
        "created document"
    );

    println!(
        "{}",
        document.to_json().context("failed to serialize document")?
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::CatalogConfig;
    use composer_core::Error;

    fn catalog() -> Catalog {
        Catalog::load(&CatalogConfig::default()).unwrap()
    }

    #[test]
    fn test_new_document_fresh_ids() {
        let catalog = catalog();
        let archetype = catalog.archetype("copilot-skill").unwrap();
        let doc = new_document(&catalog, "copilot-skill", None, None).unwrap();

        assert_eq!(doc.sections.len(), archetype.sections.len());
        for (fresh, original) in doc.sections.iter().zip(&archetype.sections) {
            assert_ne!(fresh.id, original.id);
            assert_eq!(fresh.component_id, original.component_id);
            assert_eq!(fresh.values, original.values);
        }
        assert!(doc.has_unique_ids());
        assert!(doc.globals.is_empty());
    }

    #[test]
    fn test_new_document_target_override() {
        let doc =
            new_document(&catalog(), "copilot-agent", Some(TargetProfile::Generic), None).unwrap();
        assert_eq!(doc.target, TargetProfile::Generic);
    }

    #[test]
    fn test_new_document_unknown_archetype() {
        let err = new_document(&catalog(), "missing", None, None).unwrap_err();
        assert!(err.downcast_ref::<Error>().is_some_and(Error::is_not_found));
    }
}
