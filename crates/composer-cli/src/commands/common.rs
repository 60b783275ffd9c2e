//! Utilities shared across CLI commands.

use crate::commands::config::CatalogConfig;
use anyhow::{Context, Result};
use composer_core::{
    Archetype, ArchetypeCatalog, ComponentRegistry, Document, Error, TargetProfile,
};
use composer_engine::Engine;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Component registry, archetypes and the engine built over them.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Engine bound to the component registry
    pub engine: Engine,
    /// Archetype catalog
    pub archetypes: ArchetypeCatalog,
}

impl Catalog {
    /// Loads the catalogs, using configured replacement files where set.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file is missing or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer_cli::Catalog;
    /// use composer_cli::commands::config::CatalogConfig;
    ///
    /// let catalog = Catalog::load(&CatalogConfig::default()).unwrap();
    /// assert!(catalog.registry().contains("separator"));
    /// assert!(catalog.archetype("cursor-rule").is_ok());
    /// ```
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let registry = match &config.components {
            Some(path) => {
                info!(path = %path.display(), "loading component catalog");
                ComponentRegistry::load(path).context("failed to load component catalog")?
            }
            None => ComponentRegistry::builtin().context("built-in component catalog is invalid")?,
        };
        let archetypes = match &config.archetypes {
            Some(path) => {
                info!(path = %path.display(), "loading archetype catalog");
                ArchetypeCatalog::load(path).context("failed to load archetype catalog")?
            }
            None => ArchetypeCatalog::builtin().context("built-in archetype catalog is invalid")?,
        };
        debug!(
            components = registry.len(),
            archetypes = archetypes.len(),
            "catalog ready"
        );

        Ok(Self {
            engine: Engine::new(Arc::new(registry)),
            archetypes,
        })
    }

    /// Returns the component registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        self.engine.registry()
    }

    /// Looks up an archetype.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` for unknown ids.
    pub fn archetype(&self, id: &str) -> Result<&Archetype> {
        self.archetypes.get(id).ok_or_else(|| {
            Error::ResourceNotFound {
                resource: format!("archetype:{id}"),
            }
            .into()
        })
    }
}

/// Parses a `--target` value strictly.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for unknown profile names.
pub fn parse_target(value: &str) -> Result<TargetProfile> {
    Ok(value.parse::<TargetProfile>()?)
}

/// Reads a document JSON file.
///
/// # Errors
///
/// Returns an error if the file is missing or is not a valid document.
pub fn load_document(path: &Path) -> Result<Document> {
    debug!(path = %path.display(), "loading document");
    Ok(Document::load(path)?)
}

/// Writes `text` to `output`, or prints it when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}
