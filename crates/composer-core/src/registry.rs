//! Immutable catalogs: components and archetypes.
//!
//! Both catalogs are constructed once (from the built-in data or from a
//! user-supplied JSON file) and then only read. Share them behind an
//! `Arc` rather than cloning.
//!
//! # Examples
//!
//! ```
//! use composer_core::{ArchetypeCatalog, ComponentRegistry};
//!
//! let registry = ComponentRegistry::builtin().unwrap();
//! assert!(registry.contains("separator"));
//!
//! let archetypes = ArchetypeCatalog::builtin().unwrap();
//! assert!(archetypes.get("cursor-rule").is_some());
//! ```

use crate::{Component, ComponentId, Error, Result, Section, TargetProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const BUILTIN_COMPONENTS: &str = include_str!("../catalog/components.json");
const BUILTIN_ARCHETYPES: &str = include_str!("../catalog/archetypes.json");

/// Read-only catalog of component definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<ComponentId, Component>,
}

impl ComponentRegistry {
    /// Builds a registry from component definitions.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if two components share an id.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for component in components {
            let id = component.id.clone();
            if map.insert(id.clone(), component).is_some() {
                return Err(Error::ValidationError {
                    field: "components".to_string(),
                    reason: format!("duplicate component id '{id}'"),
                });
            }
        }
        debug!(count = map.len(), "component registry built");
        Ok(Self { components: map })
    }

    /// Parses a JSON array of components.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` for malformed JSON, or
    /// `Error::ValidationError` for duplicate ids.
    pub fn from_json(json: &str) -> Result<Self> {
        let components: Vec<Component> = serde_json::from_str(json)?;
        Self::from_components(components)
    }

    /// Loads a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if the file cannot be read, or any
    /// error from [`ComponentRegistry::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ResourceNotFound {
            resource: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(&content)
    }

    /// Returns the built-in component catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded catalog data is corrupt.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_COMPONENTS)
    }

    /// Looks up a component by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Returns `true` if a component with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the registry holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over components in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Iterates over components in one category, in id order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Component> {
        self.iter().filter(move |c| c.category == category)
    }
}

/// A named starting point: the default section list for one integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    /// Unique archetype id.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Profile documents built from this archetype target.
    #[serde(default)]
    pub target: TargetProfile,

    /// Default sections, in order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Archetype {
    /// Returns the first default section, if any.
    #[must_use]
    pub fn first_section(&self) -> Option<&Section> {
        self.sections.first()
    }
}

/// Read-only catalog of archetypes keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ArchetypeCatalog {
    archetypes: BTreeMap<String, Archetype>,
}

impl ArchetypeCatalog {
    /// Builds a catalog from archetype definitions.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationError` if two archetypes share an id.
    pub fn from_archetypes(archetypes: impl IntoIterator<Item = Archetype>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for archetype in archetypes {
            let id = archetype.id.clone();
            if map.insert(id.clone(), archetype).is_some() {
                return Err(Error::ValidationError {
                    field: "archetypes".to_string(),
                    reason: format!("duplicate archetype id '{id}'"),
                });
            }
        }
        Ok(Self { archetypes: map })
    }

    /// Parses a JSON array of archetypes.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` for malformed JSON, or
    /// `Error::ValidationError` for duplicate ids.
    pub fn from_json(json: &str) -> Result<Self> {
        let archetypes: Vec<Archetype> = serde_json::from_str(json)?;
        Self::from_archetypes(archetypes)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if the file cannot be read, or any
    /// error from [`ArchetypeCatalog::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ResourceNotFound {
            resource: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(&content)
    }

    /// Returns the built-in archetype catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded catalog data is corrupt.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_ARCHETYPES)
    }

    /// Looks up an archetype by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.get(id)
    }

    /// Returns the default sections of an archetype.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` for unknown ids.
    pub fn default_sections(&self, id: &str) -> Result<&[Section]> {
        self.get(id)
            .map(|a| a.sections.as_slice())
            .ok_or_else(|| Error::ResourceNotFound {
                resource: format!("archetype:{id}"),
            })
    }

    /// Iterates over archetypes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.values()
    }

    /// Number of archetypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}
