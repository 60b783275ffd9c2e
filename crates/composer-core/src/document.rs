//! Editing-session state: an ordered section list plus document-wide values.
//!
//! A `Document` is owned by exactly one editing session. Order in
//! `sections` is the rendering order; every operation here preserves
//! section identity across reorders.

use crate::{Component, Error, GlobalValues, Result, Section, SectionId, TargetProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A document under construction.
///
/// # Examples
///
/// ```
/// use composer_core::{Component, Document, Field, TargetProfile};
///
/// let separator = Component::new("separator", "layout", "")
///     .with_field(Field::text("style", "line"));
///
/// let mut doc = Document::new(TargetProfile::Cursor);
/// let id = doc.add_component(&separator);
/// doc.set_value(&id, "style", "dots").unwrap();
///
/// assert_eq!(doc.sections.len(), 1);
/// assert_eq!(doc.section(&id).unwrap().value("style"), Some("dots"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Target integration profile.
    #[serde(default)]
    pub target: TargetProfile,

    /// Values shared by every section.
    #[serde(default)]
    pub globals: GlobalValues,

    /// Sections in rendering order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    /// Creates an empty document for the given profile.
    #[must_use]
    pub fn new(target: TargetProfile) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if the JSON is malformed, or
    /// `Error::ValidationError` if two sections share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        if !doc.has_unique_ids() {
            return Err(Error::ValidationError {
                field: "sections".to_string(),
                reason: "section ids must be unique within a document".to_string(),
            });
        }
        Ok(doc)
    }

    /// Reads and parses a document file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if the file cannot be read, or any
    /// error from [`Document::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ResourceNotFound {
            resource: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(&content)
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Appends a new section initialized with the component's defaults.
    pub fn add_component(&mut self, component: &Component) -> SectionId {
        let section = Section::from_component(component);
        let id = section.id.clone();
        debug!(section = %id, component = %component.id, "adding section");
        self.sections.push(section);
        id
    }

    /// Inserts a section at `index`, clamped to the end of the list.
    pub fn insert_section(&mut self, index: usize, section: Section) {
        let index = index.min(self.sections.len());
        self.sections.insert(index, section);
    }

    /// Returns the section with the given id.
    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    fn position(&self, id: &SectionId) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| Error::ResourceNotFound {
                resource: format!("section:{id}"),
            })
    }

    /// Removes a section and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if no section has this id.
    pub fn remove_section(&mut self, id: &SectionId) -> Result<Section> {
        let index = self.position(id)?;
        Ok(self.sections.remove(index))
    }

    /// Clones a section under a fresh id, placing the copy right after it.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if no section has this id.
    pub fn duplicate_section(&mut self, id: &SectionId) -> Result<SectionId> {
        let index = self.position(id)?;
        let copy = self.sections[index].duplicate();
        let new_id = copy.id.clone();
        self.sections.insert(index + 1, copy);
        Ok(new_id)
    }

    /// Moves a section to `to_index` (clamped to the last position).
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if no section has this id.
    pub fn move_section(&mut self, id: &SectionId, to_index: usize) -> Result<()> {
        let from = self.position(id)?;
        let section = self.sections.remove(from);
        let to = to_index.min(self.sections.len());
        self.sections.insert(to, section);
        Ok(())
    }

    /// Moves a section one position towards the start.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if no section has this id.
    pub fn move_up(&mut self, id: &SectionId) -> Result<()> {
        let index = self.position(id)?;
        if index > 0 {
            self.sections.swap(index, index - 1);
        }
        Ok(())
    }

    /// Moves a section one position towards the end.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if no section has this id.
    pub fn move_down(&mut self, id: &SectionId) -> Result<()> {
        let index = self.position(id)?;
        if index + 1 < self.sections.len() {
            self.sections.swap(index, index + 1);
        }
        Ok(())
    }

    /// Replaces one field value of a section.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if no section has this id.
    pub fn set_value(
        &mut self,
        id: &SectionId,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let index = self.position(id)?;
        self.sections[index].set_value(field, value);
        Ok(())
    }

    /// Returns `true` if no two sections share an id.
    #[must_use]
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.sections.len());
        self.sections.iter().all(|s| seen.insert(&s.id))
    }
}
