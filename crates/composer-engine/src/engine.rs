//! Engine façade bundling the registry and the post-processor table.

use crate::assemble::{assemble_with, render_section};
use crate::postprocess::PostProcessorTable;
use composer_core::{ComponentRegistry, Document, GlobalValues, Section, TargetProfile};
use std::sync::Arc;

/// Document synthesis engine.
///
/// Holds shared, read-only handles to the component registry and the
/// post-processor table. Cloning is cheap.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one engine can serve many editing
/// sessions concurrently because it never mutates its inputs.
///
/// # Examples
///
/// ```
/// use composer_core::{ComponentRegistry, Document, TargetProfile};
/// use composer_engine::Engine;
/// use std::sync::Arc;
///
/// let engine = Engine::new(Arc::new(ComponentRegistry::builtin().unwrap()));
///
/// let mut doc = Document::new(TargetProfile::Cursor);
/// doc.globals.set("agentName", "my-agent");
///
/// let out = engine.assemble_document(&doc);
/// assert!(out.contains("alwaysApply: true"));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<ComponentRegistry>,
    table: Arc<PostProcessorTable>,
}

impl Engine {
    /// Creates an engine with the built-in post-processors.
    #[must_use]
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self::with_table(registry, Arc::new(PostProcessorTable::builtin()))
    }

    /// Creates an engine with a custom post-processor table.
    #[must_use]
    pub const fn with_table(
        registry: Arc<ComponentRegistry>,
        table: Arc<PostProcessorTable>,
    ) -> Self {
        Self { registry, table }
    }

    /// Returns the component registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Returns the post-processor table.
    #[must_use]
    pub fn post_processors(&self) -> &PostProcessorTable {
        &self.table
    }

    /// Renders a single section.
    #[must_use]
    pub fn render_section(&self, section: &Section, globals: &GlobalValues) -> String {
        render_section(&self.registry, &self.table, section, globals)
    }

    /// Assembles the final text for a section list.
    #[must_use]
    pub fn assemble(
        &self,
        sections: &[Section],
        globals: &GlobalValues,
        profile: TargetProfile,
    ) -> String {
        assemble_with(&self.registry, &self.table, sections, globals, profile)
    }

    /// Assembles a whole document under its own target profile.
    #[must_use]
    pub fn assemble_document(&self, document: &Document) -> String {
        self.assemble(&document.sections, &document.globals, document.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_is_send_sync() {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_assemble_document_uses_document_target() {
        let engine = Engine::new(Arc::new(ComponentRegistry::builtin().unwrap()));
        let mut doc = Document::new(TargetProfile::Windsurf);
        doc.sections
            .push(Section::with_values("header-skill", [("license", "MIT")]));
        doc.sections
            .push(Section::with_values("separator", [("style", "blank")]));

        assert_eq!(engine.assemble_document(&doc), "&nbsp;");
    }

    #[test]
    fn test_render_section_missing_component() {
        let engine = Engine::new(Arc::new(ComponentRegistry::default()));
        let section = Section::with_values("separator", [("style", "dots")]);
        assert_eq!(engine.render_section(&section, &GlobalValues::new()), "");
    }
}
