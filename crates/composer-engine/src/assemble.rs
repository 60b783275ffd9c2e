//! Document assembly.
//!
//! Pipeline: filter sections by profile, render each survivor (template or
//! post-processor), join with blank lines, then prepend a synthesized
//! Cursor header when the profile needs one and none was authored.
//!
//! Every survivor keeps its slot in the join, even when it renders empty.

use crate::inclusion::{CURSOR_HEADER, is_included};
use crate::postprocess::PostProcessorTable;
use crate::render::{render_template, resolve_values};
use composer_core::{ComponentRegistry, GlobalValues, Section, TargetProfile};
use std::sync::LazyLock;
use tracing::debug;

/// Separator placed between rendered sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Description used by the synthesized Cursor header when no global
/// `description` or `agentName` is set.
pub const DEFAULT_RULE_DESCRIPTION: &str = "Agent rules";

static BUILTIN_TABLE: LazyLock<PostProcessorTable> = LazyLock::new(PostProcessorTable::builtin);

/// Renders one section: resolve values, then post-process or render the
/// template.
///
/// Sections referencing an unknown component render as an empty string.
#[must_use]
pub fn render_section(
    registry: &ComponentRegistry,
    table: &PostProcessorTable,
    section: &Section,
    globals: &GlobalValues,
) -> String {
    let component_id = section.component_id.as_str();
    let Some(component) = registry.get(component_id) else {
        debug!(
            section = %section.id,
            component = component_id,
            "unknown component, rendering empty"
        );
        return String::new();
    };

    let resolved = resolve_values(component, &section.values);
    table.resolve(component_id).map_or_else(
        || render_template(&component.template, &resolved, globals),
        |post_process| post_process(&resolved),
    )
}

/// Builds the minimal Cursor rule header.
///
/// The description is the global `description`, else `agentName`, else
/// [`DEFAULT_RULE_DESCRIPTION`]; empty values count as unset.
///
/// # Examples
///
/// ```
/// use composer_core::GlobalValues;
/// use composer_engine::cursor_header;
///
/// let globals = GlobalValues::new().with("agentName", "my-agent");
/// assert_eq!(
///     cursor_header(&globals),
///     "---\ndescription: my-agent\nglobs: \nalwaysApply: true\n---"
/// );
/// ```
#[must_use]
pub fn cursor_header(globals: &GlobalValues) -> String {
    let description = globals
        .get_non_empty(GlobalValues::DESCRIPTION)
        .or_else(|| globals.get_non_empty(GlobalValues::AGENT_NAME))
        .unwrap_or(DEFAULT_RULE_DESCRIPTION);
    format!("---\ndescription: {description}\nglobs: \nalwaysApply: true\n---")
}

/// Assembles the final document using an explicit post-processor table.
#[must_use]
pub fn assemble_with(
    registry: &ComponentRegistry,
    table: &PostProcessorTable,
    sections: &[Section],
    globals: &GlobalValues,
    profile: TargetProfile,
) -> String {
    let body = sections
        .iter()
        .filter(|s| is_included(s.component_id.as_str(), profile))
        .map(|s| render_section(registry, table, s, globals))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);

    let needs_header = profile == TargetProfile::Cursor
        && !sections
            .iter()
            .any(|s| s.component_id.as_str() == CURSOR_HEADER);

    if !needs_header {
        return body;
    }

    debug!("no cursor header authored, synthesizing one");
    let header = cursor_header(globals);
    if body.is_empty() {
        header
    } else {
        format!("{header}{SECTION_SEPARATOR}{body}")
    }
}

/// Assembles the final document with the built-in post-processors.
///
/// A pure function of its inputs: identical arguments always produce
/// byte-identical output.
///
/// # Examples
///
/// ```
/// use composer_core::{ComponentRegistry, GlobalValues, Section, TargetProfile};
/// use composer_engine::assemble;
///
/// let registry = ComponentRegistry::builtin().unwrap();
/// let sections = vec![Section::with_values("separator", [("style", "line")])];
///
/// let out = assemble(&registry, &sections, &GlobalValues::new(), TargetProfile::Vscode);
/// assert_eq!(out, "---");
/// ```
#[must_use]
pub fn assemble(
    registry: &ComponentRegistry,
    sections: &[Section],
    globals: &GlobalValues,
    profile: TargetProfile,
) -> String {
    assemble_with(registry, &BUILTIN_TABLE, sections, globals, profile)
}
