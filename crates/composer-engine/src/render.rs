//! Value resolution and template rendering.
//!
//! Placeholders are `{{name}}` tokens. Resolution order for a placeholder:
//!
//! 1. the section's own value,
//! 2. the component field's default,
//! 3. the document's global values.
//!
//! Steps 1 and 2 are merged by [`resolve_values`] before substitution, so a
//! field that is declared or set on the section never falls through to a
//! global, even when its value is empty. Substitution is a single scan:
//! inserted values are never re-expanded. Unresolved placeholders are left
//! verbatim.
//!
//! After substitution, lines consisting only of a bold label such as
//! `**Denied:**` (plus whitespace) are removed so optional fields vanish
//! cleanly.

use composer_core::{Component, GlobalValues};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::trace;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}\n]+)\}\}").expect("valid regex"));
static BLANK_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^*\n]+:\*\*\s*$").expect("valid regex"));

/// Merges field defaults with a section's own values.
///
/// Section values win. Keys set on the section but not declared by the
/// component are kept.
///
/// # Examples
///
/// ```
/// use composer_core::{Component, Field};
/// use composer_engine::resolve_values;
/// use std::collections::BTreeMap;
///
/// let component = Component::new("role", "content", "")
///     .with_field(Field::text("persona", "assistant"))
///     .with_field(Field::text("tone", "friendly"));
///
/// let mut values = BTreeMap::new();
/// values.insert("tone".to_string(), "formal".to_string());
///
/// let resolved = resolve_values(&component, &values);
/// assert_eq!(resolved["persona"], "assistant");
/// assert_eq!(resolved["tone"], "formal");
/// ```
#[must_use]
pub fn resolve_values(
    component: &Component,
    section_values: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut resolved = component.default_values();
    resolved.extend(section_values.iter().map(|(k, v)| (k.clone(), v.clone())));
    resolved
}

/// Substitutes placeholders in `template` and elides blank labelled lines.
///
/// `values` take precedence over `globals`.
///
/// # Examples
///
/// ```
/// use composer_core::GlobalValues;
/// use composer_engine::render_template;
/// use std::collections::BTreeMap;
///
/// let mut values = BTreeMap::new();
/// values.insert("denied".to_string(), String::new());
/// let globals = GlobalValues::new().with("agentName", "bot");
///
/// let out = render_template("# {{agentName}}\n**Denied:** {{denied}}", &values, &globals);
/// assert_eq!(out, "# bot");
/// ```
#[must_use]
pub fn render_template(
    template: &str,
    values: &BTreeMap<String, String>,
    globals: &GlobalValues,
) -> String {
    let substituted = PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        values
            .get(name)
            .map(String::as_str)
            .or_else(|| globals.get(name))
            .map_or_else(
                || {
                    trace!(placeholder = name, "unresolved placeholder left verbatim");
                    caps[0].to_string()
                },
                str::to_string,
            )
    });

    elide_blank_labels(&substituted)
}

/// Removes lines that hold only a bold label prefix and whitespace.
///
/// # Examples
///
/// ```
/// use composer_engine::render::elide_blank_labels;
///
/// assert_eq!(elide_blank_labels("a\n**Note:**   \nb"), "a\nb");
/// assert_eq!(elide_blank_labels("**Note:** kept"), "**Note:** kept");
/// ```
#[must_use]
pub fn elide_blank_labels(text: &str) -> String {
    if !text.contains("**") {
        return text.to_string();
    }
    text.split('\n')
        .filter(|line| !BLANK_LABEL_REGEX.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a component's template for one section.
///
/// A missing component renders as an empty string.
#[must_use]
pub fn render(
    component: Option<&Component>,
    section_values: &BTreeMap<String, String>,
    globals: &GlobalValues,
) -> String {
    component.map_or_else(String::new, |component| {
        let resolved = resolve_values(component, section_values);
        render_template(&component.template, &resolved, globals)
    })
}
