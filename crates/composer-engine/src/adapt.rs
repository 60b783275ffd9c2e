//! Archetype adaptation.
//!
//! Reuses a section list authored for one integration under another by
//! swapping its header: every header-class section is removed, and the
//! target archetype's own header (if its first default section is one) is
//! cloned in under a fresh id.

use crate::inclusion::is_header_class;
use composer_core::{Archetype, Section};
use tracing::debug;

/// Adapts `template_sections` to `target`.
///
/// Content sections keep their ids and order. With no target, the content
/// sections are returned as-is.
///
/// # Examples
///
/// ```
/// use composer_core::{Archetype, Section, TargetProfile};
/// use composer_engine::adapt;
///
/// let template = vec![
///     Section::with_values("header-skill", [("license", "MIT")]),
///     Section::with_values("role", [("persona", "reviewer")]),
/// ];
/// let target = Archetype {
///     id: "cursor-rule".to_string(),
///     name: "Cursor rule".to_string(),
///     description: String::new(),
///     target: TargetProfile::Cursor,
///     sections: vec![Section::with_values("header-cursor", [("globs", "")])],
/// };
///
/// let adapted = adapt(&template, Some(&target));
/// assert_eq!(adapted.len(), 2);
/// assert_eq!(adapted[0].component_id.as_str(), "header-cursor");
/// assert_ne!(adapted[0].id, target.sections[0].id);
/// assert_eq!(adapted[1].id, template[1].id);
/// ```
#[must_use]
pub fn adapt(template_sections: &[Section], target: Option<&Archetype>) -> Vec<Section> {
    let content: Vec<Section> = template_sections
        .iter()
        .filter(|s| !is_header_class(s.component_id.as_str()))
        .cloned()
        .collect();

    let Some(target) = target else {
        return content;
    };

    match target.first_section() {
        Some(first) if is_header_class(first.component_id.as_str()) => {
            debug!(
                archetype = %target.id,
                header = %first.component_id,
                "prepending target archetype header"
            );
            let mut adapted = Vec::with_capacity(content.len() + 1);
            adapted.push(first.duplicate());
            adapted.extend(content);
            adapted
        }
        _ => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composer_core::TargetProfile;

    fn archetype(sections: Vec<Section>) -> Archetype {
        Archetype {
            id: "target".to_string(),
            name: String::new(),
            description: String::new(),
            target: TargetProfile::Generic,
            sections,
        }
    }

    fn empty(component: &str) -> Section {
        Section::with_values(component, Vec::<(String, String)>::new())
    }

    #[test]
    fn test_no_target_strips_headers() {
        let template = vec![empty("header-skill"), empty("role"), empty("header-agent")];
        let adapted = adapt(&template, None);
        assert_eq!(adapted, vec![template[1].clone()]);
    }

    #[test]
    fn test_headerless_target_prepends_nothing() {
        let template = vec![empty("header-skill"), empty("role"), empty("rules")];
        let target = archetype(vec![empty("rules")]);

        let adapted = adapt(&template, Some(&target));
        assert_eq!(adapted, template[1..].to_vec());
    }

    #[test]
    fn test_header_target_cloned_with_fresh_id() {
        let template = vec![empty("role")];
        let target = archetype(vec![
            Section::with_values("header-prompt", [("mode", "ask")]),
            empty("instructions"),
        ]);

        let adapted = adapt(&template, Some(&target));
        assert_eq!(adapted.len(), 2);
        assert_eq!(adapted[0].component_id, target.sections[0].component_id);
        assert_eq!(adapted[0].values, target.sections[0].values);
        assert_ne!(adapted[0].id, target.sections[0].id);
        assert_eq!(adapted[1], template[0]);
    }

    #[test]
    fn test_empty_target_archetype() {
        let template = vec![empty("header-skill"), empty("role")];
        let adapted = adapt(&template, Some(&archetype(Vec::new())));
        assert_eq!(adapted, vec![template[1].clone()]);
    }

    #[test]
    fn test_adapt_does_not_mutate_input() {
        let template = vec![empty("header-skill"), empty("role")];
        let before = template.clone();
        let _ = adapt(&template, Some(&archetype(vec![empty("header-cursor")])));
        assert_eq!(template, before);
    }
}
