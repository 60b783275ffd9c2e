//! Per-profile inclusion of header-class sections.
//!
//! Header-class components (ids in the `header-` namespace) produce a
//! document header rather than body content. Integrations disagree on
//! whether and how a header is needed:
//!
//! | profile                   | header-class sections kept       |
//! |---------------------------|----------------------------------|
//! | `cursor`                  | only [`CURSOR_HEADER`]           |
//! | `claude-code`, `windsurf` | none                             |
//! | `vscode`, `generic`       | all                              |
//!
//! Every other component is always included.

use composer_core::TargetProfile;

/// Reserved id namespace of header-class components.
pub const HEADER_PREFIX: &str = "header-";

/// The Cursor-specific header component.
pub const CURSOR_HEADER: &str = "header-cursor";

/// Returns `true` if the component id is in the header-class namespace.
///
/// # Examples
///
/// ```
/// use composer_engine::is_header_class;
///
/// assert!(is_header_class("header-skill"));
/// assert!(!is_header_class("separator"));
/// ```
#[must_use]
pub fn is_header_class(component_id: &str) -> bool {
    component_id.starts_with(HEADER_PREFIX)
}

/// Decides whether a section of this component participates in the
/// document for `profile`.
///
/// # Examples
///
/// ```
/// use composer_core::TargetProfile;
/// use composer_engine::is_included;
///
/// assert!(is_included("header-cursor", TargetProfile::Cursor));
/// assert!(!is_included("header-skill", TargetProfile::Cursor));
/// assert!(!is_included("header-cursor", TargetProfile::Windsurf));
/// assert!(is_included("role", TargetProfile::ClaudeCode));
/// ```
#[must_use]
pub fn is_included(component_id: &str, profile: TargetProfile) -> bool {
    if !is_header_class(component_id) {
        return true;
    }
    match profile {
        TargetProfile::Cursor => component_id == CURSOR_HEADER,
        TargetProfile::ClaudeCode | TargetProfile::Windsurf => false,
        TargetProfile::Vscode | TargetProfile::Generic => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 4] = ["header-skill", "header-prompt", "header-agent", "header-cursor"];
    const BODY: [&str; 6] = ["role", "separator", "mcp-stdio", "", "headers", "Header-skill"];

    #[test]
    fn test_body_components_always_included() {
        for profile in TargetProfile::ALL {
            for id in BODY {
                assert!(is_included(id, profile), "{id} excluded for {profile}");
            }
        }
    }

    #[test]
    fn test_cursor_keeps_only_cursor_header() {
        for id in HEADERS {
            assert_eq!(is_included(id, TargetProfile::Cursor), id == CURSOR_HEADER);
        }
    }

    #[test]
    fn test_headerless_profiles_drop_all_headers() {
        for profile in [TargetProfile::ClaudeCode, TargetProfile::Windsurf] {
            for id in HEADERS {
                assert!(!is_included(id, profile));
            }
        }
    }

    #[test]
    fn test_default_profiles_keep_all_headers() {
        for profile in [TargetProfile::Vscode, TargetProfile::Generic] {
            for id in HEADERS {
                assert!(is_included(id, profile));
            }
        }
    }

    #[test]
    fn test_unknown_profile_name_behaves_as_default() {
        let profile = TargetProfile::from_str_lenient("sublime");
        assert!(is_included("header-skill", profile));
    }
}
