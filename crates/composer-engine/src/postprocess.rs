//! Structural post-processors.
//!
//! Some components compute their output instead of rendering their
//! template: separators, MCP client instructions, and MCP server JSON
//! blocks. A [`PostProcessorTable`] maps component ids (exactly, or by id
//! prefix for component families such as MCP presets) to the function
//! that produces that output from the section's resolved values.
//!
//! # Examples
//!
//! ```
//! use composer_engine::PostProcessorTable;
//! use std::collections::BTreeMap;
//!
//! let table = PostProcessorTable::builtin();
//! let separator = table.resolve("separator").unwrap();
//!
//! let mut values = BTreeMap::new();
//! values.insert("style".to_string(), "dots".to_string());
//! assert_eq!(separator(&values), "· · ·");
//!
//! assert!(table.resolve("mcp-stdio-postgres").is_some());
//! assert!(table.resolve("role").is_none());
//! ```

use crate::mcp;
use std::collections::BTreeMap;

/// Computes a section's output from its resolved field values.
pub type PostProcessFn = fn(&BTreeMap<String, String>) -> String;

/// How an entry matches component ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdPattern {
    /// Matches one id.
    Exact(String),
    /// Matches the id itself and every id starting with `<prefix>-`.
    Family(String),
}

impl IdPattern {
    /// Returns `true` if the pattern matches `component_id`.
    #[must_use]
    pub fn matches(&self, component_id: &str) -> bool {
        match self {
            Self::Exact(id) => id == component_id,
            Self::Family(base) => in_family(base, component_id),
        }
    }
}

fn in_family(base: &str, component_id: &str) -> bool {
    component_id
        .strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}

/// Lookup table from component id to post-processor.
///
/// Exact entries win over family entries; among families the longest base
/// wins.
#[derive(Debug, Clone, Default)]
pub struct PostProcessorTable {
    exact: BTreeMap<String, PostProcessFn>,
    families: Vec<(String, PostProcessFn)>,
}

impl PostProcessorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table of built-in post-processors.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with(IdPattern::Exact("separator".to_string()), separator)
            .with(IdPattern::Exact("mcp-target".to_string()), mcp::client_header)
            .with(IdPattern::Family("mcp-stdio".to_string()), mcp::stdio_block)
            .with(IdPattern::Family("mcp-url".to_string()), mcp::url_block)
    }

    /// Adds or replaces an entry.
    #[must_use]
    pub fn with(mut self, pattern: IdPattern, processor: PostProcessFn) -> Self {
        self.register(pattern, processor);
        self
    }

    /// Adds or replaces an entry in place.
    pub fn register(&mut self, pattern: IdPattern, processor: PostProcessFn) {
        match pattern {
            IdPattern::Exact(id) => {
                self.exact.insert(id, processor);
            }
            IdPattern::Family(base) => {
                self.families.retain(|(b, _)| *b != base);
                self.families.push((base, processor));
                self.families
                    .sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
            }
        }
    }

    /// Finds the post-processor for a component id, if any.
    #[must_use]
    pub fn resolve(&self, component_id: &str) -> Option<PostProcessFn> {
        self.exact.get(component_id).copied().or_else(|| {
            self.families
                .iter()
                .find(|(base, _)| in_family(base, component_id))
                .map(|(_, f)| *f)
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.families.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Separator output for the `style` field: `line`, `dots` or `blank`.
///
/// Unknown styles render as a line.
#[must_use]
pub fn separator(values: &BTreeMap<String, String>) -> String {
    match values.get("style").map(String::as_str) {
        Some("dots") => "· · ·",
        Some("blank") => "&nbsp;",
        _ => "---",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(s: &str) -> BTreeMap<String, String> {
        BTreeMap::from([("style".to_string(), s.to_string())])
    }

    #[test]
    fn test_separator_styles() {
        assert_eq!(separator(&style("line")), "---");
        assert_eq!(separator(&style("dots")), "· · ·");
        assert_eq!(separator(&style("blank")), "&nbsp;");
        assert_eq!(separator(&style("wavy")), "---");
        assert_eq!(separator(&BTreeMap::new()), "---");
    }

    #[test]
    fn test_family_matching() {
        let pattern = IdPattern::Family("mcp-stdio".to_string());
        assert!(pattern.matches("mcp-stdio"));
        assert!(pattern.matches("mcp-stdio-postgres"));
        assert!(!pattern.matches("mcp-stdiox"));
        assert!(!pattern.matches("mcp-url"));
    }

    #[test]
    fn test_builtin_resolution() {
        let table = PostProcessorTable::builtin();
        assert_eq!(table.len(), 4);
        for id in [
            "separator",
            "mcp-target",
            "mcp-stdio",
            "mcp-stdio-github",
            "mcp-url",
            "mcp-url-remote",
        ] {
            assert!(table.resolve(id).is_some(), "no post-processor for {id}");
        }
        for id in ["header-cursor", "role", "separators", "mcp"] {
            assert!(table.resolve(id).is_none(), "unexpected post-processor for {id}");
        }
    }

    #[test]
    fn test_exact_wins_over_family() {
        fn custom(_: &BTreeMap<String, String>) -> String {
            "custom".to_string()
        }
        let table = PostProcessorTable::builtin()
            .with(IdPattern::Exact("mcp-stdio-special".to_string()), custom);
        let f = table.resolve("mcp-stdio-special").unwrap();
        assert_eq!(f(&BTreeMap::new()), "custom");
    }

    #[test]
    fn test_longest_family_wins() {
        fn short(_: &BTreeMap<String, String>) -> String {
            "short".to_string()
        }
        fn long(_: &BTreeMap<String, String>) -> String {
            "long".to_string()
        }
        let table = PostProcessorTable::new()
            .with(IdPattern::Family("a".to_string()), short)
            .with(IdPattern::Family("a-b".to_string()), long);
        assert_eq!(table.resolve("a-b-c").unwrap()(&BTreeMap::new()), "long");
        assert_eq!(table.resolve("a-c").unwrap()(&BTreeMap::new()), "short");
    }

    #[test]
    fn test_register_replaces_family() {
        let mut table = PostProcessorTable::builtin();
        table.register(IdPattern::Family("mcp-url".to_string()), separator);
        assert_eq!(table.len(), 4);
    }
}
