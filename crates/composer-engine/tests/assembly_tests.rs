//! End-to-end assembly tests against the built-in catalog.

use composer_core::{
    ArchetypeCatalog, ComponentRegistry, Document, GlobalValues, Section, TargetProfile,
};
use composer_engine::{Engine, adapt, assemble, is_header_class, is_included};
use std::sync::Arc;

fn registry() -> ComponentRegistry {
    ComponentRegistry::builtin().unwrap()
}

fn no_values(component: &str) -> Section {
    Section::with_values(component, Vec::<(String, String)>::new())
}

#[test]
fn test_single_line_separator_under_vscode() {
    let sections = vec![Section::with_values("separator", [("style", "line")])];
    let out = assemble(&registry(), &sections, &GlobalValues::new(), TargetProfile::Vscode);
    assert_eq!(out, "---");
}

#[test]
fn test_empty_cursor_document_gets_header() {
    let globals = GlobalValues::new().with("agentName", "my-agent");
    let out = assemble(&registry(), &[], &globals, TargetProfile::Cursor);
    assert_eq!(
        out,
        "---\ndescription: my-agent\nglobs: \nalwaysApply: true\n---"
    );
}

#[test]
fn test_postgres_preset_block() {
    let sections = vec![Section::with_values(
        "mcp-stdio-postgres",
        [
            ("serverName", "postgres"),
            ("command", "npx"),
            ("args", r#"["-y","pkg"]"#),
            ("env", "[]"),
        ],
    )];
    let out = assemble(&registry(), &sections, &GlobalValues::new(), TargetProfile::Generic);

    let expected = "```json\n\
{\n  \"mcpServers\": {\n    \"postgres\": {\n      \"command\": \"npx\",\n      \
\"args\": [\n        \"-y\",\n        \"pkg\"\n      ]\n    }\n  }\n}\n\
```";
    assert_eq!(out, expected);
}

#[test]
fn test_reserved_env_keys_never_serialized() {
    let sections = vec![Section::with_values(
        "mcp-stdio",
        [
            ("serverName", "svc"),
            ("command", "run"),
            ("args", "[]"),
            ("env", r#"[["__proto__","x"],["constructor","y"],["TOKEN","t"]]"#),
        ],
    )];
    let out = assemble(&registry(), &sections, &GlobalValues::new(), TargetProfile::Generic);
    assert!(!out.contains("__proto__"));
    assert!(!out.contains("constructor"));
    assert!(out.contains("\"TOKEN\": \"t\""));
}

#[test]
fn test_github_preset_defaults() {
    let out = assemble(
        &registry(),
        &[no_values("mcp-stdio-github")],
        &GlobalValues::new(),
        TargetProfile::Generic,
    );
    assert!(out.contains("\"github\""));
    assert!(out.contains("\"GITHUB_PERSONAL_ACCESS_TOKEN\": \"<your-token>\""));
}

#[test]
fn test_mcp_target_then_server() {
    let sections = vec![
        Section::with_values("mcp-target", [("client", "cursor")]),
        no_values("mcp-url"),
    ];
    let out = assemble(&registry(), &sections, &GlobalValues::new(), TargetProfile::Generic);
    let (header, block) = out.split_once("\n\n```json").unwrap();
    assert!(header.contains(".cursor/mcp.json"));
    assert!(block.contains("\"url\": \"https://example.com/mcp\""));
}

#[test]
fn test_blank_denied_label_elided() {
    let sections = vec![Section::with_values(
        "permissions",
        [("allowed", "read"), ("denied", "")],
    )];
    let out = assemble(&registry(), &sections, &GlobalValues::new(), TargetProfile::Vscode);
    assert!(out.contains("**Allowed:** read"));
    assert!(!out.contains("Denied"));
}

#[test]
fn test_cursor_profile_drops_foreign_headers() {
    let globals = GlobalValues::new()
        .with("agentName", "reviewer")
        .with("description", "Reviews pull requests");
    let sections = vec![
        no_values("header-skill"),
        no_values("header-agent"),
        Section::with_values("role", [("persona", "a careful reviewer")]),
    ];
    let out = assemble(&registry(), &sections, &globals, TargetProfile::Cursor);

    assert!(out.starts_with(
        "---\ndescription: Reviews pull requests\nglobs: \nalwaysApply: true\n---\n\n# reviewer"
    ));
    assert!(!out.contains("name: reviewer"));
    assert_eq!(out.matches("alwaysApply").count(), 1);
}

#[test]
fn test_unresolved_placeholders_survive() {
    let sections = vec![Section::with_values(
        "notes",
        [("text", "Ask {{owner}} before merging")],
    )];
    let out = assemble(&registry(), &sections, &GlobalValues::new(), TargetProfile::Generic);
    assert!(out.contains("{{owner}}"));
}

#[test]
fn test_assembly_is_deterministic() {
    let doc = Document::from_json(
        r#"{
            "target": "vscode",
            "globals": {"agentName": "bot", "description": "A bot"},
            "sections": [
                {"id": "h", "componentId": "header-skill"},
                {"id": "r", "componentId": "role"},
                {"id": "s", "componentId": "separator", "values": {"style": "dots"}},
                {"id": "m", "componentId": "mcp-stdio-filesystem"}
            ]
        }"#,
    )
    .unwrap();
    let engine = Engine::new(Arc::new(registry()));

    let first = engine.assemble_document(&doc);
    for _ in 0..10 {
        assert_eq!(engine.assemble_document(&doc), first);
    }
}

#[test]
fn test_inclusion_is_total_over_catalog() {
    let registry = registry();
    for profile in TargetProfile::ALL {
        for component in registry.iter() {
            let id = component.id.as_str();
            let included = is_included(id, profile);
            if !is_header_class(id) {
                assert!(included, "{id} dropped under {profile}");
            }
        }
    }
}

#[test]
fn test_adapt_builtin_skill_to_cursor_rule() {
    let catalog = ArchetypeCatalog::builtin().unwrap();
    let skill = catalog.default_sections("copilot-skill").unwrap();
    let cursor = catalog.get("cursor-rule").unwrap();

    let adapted = adapt(skill, Some(cursor));

    assert_eq!(adapted[0].component_id.as_str(), "header-cursor");
    assert_ne!(adapted[0].id, cursor.sections[0].id);
    assert!(adapted[1..].iter().all(|s| !is_header_class(s.component_id.as_str())));
    assert_eq!(adapted.len(), skill.len());
}

#[test]
fn test_adapt_to_headerless_archetype() {
    let catalog = ArchetypeCatalog::builtin().unwrap();
    let skill = catalog.default_sections("copilot-skill").unwrap();
    let claude = catalog.get("claude-md").unwrap();

    let adapted = adapt(skill, Some(claude));
    assert_eq!(adapted.len(), skill.len() - 1);
    assert_eq!(adapted.as_slice(), &skill[1..]);
}

#[test]
fn test_builtin_archetypes_render_under_own_target() {
    let catalog = ArchetypeCatalog::builtin().unwrap();
    let engine = Engine::new(Arc::new(registry()));
    let globals = GlobalValues::new().with("agentName", "bot");

    for archetype in catalog.iter() {
        let out = engine.assemble(&archetype.sections, &globals, archetype.target);
        assert!(!out.is_empty(), "archetype {} rendered empty", archetype.id);
    }
}
