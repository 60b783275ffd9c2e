//! Assembly benchmarks.
//!
//! Measures end-to-end assembly across document sizes and target profiles,
//! plus the hot paths inside it (placeholder substitution, MCP blocks).
//!
//! Run with: cargo bench --package composer-engine

use composer_core::{ComponentRegistry, GlobalValues, Section, TargetProfile};
use composer_engine::{assemble, mcp, render_template};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

const BODY_COMPONENTS: [&str; 6] = [
    "role",
    "instructions",
    "rules",
    "permissions",
    "separator",
    "mcp-stdio-postgres",
];

fn create_sections(count: usize) -> Vec<Section> {
    let mut sections = vec![Section::with_values("header-skill", [("license", "MIT")])];
    sections.extend(
        BODY_COMPONENTS
            .iter()
            .cycle()
            .take(count)
            .map(|id| Section::with_values(*id, Vec::<(String, String)>::new())),
    );
    sections
}

fn bench_assemble_by_size(c: &mut Criterion) {
    let registry = ComponentRegistry::builtin().unwrap();
    let globals = GlobalValues::new()
        .with("agentName", "bench-agent")
        .with("description", "Benchmark document");

    let mut group = c.benchmark_group("assemble_by_size");
    for count in [1, 10, 50, 200] {
        let sections = create_sections(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &sections, |b, s| {
            b.iter(|| {
                assemble(
                    black_box(&registry),
                    black_box(s),
                    black_box(&globals),
                    TargetProfile::Vscode,
                )
            });
        });
    }
    group.finish();
}

fn bench_assemble_by_profile(c: &mut Criterion) {
    let registry = ComponentRegistry::builtin().unwrap();
    let globals = GlobalValues::new().with("agentName", "bench-agent");
    let sections = create_sections(50);

    let mut group = c.benchmark_group("assemble_by_profile");
    for profile in TargetProfile::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(profile), &profile, |b, p| {
            b.iter(|| assemble(&registry, black_box(&sections), &globals, *p));
        });
    }
    group.finish();
}

fn bench_render_template(c: &mut Criterion) {
    let template = "# {{agentName}}\n\nYou are {{persona}}.\n\n**Expertise:** {{expertise}}\n**Tone:** {{tone}}\n{{missing}}";
    let values: BTreeMap<String, String> = [
        ("persona", "a reviewer"),
        ("expertise", "Rust"),
        ("tone", ""),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let globals = GlobalValues::new().with("agentName", "bench-agent");

    c.bench_function("render_template", |b| {
        b.iter(|| render_template(black_box(template), black_box(&values), &globals));
    });
}

fn bench_mcp_stdio_block(c: &mut Criterion) {
    let values: BTreeMap<String, String> = [
        ("serverName", "github"),
        ("command", "npx"),
        ("args", r#"["-y", "@modelcontextprotocol/server-github"]"#),
        ("env", r#"[["GITHUB_PERSONAL_ACCESS_TOKEN", "token"], ["LOG", "debug"]]"#),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    c.bench_function("mcp_stdio_block", |b| {
        b.iter(|| mcp::stdio_block(black_box(&values)));
    });
}

criterion_group!(
    benches,
    bench_assemble_by_size,
    bench_assemble_by_profile,
    bench_render_template,
    bench_mcp_stdio_block
);
criterion_main!(benches);
