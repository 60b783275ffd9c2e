//! Document synthesis engine for skill, prompt, rule and MCP documents.
//!
//! Turns an ordered list of sections into the final text for a target
//! integration. The pipeline is pure: the same sections, globals and
//! profile always produce byte-identical output.
//!
//! # Architecture
//!
//! - [`render`]: value resolution, placeholder substitution and blank
//!   label elision
//! - [`postprocess`]: components whose output is computed instead of
//!   templated (separators, MCP blocks)
//! - [`mcp`]: MCP server JSON and client setup instructions
//! - [`fields`]: parsing of JSON-valued free-text fields
//! - per-profile inclusion of header-class sections ([`is_included`])
//! - assembly with Cursor header synthesis ([`assemble`])
//! - archetype adaptation ([`adapt`])
//!
//! # Examples
//!
//! ```
//! use composer_core::{ComponentRegistry, GlobalValues, TargetProfile};
//! use composer_engine::assemble;
//!
//! let registry = ComponentRegistry::builtin().unwrap();
//! let globals = GlobalValues::new().with("agentName", "my-agent");
//!
//! let out = assemble(&registry, &[], &globals, TargetProfile::Cursor);
//! assert_eq!(out, "---\ndescription: my-agent\nglobs: \nalwaysApply: true\n---");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod fields;
pub mod mcp;
pub mod postprocess;
pub mod render;

mod adapt;
mod assemble;
mod engine;
mod inclusion;

pub use adapt::adapt;
pub use assemble::{
    DEFAULT_RULE_DESCRIPTION, SECTION_SEPARATOR, assemble, assemble_with, cursor_header,
    render_section,
};
pub use engine::Engine;
pub use inclusion::{CURSOR_HEADER, HEADER_PREFIX, is_header_class, is_included};
pub use postprocess::{IdPattern, PostProcessFn, PostProcessorTable};
pub use render::{render_template, resolve_values};
