//! Core types, catalog, and errors for skill document composition.
//!
//! This crate provides the foundational types shared by the synthesis
//! engine and the command line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`ComponentId`, `SectionId`, `TargetProfile`)
//! - The component and section data model
//! - Editing-session state (`Document`) with section lifecycle operations
//! - Immutable catalogs (`ComponentRegistry`, `ArchetypeCatalog`)
//! - Error hierarchy with contextual information
//! - CLI-facing strong types (`cli::OutputFormat`, `cli::ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod document;
mod error;
mod registry;
mod types;

pub mod cli;

pub use document::Document;
pub use error::{Error, Result};
pub use registry::{Archetype, ArchetypeCatalog, ComponentRegistry};
pub use types::{
    Component, ComponentId, Field, FieldType, GlobalValues, McpClient, Section, SectionId,
    TargetProfile,
};
