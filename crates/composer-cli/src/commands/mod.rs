//! Command implementations for the skill composer CLI.
//!
//! Each module exposes the operation as a plain function returning data,
//! plus a `run` entry point that prints the result and returns an exit code.

pub mod adapt;
pub mod archetypes;
pub mod common;
pub mod completions;
pub mod components;
pub mod config;
pub mod new;
pub mod render;
