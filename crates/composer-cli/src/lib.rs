//! Skill composer CLI library.
//!
//! Exposes the command implementations, configuration and output
//! formatters behind the `skill-composer` binary so they can be tested.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::format_push_string)]

pub mod actions;
pub mod commands;
pub mod formatters;

pub use actions::ConfigAction;
pub use commands::common::Catalog;
pub use commands::config::Config;
