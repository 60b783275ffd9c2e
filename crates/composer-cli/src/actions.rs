//! Action type definitions for CLI commands.
//!
//! Defines the action enums used by various commands.

use clap::Subcommand;

/// Configuration management actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Validate the configuration file
    Validate,

    /// Print the configuration file path
    Path,
}
