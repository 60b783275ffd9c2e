//! Skill composer CLI.
//!
//! Assembles skill, prompt, rule, and MCP configuration documents from
//! JSON document files and the component catalog.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `render` - Assemble a document into its final text
//! - `new` - Start a document from an archetype
//! - `adapt` - Move a document onto another archetype
//! - `components` / `archetypes` - Browse the catalog
//! - `config` - Manage the configuration file
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Start a Cursor rule and render it
//! skill-composer new cursor-rule --agent-name reviewer > rule.json
//! skill-composer render rule.json --output .cursor/rules/reviewer.mdc
//!
//! # Reuse a Copilot skill as a CLAUDE.md
//! skill-composer adapt skill.json --to claude-md > claude.json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use composer_cli::commands::{self, common::Catalog, config::Config};
use composer_cli::ConfigAction;
use composer_core::cli::{ExitCode, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Skill Composer - build agent instruction files from reusable components.
#[derive(Parser, Debug)]
#[command(name = "skill-composer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for listings (json, text, pretty)
    #[arg(long = "format", global = true)]
    format: Option<String>,

    /// Configuration file (default: platform config directory)
    #[arg(long = "config", global = true, env = "SKILL_COMPOSER_CONFIG")]
    config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble a document file into its final text.
    ///
    /// # Examples
    ///
    /// ```bash
    /// skill-composer render skill.json
    /// skill-composer render skill.json --target cursor --output rule.mdc
    /// ```
    Render {
        /// Document JSON file
        document: PathBuf,

        /// Render under this profile instead of the document's own
        #[arg(short, long)]
        target: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a document from an archetype and print its JSON.
    New {
        /// Archetype id (see `archetypes`)
        archetype: String,

        /// Target profile (default: `general.default_target`, else the
        /// archetype's profile)
        #[arg(short, long)]
        target: Option<String>,

        /// Value of the `agentName` global
        #[arg(long)]
        agent_name: Option<String>,
    },

    /// Adapt a document to another archetype and print its JSON.
    ///
    /// Header sections are replaced by the archetype's header; content
    /// sections are kept as they are.
    Adapt {
        /// Document JSON file
        document: PathBuf,

        /// Target archetype id
        #[arg(long)]
        to: String,
    },

    /// List catalog components.
    Components {
        /// Only list this category (header, content, layout, mcp)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List archetypes.
    Archetypes,

    /// Manage the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Loads configuration, initializes logging, and dispatches the command.
fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = commands::config::resolve_config_path(cli.config.as_deref())?;

    // `config` must keep working when the file itself is broken.
    let config = match &cli.command {
        Commands::Config { .. } => Config::load(&config_path).unwrap_or_default(),
        _ => Config::load(&config_path)?,
    };

    init_logging(cli.verbose, &config.general.log_level)?;

    let output_format = cli
        .format
        .as_deref()
        .unwrap_or(&config.general.default_format)
        .parse::<OutputFormat>()?;

    execute_command(cli.command, &config, &config_path, output_format)
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the configured
/// level.
fn init_logging(verbose: bool, configured_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Maps a failure to an exit code using the first library error in its chain.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<composer_core::Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}

/// Executes the specified CLI command.
fn execute_command(
    command: Commands,
    config: &Config,
    config_path: &Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Render {
            document,
            target,
            output,
        } => {
            let catalog = Catalog::load(&config.catalog)?;
            commands::render::run(&catalog, &document, target.as_deref(), output.as_deref())
        }
        Commands::New {
            archetype,
            target,
            agent_name,
        } => {
            let catalog = Catalog::load(&config.catalog)?;
            let target = target.or_else(|| config.general.default_target.clone());
            commands::new::run(&catalog, &archetype, target.as_deref(), agent_name.as_deref())
        }
        Commands::Adapt { document, to } => {
            let catalog = Catalog::load(&config.catalog)?;
            commands::adapt::run(&catalog, &document, &to)
        }
        Commands::Components { category } => {
            let catalog = Catalog::load(&config.catalog)?;
            commands::components::run(&catalog, category.as_deref(), output_format)
        }
        Commands::Archetypes => {
            let catalog = Catalog::load(&config.catalog)?;
            commands::archetypes::run(&catalog, output_format)
        }
        Commands::Config { action } => commands::config::run(action, config_path, output_format),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
