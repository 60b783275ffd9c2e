//! Config command implementation.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/skill-composer/config.toml`
//! - macOS: `~/Library/Application Support/skill-composer/config.toml`
//! - Windows: `%APPDATA%\skill-composer\config.toml`
//!
//! A missing file means defaults. `--config <path>` overrides the location.

use crate::actions::ConfigAction;
use anyhow::{Context, Result};
use composer_core::TargetProfile;
use composer_core::cli::{ExitCode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const VALID_FORMATS: [&str; 3] = ["json", "text", "pretty"];
const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_target = "cursor"
/// default_format = "pretty"
/// log_level = "info"
///
/// [catalog]
/// components = "/path/to/components.json"
/// archetypes = "/path/to/archetypes.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Catalog overrides
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Profile used by `new` when `--target` is absent; unset means the
    /// archetype's own profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_target: Option<String>,

    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Replacement catalog files. Unset entries use the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    /// Component catalog JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<PathBuf>,

    /// Archetype catalog JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetypes: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_target: None,
            default_format: OutputFormat::default().as_str().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if !VALID_FORMATS.contains(&self.general.default_format.as_str()) {
            anyhow::bail!(
                "invalid default_format '{}', must be one of: {}",
                self.general.default_format,
                VALID_FORMATS.join(", ")
            );
        }

        if !VALID_LEVELS.contains(&self.general.log_level.as_str()) {
            anyhow::bail!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                VALID_LEVELS.join(", ")
            );
        }

        if let Some(target) = &self.general.default_target {
            target
                .parse::<TargetProfile>()
                .context("invalid default_target")?;
        }

        Ok(())
    }

    /// Configured profile for new documents, if any.
    #[must_use]
    pub fn default_target(&self) -> Option<TargetProfile> {
        self.general
            .default_target
            .as_deref()
            .map(TargetProfile::from_str_lenient)
    }

    /// Loads and validates a config file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;

        Ok(config)
    }

    /// Validates and writes the config, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, serialization, or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        let toml_str = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, toml_str).context("failed to write config file")?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

/// Returns the platform config path for `skill-composer`.
///
/// # Errors
///
/// Returns an error if the platform has no config directory.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("skill-composer").join("config.toml"))
}

/// Returns `explicit` if given, else [`default_config_path`].
///
/// # Errors
///
/// Returns an error if no explicit path is given and the platform has no
/// config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(default_config_path, |p| Ok(p.to_path_buf()))
}

/// Result of `config init`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a file was written
    pub created: bool,
    /// Status message
    pub message: String,
    /// Config file path
    pub path: String,
}

/// Result of `config validate`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidateResult {
    /// Whether the configuration is valid
    pub valid: bool,
    /// Config file path
    pub path: String,
    /// Whether the file exists (defaults are used otherwise)
    pub exists: bool,
    /// Validation error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Writes a default config unless one exists and `force` is false.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init_config(path: &Path, force: bool) -> Result<InitResult> {
    let display = path.display().to_string();

    if path.exists() && !force {
        return Ok(InitResult {
            created: false,
            message: "configuration file already exists (use --force to overwrite)".to_string(),
            path: display,
        });
    }

    Config::default().save(path)?;
    Ok(InitResult {
        created: true,
        message: "configuration file created with default values".to_string(),
        path: display,
    })
}

/// Checks the config file at `path` without failing on invalid content.
#[must_use]
pub fn validate_config(path: &Path) -> ValidateResult {
    let outcome = Config::load(path);
    ValidateResult {
        valid: outcome.is_ok(),
        path: path.display().to_string(),
        exists: path.exists(),
        error: outcome.err().map(|e| format!("{e:#}")),
    }
}

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be written or formatted.
pub fn run(action: ConfigAction, path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    info!(?action, path = %path.display(), "config command");

    match action {
        ConfigAction::Init { force } => {
            let result = init_config(path, force)?;
            print_formatted(&result, output_format)?;
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Show => {
            let config = Config::load(path)?;
            print_formatted(&config, output_format)?;
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Validate => {
            let result = validate_config(path);
            print_formatted(&result, output_format)?;
            Ok(if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::INVALID_INPUT
            })
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_formatted<T: Serialize>(data: &T, output_format: OutputFormat) -> Result<()> {
    let formatted = crate::formatters::format_output(data, output_format)
        .context("failed to format config output")?;
    println!("{formatted}");
    Ok(())
}
