//! Configuration management for blade.
//!
//! Parses `blade.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [rewrite]
//! switch = true
//! builtin = true
//! disabled = ["dd", "var_dump"]
//!
//! [[directive]]
//! name = "money"
//! template = "<?php echo(number_format({expression}, 2)); ?>"
//!
//! [[paired]]
//! open = "admin"
//! close = "endadmin"
//! open_template = "<?php if(auth()->user()->isAdmin()): ?>"
//! close_template = "<?php endif; ?>"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override whether the `@switch` passes run.
    pub switch: Option<bool>,
    /// Override whether built-in directives are registered.
    pub builtin: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blade.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rewrite pipeline configuration.
    pub rewrite: RewriteConfig,
    /// Custom simple directives (`[[directive]]` tables), in file order.
    #[serde(rename = "directive")]
    pub directives: Vec<DirectiveConfig>,
    /// Custom paired directives (`[[paired]]` tables), in file order.
    pub paired: Vec<PairedConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rewrite pipeline configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Whether the `@switch` statement passes run.
    pub switch: bool,
    /// Whether the built-in directive table is registered.
    pub builtin: bool,
    /// Built-in directive names to leave unregistered.
    pub disabled: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            switch: true,
            builtin: true,
            disabled: Vec::new(),
        }
    }
}

/// A simple directive declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectiveConfig {
    /// Tag name, without `@`.
    pub name: String,
    /// Expansion template (`{expression}`, `{unquoted}`, `{0}`..`{9}`).
    pub template: String,
}

/// A paired directive declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PairedConfig {
    /// Opening tag name.
    pub open: String,
    /// Closing tag name.
    pub close: String,
    /// Expansion template of the opening tag.
    pub open_template: String,
    /// Expansion template of the closing tag.
    pub close_template: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a tag name made of word characters only.
fn require_tag_name(name: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(name, field)?;
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::Validation(format!(
            "{field} '{name}' may only contain letters, digits and underscores"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `blade.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(switch) = settings.switch {
            self.rewrite.switch = switch;
        }
        if let Some(builtin) = settings.builtin {
            self.rewrite.builtin = builtin;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            directives = config.directives.len(),
            paired = config.paired.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Duplicate names are allowed: later declarations replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.rewrite.disabled {
            require_tag_name(name, "rewrite.disabled")?;
        }

        for directive in &self.directives {
            require_tag_name(&directive.name, "directive.name")?;
            require_non_empty(&directive.template, "directive.template")?;
        }

        for paired in &self.paired {
            require_tag_name(&paired.open, "paired.open")?;
            require_tag_name(&paired.close, "paired.close")?;
            if paired.open == paired.close {
                return Err(ConfigError::Validation(format!(
                    "paired directive '{}' must have distinct open and close names",
                    paired.open
                )));
            }
            require_non_empty(&paired.open_template, "paired.open_template")?;
            require_non_empty(&paired.close_template, "paired.close_template")?;
        }

        Ok(())
    }
}
