//! Configuration management.
//!
//! Parses `rst.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use rst_parser::UnknownDirectivePolicy;
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rst.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub(crate) struct CliSettings {
    /// Override the initial header level.
    pub initial_header_level: Option<usize>,
    /// Override the unknown-directive policy.
    pub unknown_directives: Option<DirectivePolicy>,
    /// Override standalone page output.
    pub standalone: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct RenderConfig {
    /// Heading level a level-1 title renders as (1-6).
    pub initial_header_level: usize,
    /// What to do with directives no handler consumes.
    pub unknown_directives: DirectivePolicy,
    /// Wrap rendered HTML in a minimal standalone page.
    pub standalone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_header_level: 1,
            unknown_directives: DirectivePolicy::default(),
            standalone: false,
        }
    }
}

/// Unknown-directive policy as named in config files and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DirectivePolicy {
    /// Discard silently.
    Drop,
    /// Discard with a warning.
    #[default]
    Warn,
    /// Keep the directive data as a paragraph, with a warning.
    Paragraph,
}

impl From<DirectivePolicy> for UnknownDirectivePolicy {
    fn from(policy: DirectivePolicy) -> Self {
        match policy {
            DirectivePolicy::Drop => UnknownDirectivePolicy::Drop,
            DirectivePolicy::Warn => UnknownDirectivePolicy::Warn,
            DirectivePolicy::Paragraph => UnknownDirectivePolicy::Paragraph,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is given, loads that file. Otherwise, searches for
    /// `rst.toml` in the current directory and parents, falling back to
    /// defaults when none exists.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or the resulting configuration is invalid.
    pub(crate) fn load(
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
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(level) = settings.initial_header_level {
            self.render.initial_header_level = level;
        }
        if let Some(policy) = settings.unknown_directives {
            self.render.unknown_directives = policy;
        }
        if let Some(standalone) = settings.standalone {
            self.render.standalone = standalone;
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
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any value is out of range.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=6).contains(&self.render.initial_header_level) {
            return Err(ConfigError::Validation(format!(
                "render.initial_header_level must be between 1 and 6, got {}",
                self.render.initial_header_level
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
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
