//! TOML configuration for sidediff.
//!
//! Looked up at `--config`, then `$SIDEDIFF_CONFIG`, then
//! `<config dir>/sidediff/config.toml`. A missing file means defaults.

/// Parsing and validation of configuration files
pub mod parser;

use crate::diff::DEFAULT_WARN_CELLS;
use crate::render::html::{DEFAULT_TIMESTAMP_FORMAT, DEFAULT_TITLE};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "SIDEDIFF_CONFIG";

/// Configuration file path relative to the platform config directory.
pub const DEFAULT_CONFIG_PATH: &str = "sidediff/config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTML report settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Terminal output settings
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Resource warnings
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// `[render]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Page title of the HTML report
    #[serde(default = "default_title")]
    pub title: String,
    /// chrono format of the generation timestamp
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// File the HTML report is written to when `--output` is not given
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

/// `[terminal]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerminalConfig {
    /// When to colorize terminal output
    #[serde(default)]
    pub color: ColorChoice,
    /// Total output width; 0 detects the terminal width
    #[serde(default)]
    pub width: usize,
}

/// `[limits]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// LCS table cell count above which a warning is logged
    #[serde(default = "default_warn_cells")]
    pub warn_cells: usize,
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Resolves the choice against whether output goes to a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_output_file() -> PathBuf {
    PathBuf::from("diff_result.html")
}

const fn default_warn_cells() -> usize {
    DEFAULT_WARN_CELLS
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            timestamp_format: default_timestamp_format(),
            output_file: default_output_file(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            width: 0,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            warn_cells: default_warn_cells(),
        }
    }
}

impl Config {
    /// Finds the configuration file to use.
    ///
    /// Returns `None` when no explicit path is given and the platform config
    /// directory is unknown.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a file
    ///
    /// A missing file yields the defaults; nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML or unknown keys
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        parser::parse_config_file(path)
    }

    /// Loads the configuration found by [`Config::resolve_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if an existing configuration file is invalid.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("absent.toml");

        let config = Config::load(&path)?;
        assert_eq!(config, Config::default());
        assert!(!path.exists(), "loading must not create the file");

        Ok(())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render.title, DEFAULT_TITLE);
        assert_eq!(config.render.output_file, PathBuf::from("diff_result.html"));
        assert_eq!(config.terminal.color, ColorChoice::Auto);
        assert_eq!(config.terminal.width, 0);
        assert_eq!(config.limits.warn_cells, DEFAULT_WARN_CELLS);
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[render]\ntitle = \"Release notes diff\"\n\n[terminal]\ncolor = \"never\"\nwidth = 100\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.render.title, "Release notes diff");
        assert_eq!(config.terminal.color, ColorChoice::Never);
        assert_eq!(config.terminal.width, 100);
        assert_eq!(config.limits, LimitsConfig::default());
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Config::resolve_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/custom.toml")));
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
