//! Configuration system for vincent.
//!
//! This module provides the configuration structure with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is
//! loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use vincent::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert!(config.show_cursor_position);
//!
//! // Create custom configuration
//! let custom = Config {
//!     theme: "gruvbox-dark".to_string(),
//!     ..Config::default()
//! };
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the vincent application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_cursor_position` - Show `row:col` in the status line (default: true)
/// * `log_file` - Where tracing output goes; no logging when unset
/// * `log_level` - Tracing filter used when `RUST_LOG` is unset (default: "info")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Show the cursor position at the right of the status line
    #[serde(default = "default_show_cursor_position")]
    pub show_cursor_position: bool,

    /// Log file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Default log filter, e.g. "debug" or "vincent=trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default theme name.
fn default_theme() -> String {
    crate::theme::DEFAULT_THEME.to_string()
}

fn default_show_cursor_position() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// ```
    /// use vincent::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.log_level, "info");
    /// assert!(config.log_file.is_none());
    /// ```
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_cursor_position: default_show_cursor_position(),
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/vincent/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vincent");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_default()
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration as pretty TOML to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}
