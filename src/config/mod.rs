//! Configuration system for textquill.
//!
//! This module provides the configuration structure for textquill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and can be overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use textquill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.tab_width, 4);
//!
//! let custom = Config {
//!     theme: "gruvbox-dark".to_string(),
//!     show_line_numbers: false,
//!     ..Config::default()
//! };
//! assert!(!custom.show_line_numbers);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the textquill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_line_numbers` - Display line numbers in the editor (default: true)
/// * `tab_width` - Display width of a tab character (default: 4)
/// * `create_backup` - Create .bak files before saving (default: false)
/// * `start_in_insert_mode` - Begin a session in Insert mode (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display line numbers in the editor
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Display width of a tab character
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Begin a session in Insert mode
    #[serde(default = "default_start_in_insert_mode")]
    pub start_in_insert_mode: bool,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_show_line_numbers() -> bool {
    true
}

fn default_tab_width() -> usize {
    4
}

fn default_start_in_insert_mode() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
            tab_width: default_tab_width(),
            create_backup: false,
            start_in_insert_mode: default_start_in_insert_mode(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/textquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("textquill");
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

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), "could not read config: {}", e);
                Self::default()
            }
        }
    }

    /// Parses TOML, falling back to defaults when it is malformed.
    pub fn from_toml(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!("invalid config, using defaults: {}", e);
            Self::default()
        })
    }
}
