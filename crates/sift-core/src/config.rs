//! Configuration types for sift.
//!
//! [`Config::load`] reads `~/.config/sift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
field_paths = ["title", "authors", "genres"]
delimiter   = "."
parallel    = false

[highlight]
style         = "format-inline-x-custom"
per_character = false
legacy        = false

[display]
fields         = ["title", "authors"]
separator      = " - "
list_separator = ", "

[ui]
placeholder_wide   = "Search books, genres, authors, etc."
placeholder_narrow = "Search"
narrow_width       = 100
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/sift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_field_paths")]
    pub field_paths: Vec<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub parallel: bool,
}

fn default_field_paths() -> Vec<String> {
    vec!["title".to_string(), "authors".to_string(), "genres".to_string()]
}
fn default_delimiter() -> String { crate::DEFAULT_DELIMITER.to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            field_paths: default_field_paths(),
            delimiter: default_delimiter(),
            parallel: false,
        }
    }
}

/// `[highlight]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub per_character: bool,
    /// Compatibility mode: raw-pattern highlighting, compounding
    /// per-character passes, and absent fields searched as `"undefined"`.
    #[serde(default)]
    pub legacy: bool,
}

fn default_style() -> String { crate::highlight::STYLE_CUSTOM.to_string() }

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            per_character: false,
            legacy: false,
        }
    }
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_display_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_list_separator")]
    pub list_separator: String,
}

fn default_display_fields() -> Vec<String> {
    vec!["title".to_string(), "authors".to_string()]
}
fn default_separator() -> String { " - ".to_string() }
fn default_list_separator() -> String { ", ".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fields: default_display_fields(),
            separator: default_separator(),
            list_separator: default_list_separator(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_placeholder_wide")]
    pub placeholder_wide: String,
    #[serde(default = "default_placeholder_narrow")]
    pub placeholder_narrow: String,
    /// Terminals at most this many columns wide use the short placeholder.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

fn default_placeholder_wide() -> String { "Search books, genres, authors, etc.".to_string() }
fn default_placeholder_narrow() -> String { "Search".to_string() }
fn default_narrow_width() -> u16 { 100 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_wide: default_placeholder_wide(),
            placeholder_narrow: default_placeholder_narrow(),
            narrow_width: default_narrow_width(),
        }
    }
}

impl UiConfig {
    /// Placeholder text for a terminal `width` columns wide.
    pub fn placeholder_for_width(&self, width: u16) -> &str {
        if width <= self.narrow_width {
            &self.placeholder_narrow
        } else {
            &self.placeholder_wide
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/sift/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> crate::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load `path` layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("sift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
