//! Toolbar configuration files.
//!
//! The data-only part of a toolbar's props can be kept in a TOML or JSON
//! document and loaded at startup. Press handlers, titles, and actions stay
//! in code.
//!
//! ```toml
//! theme = "light"
//! primary = "paperTeal"
//! elevation = 2.0
//! direction = "rtl"
//!
//! [overrides]
//! title_color = "#333333"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorToken;
use crate::logging::targets;
use crate::palette::DEFAULT_PRIMARY;
use crate::theme::{ColorOverrides, ThemeName};
use crate::types::{Direction, Platform};
use crate::{Error, Result};

/// Default shadow depth of a toolbar.
pub const DEFAULT_ELEVATION: f32 = 4.0;

/// Serializable toolbar settings. Missing keys take the component defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolbarConfig {
    /// Theme variant.
    pub theme: ThemeName,
    /// Palette token for the dark-theme surface.
    pub primary: ColorToken,
    /// Shadow depth hint.
    pub elevation: f32,
    /// Reading direction.
    pub direction: Direction,
    /// Host platform.
    pub platform: Platform,
    /// Per-slot color overrides.
    pub overrides: Option<ColorOverrides>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            primary: ColorToken::from(DEFAULT_PRIMARY),
            elevation: DEFAULT_ELEVATION,
            direction: Direction::default(),
            platform: Platform::default(),
            overrides: None,
        }
    }
}

impl ToolbarConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::config(err.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|err| Error::config(err.to_string()))
    }

    /// Load from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            other => {
                return Err(Error::config(format!(
                    "unsupported configuration format {:?} for '{}'",
                    other.unwrap_or(""),
                    path.display()
                )));
            }
        };

        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            theme = %config.theme,
            "loaded toolbar configuration"
        );
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| Error::config(err.to_string()))
    }
}
