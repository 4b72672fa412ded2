//! Built-in theme variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::resolver::ColorResolver;
use crate::Error;

/// Theme variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// White surface with dark content.
    Light,
    /// Primary-colored surface with light content.
    #[default]
    Dark,
}

impl ThemeName {
    /// Both theme variants.
    pub const ALL: [ThemeName; 2] = [ThemeName::Light, ThemeName::Dark];

    /// The lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            other => Err(Error::config(format!("unknown theme `{other}`"))),
        }
    }
}

/// Default colors for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColorSet {
    /// Toolbar surface color.
    pub background_color: Color,
    /// Title text color.
    pub color: Color,
    /// Left (navigation) icon color.
    pub left_icon_color: Color,
    /// Right (action) icon color.
    pub right_icon_color: Color,
}

impl ThemeColorSet {
    /// Light variant: white surface, `rgba(0,0,0,.87)` title, `rgba(0,0,0,.54)` icons.
    pub fn light() -> Self {
        Self {
            background_color: Color::WHITE,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.87),
            left_icon_color: Color::from_rgba(0.0, 0.0, 0.0, 0.54),
            right_icon_color: Color::from_rgba(0.0, 0.0, 0.0, 0.54),
        }
    }

    /// Dark variant over the given surface color, with `rgba(255,255,255,.87)` content.
    pub fn dark(background_color: Color) -> Self {
        let content = Color::from_rgba(1.0, 1.0, 1.0, 0.87);
        Self {
            background_color,
            color: content,
            left_icon_color: content,
            right_icon_color: content,
        }
    }

    /// Select the variant for a theme.
    ///
    /// Only the dark variant consults the resolver, for the primary token.
    pub fn for_theme(theme: ThemeName, primary: &str, resolver: &dyn ColorResolver) -> Self {
        match theme {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(resolver.resolve(primary)),
        }
    }
}

/// Opacity applied to disabled action icons, per theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityMap {
    /// Disabled opacity on the light theme.
    pub light: f32,
    /// Disabled opacity on the dark theme.
    pub dark: f32,
}

impl OpacityMap {
    /// The standard Material disabled opacities.
    pub const DEFAULT: OpacityMap = OpacityMap {
        light: 0.38,
        dark: 0.30,
    };

    /// Disabled-icon opacity for a theme.
    pub fn disabled_opacity(&self, theme: ThemeName) -> f32 {
        match theme {
            ThemeName::Light => self.light,
            ThemeName::Dark => self.dark,
        }
    }
}

impl Default for OpacityMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
