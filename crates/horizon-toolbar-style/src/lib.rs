//! Theme, palette, and style resolution for the Horizon toolbar.
//!
//! This crate owns everything color- and style-related that the toolbar
//! component needs:
//!
//! - **Colors**: an RGBA [`Color`](color::Color) and caller-facing
//!   [`ColorToken`](color::ColorToken)s
//! - **Resolution**: the [`ColorResolver`](resolver::ColorResolver) seam and a
//!   Material-palette default
//! - **Themes**: light and dark color sets, disabled opacities, and per-slot
//!   overrides
//! - **Style maps**: CSS-like property maps with explicit-only merging
//! - **Configuration**: TOML/JSON toolbar settings
//!
//! # Example
//!
//! ```
//! use horizon_toolbar_style::prelude::*;
//!
//! let resolver = PaletteResolver::new();
//! let overrides = ColorOverrides::new().background_color("#ff0000");
//!
//! let map = ResolvedStyleMap::resolve(
//!     ThemeName::Light,
//!     &ColorToken::from("paperBlue"),
//!     Some(&overrides),
//!     &resolver,
//! );
//! assert_eq!(map.background_color, Color::RED);
//! assert_eq!(map.color, ThemeColorSet::light().color);
//! ```

pub mod color;
pub mod config;
pub mod logging;
pub mod palette;
pub mod resolver;
pub mod style;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{Color, ColorToken};
    pub use crate::config::ToolbarConfig;
    pub use crate::palette::{MaterialPalette, DEFAULT_PRIMARY, PRIMARY_COLORS};
    pub use crate::resolver::{CachedResolver, ColorResolver, PaletteResolver};
    pub use crate::style::{Style, StyleProperties};
    pub use crate::theme::{
        ColorOverrides, ColorSlot, OpacityMap, ResolvedStyleMap, ThemeColorSet, ThemeName,
    };
    pub use crate::types::{
        AlignItems, AlignSelf, Direction, FlexDirection, FontWeight, LengthValue,
        Platform, Position, StyleValue, TextAlign,
    };
}
