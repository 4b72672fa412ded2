//! Toolbar theme variants and color resolution.

mod builtin;
mod overrides;

pub use builtin::{OpacityMap, ThemeColorSet, ThemeName};
pub use overrides::{ColorOverrides, ColorSlot, ResolvedStyleMap};
