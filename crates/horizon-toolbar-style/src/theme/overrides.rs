//! Per-slot color overrides and the resolved style map.

use serde::{Deserialize, Serialize};

use super::{ThemeColorSet, ThemeName};
use crate::color::{Color, ColorToken};
use crate::logging::targets;
use crate::resolver::ColorResolver;

/// The four independently colorable parts of a toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// Toolbar surface.
    Background,
    /// Title text.
    Title,
    /// Left (navigation) icon.
    LeftIcon,
    /// Right (action) icons.
    RightIcon,
}

impl ColorSlot {
    /// All slots in resolution order.
    pub const ALL: [ColorSlot; 4] = [
        ColorSlot::Background,
        ColorSlot::Title,
        ColorSlot::LeftIcon,
        ColorSlot::RightIcon,
    ];
}

/// Caller-supplied colors that replace theme defaults slot by slot.
///
/// Empty tokens count as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub background_color: Option<ColorToken>,
    pub title_color: Option<ColorToken>,
    pub left_icon_color: Option<ColorToken>,
    pub right_icon_color: Option<ColorToken>,
}

impl ColorOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the surface color.
    pub fn background_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.background_color = Some(token.into());
        self
    }

    /// Override the title color.
    pub fn title_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.title_color = Some(token.into());
        self
    }

    /// Override the left icon color.
    pub fn left_icon_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.left_icon_color = Some(token.into());
        self
    }

    /// Override the action icon color.
    pub fn right_icon_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.right_icon_color = Some(token.into());
        self
    }

    /// The effective override for a slot, if any.
    pub fn get(&self, slot: ColorSlot) -> Option<&ColorToken> {
        let token = match slot {
            ColorSlot::Background => self.background_color.as_ref(),
            ColorSlot::Title => self.title_color.as_ref(),
            ColorSlot::LeftIcon => self.left_icon_color.as_ref(),
            ColorSlot::RightIcon => self.right_icon_color.as_ref(),
        };
        token.filter(|t| !t.is_empty())
    }

    /// Check if no slot is overridden.
    pub fn is_empty(&self) -> bool {
        ColorSlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }
}

/// Final colors for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyleMap {
    /// Toolbar surface color.
    pub background_color: Color,
    /// Title text color.
    pub color: Color,
    /// Left icon color.
    pub left_icon_color: Color,
    /// Action icon color.
    pub right_icon_color: Color,
}

impl ResolvedStyleMap {
    /// Resolve every slot: a set override wins, otherwise the theme default.
    pub fn resolve(
        theme: ThemeName,
        primary: &ColorToken,
        overrides: Option<&ColorOverrides>,
        resolver: &dyn ColorResolver,
    ) -> Self {
        let defaults = ThemeColorSet::for_theme(theme, primary.as_str(), resolver);
        let pick = |slot: ColorSlot, default: Color| match overrides.and_then(|o| o.get(slot)) {
            Some(token) => {
                tracing::trace!(
                    target: targets::THEME,
                    ?slot,
                    token = token.as_str(),
                    "color override applied"
                );
                resolver.resolve(token.as_str())
            }
            None => default,
        };

        Self {
            background_color: pick(ColorSlot::Background, defaults.background_color),
            color: pick(ColorSlot::Title, defaults.color),
            left_icon_color: pick(ColorSlot::LeftIcon, defaults.left_icon_color),
            right_icon_color: pick(ColorSlot::RightIcon, defaults.right_icon_color),
        }
    }

    /// The color for a slot.
    pub fn get(&self, slot: ColorSlot) -> Color {
        match slot {
            ColorSlot::Background => self.background_color,
            ColorSlot::Title => self.color,
            ColorSlot::LeftIcon => self.left_icon_color,
            ColorSlot::RightIcon => self.right_icon_color,
        }
    }
}
