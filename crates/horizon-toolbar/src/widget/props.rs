//! Toolbar input properties.
//!
//! Titles and icons are tagged unions instead of "a string or a number":
//! a [`Title`] is either text or a logo image, a [`ToolbarIcon`] is either a
//! glyph name or an image reference.
//!
//! # Example
//!
//! ```
//! use horizon_toolbar::prelude::*;
//!
//! let props = ToolbarProps::new()
//!     .title("Inbox")
//!     .theme(ThemeName::Dark)
//!     .primary("paperBlue")
//!     .icon(ToolbarIcon::glyph("menu"))
//!     .action(ToolbarAction::new("search"))
//!     .action(ToolbarAction::new("more-vert").disabled(true));
//!
//! assert_eq!(props.actions.len(), 2);
//! ```

use horizon_toolbar_style::config::{DEFAULT_ELEVATION, ToolbarConfig};
use horizon_toolbar_style::palette::DEFAULT_PRIMARY;
use horizon_toolbar_style::prelude::*;

use super::PressHandler;

/// Glyph shown on the left when a default icon is requested.
pub const DEFAULT_LEFT_GLYPH: &str = "menu";

/// Reference to an image asset known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub u32);

/// Toolbar title content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    /// A single line of text.
    Text(String),
    /// A logo image.
    Logo(ImageRef),
}

impl Title {
    /// Create a text title.
    pub fn text(text: impl Into<String>) -> Self {
        Title::Text(text.into())
    }

    /// Create a logo title.
    pub fn logo(image: ImageRef) -> Self {
        Title::Logo(image)
    }

    /// The text, if this is a non-empty text title.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Title::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title::text(text)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title::Text(text)
    }
}

impl From<ImageRef> for Title {
    fn from(image: ImageRef) -> Self {
        Title::Logo(image)
    }
}

/// Content of the left icon slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarIcon {
    /// A named glyph, rendered as a pressable icon.
    Glyph(String),
    /// An image asset; the slot renders as an empty placeholder.
    Image(ImageRef),
}

impl ToolbarIcon {
    /// Create a glyph icon.
    pub fn glyph(name: impl Into<String>) -> Self {
        ToolbarIcon::Glyph(name.into())
    }

    /// The glyph name, if this is a non-empty glyph.
    pub fn glyph_name(&self) -> Option<&str> {
        match self {
            ToolbarIcon::Glyph(name) if !name.trim().is_empty() => Some(name),
            _ => None,
        }
    }
}

impl Default for ToolbarIcon {
    fn default() -> Self {
        ToolbarIcon::glyph(DEFAULT_LEFT_GLYPH)
    }
}

/// Badge drawn over an action icon. Passed through to the host untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Badge {
    /// Badge text, usually a count.
    pub value: String,
    /// Badge fill color.
    pub background_color: Option<ColorToken>,
    /// Badge text color.
    pub color: Option<ColorToken>,
}

impl Badge {
    /// Create a badge with the given text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Create a numeric counter badge.
    pub fn counter(count: u32) -> Self {
        Self::new(count.to_string())
    }

    /// Set the fill color.
    pub fn background_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.background_color = Some(token.into());
        self
    }

    /// Set the text color.
    pub fn color(mut self, token: impl Into<ColorToken>) -> Self {
        self.color = Some(token.into());
        self
    }
}

/// One right-side action icon.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarAction {
    /// Glyph name.
    pub icon: String,
    /// Press callback.
    pub on_press: Option<PressHandler>,
    /// Optional badge.
    pub badge: Option<Badge>,
    /// Disabled actions are dimmed and do not respond to presses.
    pub disabled: bool,
}

impl ToolbarAction {
    /// Create an enabled action for a glyph.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            on_press: None,
            badge: None,
            disabled: false,
        }
    }

    /// Set the press callback.
    pub fn on_press(mut self, handler: impl Into<PressHandler>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Attach a badge.
    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Everything a toolbar renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Title text or logo. `None` renders an empty logo container.
    pub title: Option<Title>,
    /// Theme variant.
    pub theme: ThemeName,
    /// Palette token for the dark-theme surface.
    pub primary: ColorToken,
    /// Merged over the container style, last.
    pub style: Option<StyleProperties>,
    /// Merged over the left glyph style.
    pub left_icon_style: Option<StyleProperties>,
    /// Merged over every action glyph style.
    pub right_icon_style: Option<StyleProperties>,
    /// Style of the logo image.
    pub logo_style: Option<StyleProperties>,
    /// Shadow depth hint.
    pub elevation: f32,
    /// Per-slot color overrides.
    pub overrides: Option<ColorOverrides>,
    /// Left slot content. `None` reserves the slot's width only.
    pub icon: Option<ToolbarIcon>,
    /// Left icon press callback.
    pub on_icon_press: Option<PressHandler>,
    /// Action icons, in display order.
    pub actions: Vec<ToolbarAction>,
    /// Reading direction.
    pub direction: Direction,
    /// Host platform.
    pub platform: Platform,
}

impl Default for ToolbarProps {
    fn default() -> Self {
        Self {
            title: None,
            theme: ThemeName::default(),
            primary: ColorToken::from(DEFAULT_PRIMARY),
            style: None,
            left_icon_style: None,
            right_icon_style: None,
            logo_style: None,
            elevation: DEFAULT_ELEVATION,
            overrides: None,
            icon: None,
            on_icon_press: None,
            actions: Vec::new(),
            direction: Direction::default(),
            platform: Platform::default(),
        }
    }
}

impl ToolbarProps {
    /// Create props with the component defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the data-only fields from a loaded configuration.
    pub fn from_config(config: &ToolbarConfig) -> Self {
        Self {
            theme: config.theme,
            primary: config.primary.clone(),
            elevation: config.elevation,
            direction: config.direction,
            platform: config.platform,
            overrides: config.overrides.clone(),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    /// Set the primary color token.
    pub fn primary(mut self, token: impl Into<ColorToken>) -> Self {
        self.primary = token.into();
        self
    }

    /// Set the container style override.
    pub fn style(mut self, style: impl Into<StyleProperties>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the left glyph style override.
    pub fn left_icon_style(mut self, style: impl Into<StyleProperties>) -> Self {
        self.left_icon_style = Some(style.into());
        self
    }

    /// Set the action glyph style override.
    pub fn right_icon_style(mut self, style: impl Into<StyleProperties>) -> Self {
        self.right_icon_style = Some(style.into());
        self
    }

    /// Set the logo image style.
    pub fn logo_style(mut self, style: impl Into<StyleProperties>) -> Self {
        self.logo_style = Some(style.into());
        self
    }

    /// Set the elevation.
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the color overrides.
    pub fn overrides(mut self, overrides: ColorOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Set the left icon.
    pub fn icon(mut self, icon: ToolbarIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the left icon press callback.
    pub fn on_icon_press(mut self, handler: impl Into<PressHandler>) -> Self {
        self.on_icon_press = Some(handler.into());
        self
    }

    /// Append an action.
    pub fn action(mut self, action: ToolbarAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Replace all actions.
    pub fn actions(mut self, actions: impl IntoIterator<Item = ToolbarAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Set the reading direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the host platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let props = ToolbarProps::new();
        assert_eq!(props.theme, ThemeName::Dark);
        assert_eq!(props.primary.as_str(), "paperBlue");
        assert_eq!(props.elevation, 4.0);
        assert_eq!(props.direction, Direction::Ltr);
        assert!(props.actions.is_empty());
        assert!(props.icon.is_none());
    }

    #[test]
    fn empty_text_and_glyph_are_falsy() {
        assert_eq!(Title::text("").as_text(), None);
        assert_eq!(Title::logo(ImageRef(3)).as_text(), None);
        assert_eq!(Title::from("Inbox").as_text(), Some("Inbox"));

        assert_eq!(ToolbarIcon::glyph("").glyph_name(), None);
        assert_eq!(ToolbarIcon::Image(ImageRef(1)).glyph_name(), None);
        assert_eq!(ToolbarIcon::default().glyph_name(), Some("menu"));
    }

    #[test]
    fn from_config_copies_data_fields() {
        let config = ToolbarConfig {
            theme: ThemeName::Light,
            direction: Direction::Rtl,
            elevation: 0.0,
            overrides: Some(ColorOverrides::new().title_color("#222222")),
            ..ToolbarConfig::default()
        };
        let props = ToolbarProps::from_config(&config).title("Settings");

        assert_eq!(props.theme, ThemeName::Light);
        assert_eq!(props.direction, Direction::Rtl);
        assert_eq!(props.elevation, 0.0);
        assert_eq!(props.overrides, config.overrides);
        assert_eq!(props.title, Some(Title::text("Settings")));
    }

    #[test]
    fn action_builder() {
        let action = ToolbarAction::new("mail")
            .badge(Badge::counter(3).background_color("paperRed"))
            .disabled(true)
            .on_press(|| {});

        assert_eq!(action.badge.as_ref().map(|b| b.value.as_str()), Some("3"));
        assert!(action.disabled);
        assert!(action.on_press.is_some());
    }
}
