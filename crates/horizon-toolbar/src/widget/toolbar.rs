//! Toolbar widget implementation.
//!
//! This module provides [`Toolbar`], a stateless application bar: a left
//! navigation icon, a title (text or logo), and a row of action icons.
//! Rendering is a pure projection of [`ToolbarProps`] into a [`ViewTree`];
//! the same props always produce the same tree.
//!
//! Slots are built once and then ordered for the reading direction, so the
//! left-to-right and right-to-left layouts share one pipeline. In
//! right-to-left mode the whole slot order is reversed, the title text is
//! right-aligned, and a logo is aligned to the end. The action list keeps
//! its own order in both directions.
//!
//! # Example
//!
//! ```
//! use horizon_toolbar::prelude::*;
//!
//! let tree = Toolbar::new(
//!     ToolbarProps::new()
//!         .title("Inbox")
//!         .icon(ToolbarIcon::glyph("menu"))
//!         .action(ToolbarAction::new("search")),
//! )
//! .render();
//!
//! assert_eq!(tree.title().as_text(), Some("Inbox"));
//! assert_eq!(tree.actions().count(), 1);
//! ```

use std::sync::Arc;

use horizon_toolbar_style::prelude::*;

use super::props::{Title, ToolbarAction, ToolbarIcon, ToolbarProps};
use super::view::{IconButton, IconGlyph, SlotKind, ViewNode, ViewTree};
use crate::logging::targets;

// ============================================================================
// Metrics
// ============================================================================

/// Toolbar height.
pub const TOOLBAR_HEIGHT: f32 = 56.0;
/// Width reserved for the left icon slot, shown or not.
pub const ICON_SLOT_WIDTH: f32 = 56.0;
/// Glyph size for the left and action icons.
pub const ICON_SIZE: f32 = 24.0;
/// Margin around each glyph.
pub const ICON_MARGIN: f32 = 16.0;
/// Leading margin of the title.
pub const TITLE_MARGIN_LEFT: f32 = 16.0;
/// Title font size.
pub const TITLE_FONT_SIZE: f32 = 20.0;
/// Title line height on iOS; other platforms use the host default.
pub const IOS_TITLE_LINE_HEIGHT: f32 = 24.0;

// ============================================================================
// Toolbar
// ============================================================================

/// A themeable application toolbar.
#[derive(Clone)]
pub struct Toolbar {
    props: ToolbarProps,
    resolver: Arc<dyn ColorResolver>,
}

impl Toolbar {
    /// Create a toolbar using the Material palette resolver.
    pub fn new(props: ToolbarProps) -> Self {
        Self {
            props,
            resolver: Arc::new(PaletteResolver::new()),
        }
    }

    /// Use a different color resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn ColorResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// The current props.
    pub fn props(&self) -> &ToolbarProps {
        &self.props
    }

    /// Replace the props. The next render reflects them.
    pub fn set_props(&mut self, props: ToolbarProps) {
        self.props = props;
    }

    /// Render the current props.
    pub fn render(&self) -> ViewTree {
        render_with(&self.props, self.resolver.as_ref())
    }
}

impl std::fmt::Debug for Toolbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolbar")
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// Render props with the Material palette resolver.
pub fn render(props: &ToolbarProps) -> ViewTree {
    render_with(props, &PaletteResolver::new())
}

/// Render props with a specific color resolver.
pub fn render_with(props: &ToolbarProps, resolver: &dyn ColorResolver) -> ViewTree {
    let _span = tracing::debug_span!(
        target: targets::RENDER,
        "toolbar_render",
        theme = %props.theme,
        direction = ?props.direction,
        actions = props.actions.len()
    )
    .entered();

    let colors = ResolvedStyleMap::resolve(
        props.theme,
        &props.primary,
        props.overrides.as_ref(),
        resolver,
    );
    let disabled_opacity = OpacityMap::DEFAULT.disabled_opacity(props.theme);

    let slot_order = SlotKind::order(props.direction);
    let children: Vec<ViewNode> = slot_order
        .iter()
        .flat_map(|kind| slot_nodes(*kind, props, &colors, disabled_opacity))
        .collect();

    tracing::debug!(
        target: targets::RENDER,
        ?slot_order,
        background = %colors.background_color,
        "toolbar rendered"
    );

    let root = ViewNode::Container {
        style: container_style(props, &colors),
        children,
    };
    ViewTree::new(root, slot_order, props.actions.len())
}

// ============================================================================
// Slots
// ============================================================================

fn slot_nodes(
    kind: SlotKind,
    props: &ToolbarProps,
    colors: &ResolvedStyleMap,
    disabled_opacity: f32,
) -> Vec<ViewNode> {
    match kind {
        SlotKind::LeftIcon => vec![left_icon_slot(props, colors)],
        SlotKind::Title => vec![title_slot(props, colors)],
        SlotKind::Actions => action_slot(props, colors, disabled_opacity),
    }
}

fn container_style(props: &ToolbarProps, colors: &ResolvedStyleMap) -> StyleProperties {
    Style::new()
        .position(Position::Absolute)
        .top(LengthValue::Zero)
        .left(LengthValue::Zero)
        .right(LengthValue::Zero)
        .height(LengthValue::px(TOOLBAR_HEIGHT))
        .flex_direction(FlexDirection::Row)
        .align_items(AlignItems::Center)
        .background_color(colors.background_color)
        .elevation(props.elevation)
        .build()
        .merged(props.style.as_ref())
}

fn left_icon_slot(props: &ToolbarProps, colors: &ResolvedStyleMap) -> ViewNode {
    let Some(name) = props.icon.as_ref().and_then(ToolbarIcon::glyph_name) else {
        tracing::trace!(target: targets::RENDER, "left icon slot: placeholder");
        return ViewNode::Spacer {
            style: Style::new().width(LengthValue::px(ICON_SLOT_WIDTH)).build(),
        };
    };

    tracing::trace!(target: targets::RENDER, glyph = name, "left icon slot: button");
    let style = Style::new()
        .margin_all(LengthValue::px(ICON_MARGIN))
        .build()
        .merged(props.left_icon_style.as_ref());

    ViewNode::IconButton(IconButton {
        key: None,
        color: colors.left_icon_color,
        glyph: IconGlyph {
            name: name.to_string(),
            size: ICON_SIZE,
            color: colors.left_icon_color,
            style,
        },
        badge: None,
        disabled: false,
        on_press: props.on_icon_press.clone(),
    })
}

fn title_slot(props: &ToolbarProps, colors: &ResolvedStyleMap) -> ViewNode {
    let rtl = props.direction.is_rtl();

    if let Some(text) = props.title.as_ref().and_then(Title::as_text) {
        let mut style = title_base_style()
            .font_size(TITLE_FONT_SIZE)
            .font_weight(FontWeight::MEDIUM)
            .color(colors.color);
        if props.platform == Platform::Ios {
            style = style.line_height(IOS_TITLE_LINE_HEIGHT);
        }
        if rtl {
            style = style.text_align(TextAlign::Right);
        }

        tracing::trace!(target: targets::RENDER, title = text, "title slot: text");
        return ViewNode::Text {
            content: text.to_string(),
            style: style.build(),
            number_of_lines: Some(1),
        };
    }

    let source = match props.title {
        Some(Title::Logo(image)) => Some(image),
        _ => None,
    };
    let mut logo_style = props.logo_style.clone().unwrap_or_default();
    if rtl {
        logo_style.merge(&Style::new().align_self(AlignSelf::FlexEnd).build());
    }

    tracing::trace!(target: targets::RENDER, ?source, "title slot: logo");
    ViewNode::Container {
        style: title_base_style().build(),
        children: vec![ViewNode::Image {
            source,
            style: logo_style,
        }],
    }
}

fn title_base_style() -> Style {
    Style::new()
        .flex(1.0)
        .margin_left(LengthValue::px(TITLE_MARGIN_LEFT))
}

fn action_slot(
    props: &ToolbarProps,
    colors: &ResolvedStyleMap,
    disabled_opacity: f32,
) -> Vec<ViewNode> {
    props
        .actions
        .iter()
        .enumerate()
        .map(|(index, action)| action_button(index, action, props, colors, disabled_opacity))
        .collect()
}

fn action_button(
    index: usize,
    action: &ToolbarAction,
    props: &ToolbarProps,
    colors: &ResolvedStyleMap,
    disabled_opacity: f32,
) -> ViewNode {
    let mut style = Style::new()
        .margin_all(LengthValue::px(ICON_MARGIN))
        .build()
        .merged(props.right_icon_style.as_ref());
    if action.disabled {
        style.merge(&Style::new().opacity(disabled_opacity).build());
    }

    ViewNode::IconButton(IconButton {
        key: Some(index),
        color: colors.right_icon_color,
        glyph: IconGlyph {
            name: action.icon.clone(),
            size: ICON_SIZE,
            color: colors.right_icon_color,
            style,
        },
        badge: action.badge.clone(),
        disabled: action.disabled,
        on_press: action.on_press.clone(),
    })
}
