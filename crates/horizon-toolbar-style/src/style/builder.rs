//! Type-safe style builder DSL.

use super::StyleProperties;
use crate::color::Color;
use crate::types::{
    AlignItems, AlignSelf, FlexDirection, FontWeight, LengthValue, Position, StyleValue,
    TextAlign,
};

/// Builder for creating style properties with a fluent API.
///
/// # Example
///
/// ```
/// use horizon_toolbar_style::prelude::*;
///
/// let style = Style::new()
///     .height(LengthValue::px(56.0))
///     .flex_direction(FlexDirection::Row)
///     .background_color(Color::WHITE)
///     .build();
///
/// assert!(style.height.is_set());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    props: StyleProperties,
}

impl Style {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final StyleProperties.
    pub fn build(self) -> StyleProperties {
        self.props
    }

    // === Positioning ===

    /// Set the positioning scheme.
    pub fn position(mut self, value: Position) -> Self {
        self.props.position = StyleValue::Set(value);
        self
    }

    /// Set the top offset.
    pub fn top(mut self, value: LengthValue) -> Self {
        self.props.top = StyleValue::Set(value);
        self
    }

    /// Set the right offset.
    pub fn right(mut self, value: LengthValue) -> Self {
        self.props.right = StyleValue::Set(value);
        self
    }

    /// Set the bottom offset.
    pub fn bottom(mut self, value: LengthValue) -> Self {
        self.props.bottom = StyleValue::Set(value);
        self
    }

    /// Set the left offset.
    pub fn left(mut self, value: LengthValue) -> Self {
        self.props.left = StyleValue::Set(value);
        self
    }

    // === Size ===

    /// Set width.
    pub fn width(mut self, value: LengthValue) -> Self {
        self.props.width = StyleValue::Set(value);
        self
    }

    /// Set height.
    pub fn height(mut self, value: LengthValue) -> Self {
        self.props.height = StyleValue::Set(value);
        self
    }

    // === Flex ===

    /// Set the flex grow factor.
    pub fn flex(mut self, value: f32) -> Self {
        self.props.flex = StyleValue::Set(value);
        self
    }

    /// Set the container's main axis.
    pub fn flex_direction(mut self, value: FlexDirection) -> Self {
        self.props.flex_direction = StyleValue::Set(value);
        self
    }

    /// Set cross-axis alignment of children.
    pub fn align_items(mut self, value: AlignItems) -> Self {
        self.props.align_items = StyleValue::Set(value);
        self
    }

    /// Set cross-axis alignment of this node.
    pub fn align_self(mut self, value: AlignSelf) -> Self {
        self.props.align_self = StyleValue::Set(value);
        self
    }

    // === Box Model ===

    /// Set the same margin on all sides.
    pub fn margin_all(mut self, value: LengthValue) -> Self {
        self.props.margin_top = StyleValue::Set(value);
        self.props.margin_right = StyleValue::Set(value);
        self.props.margin_bottom = StyleValue::Set(value);
        self.props.margin_left = StyleValue::Set(value);
        self
    }

    /// Set margin top.
    pub fn margin_top(mut self, value: LengthValue) -> Self {
        self.props.margin_top = StyleValue::Set(value);
        self
    }

    /// Set margin right.
    pub fn margin_right(mut self, value: LengthValue) -> Self {
        self.props.margin_right = StyleValue::Set(value);
        self
    }

    /// Set margin bottom.
    pub fn margin_bottom(mut self, value: LengthValue) -> Self {
        self.props.margin_bottom = StyleValue::Set(value);
        self
    }

    /// Set margin left.
    pub fn margin_left(mut self, value: LengthValue) -> Self {
        self.props.margin_left = StyleValue::Set(value);
        self
    }

    // === Paint ===

    /// Set background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.props.background_color = StyleValue::Set(color);
        self
    }

    /// Set foreground color.
    pub fn color(mut self, color: Color) -> Self {
        self.props.color = StyleValue::Set(color);
        self
    }

    /// Set opacity.
    pub fn opacity(mut self, value: f32) -> Self {
        self.props.opacity = StyleValue::Set(value.clamp(0.0, 1.0));
        self
    }

    /// Set the shadow depth hint.
    pub fn elevation(mut self, value: f32) -> Self {
        self.props.elevation = StyleValue::Set(value);
        self
    }

    // === Typography ===

    /// Set font size.
    pub fn font_size(mut self, value: f32) -> Self {
        self.props.font_size = StyleValue::Set(value);
        self
    }

    /// Set font weight.
    pub fn font_weight(mut self, value: FontWeight) -> Self {
        self.props.font_weight = StyleValue::Set(value);
        self
    }

    /// Set line height.
    pub fn line_height(mut self, value: f32) -> Self {
        self.props.line_height = StyleValue::Set(value);
        self
    }

    /// Set text alignment.
    pub fn text_align(mut self, value: TextAlign) -> Self {
        self.props.text_align = StyleValue::Set(value);
        self
    }
}

impl From<Style> for StyleProperties {
    fn from(style: Style) -> Self {
        style.build()
    }
}
