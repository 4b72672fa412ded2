//! Style properties definition.

use crate::color::Color;
use crate::types::{
    AlignItems, AlignSelf, FlexDirection, FontWeight, LengthValue, Position, StyleValue,
    TextAlign,
};

/// Style map attached to a view node.
///
/// Only properties that are explicitly set take part in a merge, so a
/// caller-supplied override can be layered over computed defaults without
/// clobbering anything it does not mention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    // === Positioning ===
    /// Positioning scheme.
    pub position: StyleValue<Position>,
    /// Top offset.
    pub top: StyleValue<LengthValue>,
    /// Right offset.
    pub right: StyleValue<LengthValue>,
    /// Bottom offset.
    pub bottom: StyleValue<LengthValue>,
    /// Left offset.
    pub left: StyleValue<LengthValue>,

    // === Size ===
    /// Explicit width.
    pub width: StyleValue<LengthValue>,
    /// Explicit height.
    pub height: StyleValue<LengthValue>,

    // === Flex ===
    /// Flex grow factor.
    pub flex: StyleValue<f32>,
    /// Main axis of a container.
    pub flex_direction: StyleValue<FlexDirection>,
    /// Cross-axis alignment of children.
    pub align_items: StyleValue<AlignItems>,
    /// Cross-axis alignment of this node.
    pub align_self: StyleValue<AlignSelf>,

    // === Box Model ===
    /// Top margin.
    pub margin_top: StyleValue<LengthValue>,
    /// Right margin.
    pub margin_right: StyleValue<LengthValue>,
    /// Bottom margin.
    pub margin_bottom: StyleValue<LengthValue>,
    /// Left margin.
    pub margin_left: StyleValue<LengthValue>,

    // === Paint ===
    /// Background color.
    pub background_color: StyleValue<Color>,
    /// Foreground (text or glyph) color.
    pub color: StyleValue<Color>,
    /// Opacity (0.0-1.0).
    pub opacity: StyleValue<f32>,
    /// Shadow depth hint.
    pub elevation: StyleValue<f32>,

    // === Typography ===
    /// Font size.
    pub font_size: StyleValue<f32>,
    /// Font weight.
    pub font_weight: StyleValue<FontWeight>,
    /// Line height in layout units.
    pub line_height: StyleValue<f32>,
    /// Text alignment.
    pub text_align: StyleValue<TextAlign>,
}

impl StyleProperties {
    /// Create new default style properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another set of properties into this one.
    ///
    /// Only explicitly set values from `other` will be copied.
    pub fn merge(&mut self, other: &StyleProperties) {
        macro_rules! merge_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if other.$prop.is_set() {
                        self.$prop = other.$prop.clone();
                    }
                )+
            };
        }

        merge_if_set!(
            // Positioning
            position, top, right, bottom, left,
            // Size
            width, height,
            // Flex
            flex, flex_direction, align_items, align_self,
            // Box model
            margin_top, margin_right, margin_bottom, margin_left,
            // Paint
            background_color, color, opacity, elevation,
            // Typography
            font_size, font_weight, line_height, text_align,
        );
    }

    /// Merge `other` over `self` and return the result.
    pub fn merged(mut self, other: Option<&StyleProperties>) -> Self {
        if let Some(other) = other {
            self.merge(other);
        }
        self
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
