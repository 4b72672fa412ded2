//! Style property value types.
//!
//! # Example
//!
//! ```
//! use horizon_toolbar_style::prelude::*;
//!
//! let margin: StyleValue<LengthValue> = LengthValue::px(16.0).into();
//! assert_eq!(margin.as_set().and_then(LengthValue::as_px), Some(16.0));
//!
//! let unset: StyleValue<LengthValue> = StyleValue::default();
//! assert!(!unset.is_set());
//! ```

use serde::{Deserialize, Serialize};

/// A style property value that is either set explicitly or left at the
/// host's initial value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue<T> {
    /// An explicit value.
    Set(T),
    /// Use the initial/default value.
    #[default]
    Initial,
}

impl<T> StyleValue<T> {
    /// Check if this value is explicitly set.
    pub fn is_set(&self) -> bool {
        matches!(self, StyleValue::Set(_))
    }

    /// Get the inner value if set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            StyleValue::Initial => None,
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Set(value)
    }
}

/// Length in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthValue {
    /// Absolute layout units.
    Px(f32),
    /// Zero length.
    Zero,
}

impl LengthValue {
    /// Create an absolute value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// The value in layout units.
    pub fn as_px(&self) -> Option<f32> {
        match self {
            LengthValue::Px(v) => Some(*v),
            LengthValue::Zero => Some(0.0),
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Align to the start of the text direction (host default).
    #[default]
    Start,
    /// Align to the end of the text direction.
    End,
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center the text.
    Center,
}

/// Cross-axis alignment of a single child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignSelf {
    /// Use the parent's `align_items`.
    #[default]
    Auto,
    /// Align to the cross-axis start.
    FlexStart,
    /// Align to the cross-axis end.
    FlexEnd,
    /// Center on the cross axis.
    Center,
    /// Stretch to fill the cross axis.
    Stretch,
}

/// Cross-axis alignment of all children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    /// Align to the cross-axis start.
    FlexStart,
    /// Align to the cross-axis end.
    FlexEnd,
    /// Center on the cross axis.
    Center,
    /// Stretch to fill the cross axis.
    #[default]
    Stretch,
}

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// Children laid out top to bottom.
    #[default]
    Column,
    /// Children laid out in reading order along a row.
    Row,
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Positioned by the parent's flow.
    #[default]
    Relative,
    /// Positioned by offsets against the parent.
    Absolute,
}

/// Font weight (100-900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Check if this is right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Host platform, for platform-dependent text metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple mobile.
    Ios,
    /// Android.
    Android,
    /// Anything else.
    Other,
}

impl Platform {
    /// The platform this crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
