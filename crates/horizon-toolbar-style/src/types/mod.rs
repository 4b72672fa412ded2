//! Style value types.

mod value;

pub use value::{
    AlignItems, AlignSelf, Direction, FlexDirection, FontWeight, LengthValue,
    Platform, Position, StyleValue, TextAlign,
};
