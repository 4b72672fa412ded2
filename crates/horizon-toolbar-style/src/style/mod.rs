//! Style property maps and the fluent builder.

mod builder;
mod properties;

pub use builder::Style;
pub use properties::StyleProperties;
