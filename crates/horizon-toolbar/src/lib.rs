//! Horizon Toolbar - a themeable, direction-aware application toolbar.
//!
//! The toolbar is a pure function of its [`ToolbarProps`](widget::ToolbarProps):
//! rendering resolves theme colors through a
//! [`ColorResolver`](style::resolver::ColorResolver) and produces a
//! [`ViewTree`](widget::ViewTree) for the host to lay out and draw. Presses are
//! delivered back through the tree.
//!
//! # Example
//!
//! ```
//! use horizon_toolbar::prelude::*;
//!
//! let props = ToolbarProps::new()
//!     .title("Inbox")
//!     .icon(ToolbarIcon::glyph("menu"))
//!     .action(ToolbarAction::new("search"));
//!
//! let tree = render(&props);
//! assert_eq!(tree.title().as_text(), Some("Inbox"));
//! assert_eq!(tree.actions().count(), 1);
//! ```

pub mod logging;
pub mod widget;

/// Theme, palette, and style resolution.
pub mod style {
    pub use horizon_toolbar_style::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::widget::{
        Badge, IconButton, IconGlyph, ImageRef, PressHandler, PressTarget, SlotKind, Title,
        Toolbar, ToolbarAction, ToolbarIcon, ToolbarProps, ViewNode, ViewTree, render,
        render_with,
    };
    pub use horizon_toolbar_style::prelude::*;
}
