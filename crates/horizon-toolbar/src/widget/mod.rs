//! The toolbar widget.
//!
//! - [`props`]: typed input properties
//! - [`toolbar`]: the render pipeline
//! - [`view`]: the output view tree

mod callback;
pub mod props;
pub mod toolbar;
pub mod view;

pub use callback::PressHandler;
pub use props::{Badge, ImageRef, Title, ToolbarAction, ToolbarIcon, ToolbarProps};
pub use toolbar::{Toolbar, render, render_with};
pub use view::{IconButton, IconGlyph, PressTarget, SlotKind, ViewNode, ViewTree};

static_assertions::assert_impl_all!(ToolbarProps: Send, Sync);
static_assertions::assert_impl_all!(ViewTree: Send, Sync);
static_assertions::assert_impl_all!(Toolbar: Send, Sync);
