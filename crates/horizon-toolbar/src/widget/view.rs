//! The declarative view tree a toolbar renders into.
//!
//! The host framework turns these nodes into pixels: containers into flex
//! boxes, [`IconButton`]s into pressable glyphs, and so on. Nothing here
//! draws.

use horizon_toolbar_style::prelude::*;

use super::props::{Badge, ImageRef};
use super::PressHandler;

/// A glyph drawn by the host icon renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGlyph {
    /// Glyph name.
    pub name: String,
    /// Glyph size in layout units.
    pub size: f32,
    /// Glyph color.
    pub color: Color,
    /// Glyph style (margins, opacity).
    pub style: StyleProperties,
}

/// A pressable, optionally badged, optionally disabled glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct IconButton {
    /// Stable key among siblings (the action's list index).
    pub key: Option<usize>,
    /// Ripple/tint color.
    pub color: Color,
    /// The wrapped glyph.
    pub glyph: IconGlyph,
    /// Badge passthrough.
    pub badge: Option<Badge>,
    /// Disabled buttons ignore presses.
    pub disabled: bool,
    /// Press callback.
    pub on_press: Option<PressHandler>,
}

impl IconButton {
    /// Deliver a press. Returns whether a handler ran.
    pub fn press(&self) -> bool {
        if self.disabled {
            tracing::trace!(
                target: crate::logging::targets::PRESS,
                glyph = %self.glyph.name,
                "press suppressed on disabled button"
            );
            return false;
        }

        match &self.on_press {
            Some(handler) => {
                tracing::trace!(
                    target: crate::logging::targets::PRESS,
                    glyph = %self.glyph.name,
                    "press forwarded"
                );
                handler.call();
                true
            }
            None => false,
        }
    }
}

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    /// A box laying out its children.
    Container {
        style: StyleProperties,
        children: Vec<ViewNode>,
    },
    /// An empty box reserving space.
    Spacer { style: StyleProperties },
    /// A pressable glyph.
    IconButton(IconButton),
    /// Text, truncated to `number_of_lines` when set.
    Text {
        content: String,
        style: StyleProperties,
        number_of_lines: Option<u32>,
    },
    /// An image from a host asset reference.
    Image {
        source: Option<ImageRef>,
        style: StyleProperties,
    },
}

impl ViewNode {
    /// The node's style.
    pub fn style(&self) -> &StyleProperties {
        match self {
            ViewNode::Container { style, .. }
            | ViewNode::Spacer { style }
            | ViewNode::Text { style, .. }
            | ViewNode::Image { style, .. } => style,
            ViewNode::IconButton(button) => &button.glyph.style,
        }
    }

    /// Child nodes (empty for leaves).
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// The button, if this is an icon button.
    pub fn as_icon_button(&self) -> Option<&IconButton> {
        match self {
            ViewNode::IconButton(button) => Some(button),
            _ => None,
        }
    }

    /// The text content, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ViewNode::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Check if this is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, ViewNode::Spacer { .. })
    }
}

/// The three layout regions of a toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Navigation icon or its placeholder.
    LeftIcon,
    /// Title text or logo.
    Title,
    /// Action icons.
    Actions,
}

impl SlotKind {
    /// Slot render order for a reading direction.
    pub fn order(direction: Direction) -> [SlotKind; 3] {
        let mut order = [SlotKind::LeftIcon, SlotKind::Title, SlotKind::Actions];
        if direction.is_rtl() {
            order.reverse();
        }
        order
    }
}

/// What a host press event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The left icon.
    LeftIcon,
    /// The action at this list index.
    Action(usize),
}

/// A rendered toolbar.
///
/// The root container's children are the slots' nodes flattened in
/// [`slot_order`](Self::slot_order): one node for the left icon, one for the
/// title, and one per action.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTree {
    root: ViewNode,
    slot_order: [SlotKind; 3],
    action_count: usize,
}

impl ViewTree {
    pub(crate) fn new(root: ViewNode, slot_order: [SlotKind; 3], action_count: usize) -> Self {
        Self {
            root,
            slot_order,
            action_count,
        }
    }

    /// The root container.
    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// Consume the tree, returning the root container.
    pub fn into_root(self) -> ViewNode {
        self.root
    }

    /// Slots in render order.
    pub fn slot_order(&self) -> [SlotKind; 3] {
        self.slot_order
    }

    /// The nodes belonging to a slot.
    pub fn slot(&self, kind: SlotKind) -> &[ViewNode] {
        let children = self.root.children();
        let mut start = 0;
        for slot in self.slot_order {
            let len = self.slot_len(slot);
            if slot == kind {
                return &children[start..start + len];
            }
            start += len;
        }
        &[]
    }

    /// The left icon slot node (button or placeholder).
    pub fn left_icon(&self) -> &ViewNode {
        &self.slot(SlotKind::LeftIcon)[0]
    }

    /// The title slot node.
    pub fn title(&self) -> &ViewNode {
        &self.slot(SlotKind::Title)[0]
    }

    /// The action buttons, in list order.
    pub fn actions(&self) -> impl Iterator<Item = &IconButton> {
        self.slot(SlotKind::Actions)
            .iter()
            .filter_map(ViewNode::as_icon_button)
    }

    /// Deliver a press to a button. Returns whether a handler ran.
    pub fn press(&self, target: PressTarget) -> bool {
        let button = match target {
            PressTarget::LeftIcon => self.left_icon().as_icon_button(),
            PressTarget::Action(index) => self.actions().find(|b| b.key == Some(index)),
        };

        match button {
            Some(button) => button.press(),
            None => {
                tracing::trace!(
                    target: crate::logging::targets::PRESS,
                    ?target,
                    "press on a slot without a button"
                );
                false
            }
        }
    }

    fn slot_len(&self, kind: SlotKind) -> usize {
        match kind {
            SlotKind::LeftIcon | SlotKind::Title => 1,
            SlotKind::Actions => self.action_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(name: &str, key: Option<usize>) -> ViewNode {
        ViewNode::IconButton(IconButton {
            key,
            color: Color::WHITE,
            glyph: IconGlyph {
                name: name.to_string(),
                size: 24.0,
                color: Color::WHITE,
                style: StyleProperties::new(),
            },
            badge: None,
            disabled: false,
            on_press: None,
        })
    }

    fn text(content: &str) -> ViewNode {
        ViewNode::Text {
            content: content.to_string(),
            style: StyleProperties::new(),
            number_of_lines: Some(1),
        }
    }

    #[test]
    fn slot_order_reverses_for_rtl() {
        assert_eq!(
            SlotKind::order(Direction::Ltr),
            [SlotKind::LeftIcon, SlotKind::Title, SlotKind::Actions]
        );
        assert_eq!(
            SlotKind::order(Direction::Rtl),
            [SlotKind::Actions, SlotKind::Title, SlotKind::LeftIcon]
        );
    }

    #[test]
    fn slot_lookup_in_rtl_order() {
        let root = ViewNode::Container {
            style: StyleProperties::new(),
            children: vec![
                button("search", Some(0)),
                button("more", Some(1)),
                text("Inbox"),
                button("menu", None),
            ],
        };
        let tree = ViewTree::new(root, SlotKind::order(Direction::Rtl), 2);

        assert_eq!(tree.title().as_text(), Some("Inbox"));
        assert_eq!(tree.left_icon().as_icon_button().unwrap().glyph.name, "menu");
        let names: Vec<_> = tree.actions().map(|b| b.glyph.name.as_str()).collect();
        assert_eq!(names, ["search", "more"]);
    }

    #[test]
    fn press_without_handler_reports_false() {
        let root = ViewNode::Container {
            style: StyleProperties::new(),
            children: vec![button("menu", None), text("Inbox")],
        };
        let tree = ViewTree::new(root, SlotKind::order(Direction::Ltr), 0);
        assert!(!tree.press(PressTarget::LeftIcon));
        assert!(!tree.press(PressTarget::Action(0)));
    }
}
