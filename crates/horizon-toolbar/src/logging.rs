//! Logging and debugging facilities for the toolbar.
//!
//! This module provides:
//! - Target names for filtering the toolbar's `tracing` output
//! - A human-readable dump of rendered view trees
//!
//! # Tracing Integration
//!
//! The toolbar logs through the `tracing` crate. Install a subscriber in the
//! host application to see it:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_toolbar=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use horizon_toolbar::prelude::*;
//! use horizon_toolbar::logging::{TreeFormatOptions, TreeStyle, ViewTreeDebug};
//!
//! let tree = render(&ToolbarProps::new().title("Inbox"));
//! let dump = ViewTreeDebug::with_options(TreeFormatOptions {
//!     style: TreeStyle::Ascii,
//!     ..Default::default()
//! })
//! .format(&tree);
//! assert!(dump.contains("Text \"Inbox\""));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::widget::{ViewNode, ViewTree};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem. The
/// resolver, theme and configuration targets belong to the style crate.
pub mod targets {
    pub use horizon_toolbar_style::logging::targets::{CONFIG, RESOLVER, THEME};

    /// Render pipeline target.
    pub const RENDER: &str = "horizon_toolbar::render";
    /// Press dispatch target.
    pub const PRESS: &str = "horizon_toolbar::press";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Indentation only.
    Compact,
}

/// Configuration for view tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show resolved colors on buttons and text.
    pub show_colors: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level, after the branch character.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_colors: false,
            max_depth: None,
            indent_size: 3,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_colors: true,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing rendered toolbars.
#[derive(Debug, Clone, Default)]
pub struct ViewTreeDebug {
    options: TreeFormatOptions,
}

impl ViewTreeDebug {
    /// Create a debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a rendered tree.
    pub fn format(&self, tree: &ViewTree) -> String {
        self.format_node(tree.root())
    }

    /// Format a subtree starting from any node.
    pub fn format_node(&self, node: &ViewNode) -> String {
        let mut output = String::new();
        let mut ancestors = Vec::new();
        self.format_into(node, &mut ancestors, true, &mut output);
        output
    }

    fn format_into(
        &self,
        node: &ViewNode,
        ancestors: &mut Vec<bool>,
        is_last: bool,
        output: &mut String,
    ) {
        let depth = ancestors.len();
        if let Some(max) = self.options.max_depth {
            if depth > max {
                return;
            }
        }

        output.push_str(&self.build_prefix(ancestors, is_last));
        self.describe(node, output);
        output.push('\n');

        let children = node.children();
        if depth > 0 {
            ancestors.push(is_last);
        } else {
            // The root has no connector, so its children need no extra column.
            ancestors.push(true);
        }
        for (i, child) in children.iter().enumerate() {
            self.format_into(child, ancestors, i + 1 == children.len(), output);
        }
        ancestors.pop();
    }

    /// Build the prefix string for a tree node.
    fn build_prefix(&self, ancestors: &[bool], is_last: bool) -> String {
        if ancestors.is_empty() {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
            TreeStyle::Compact => ("", "- ", "- "),
        };
        let gap = " ".repeat(self.options.indent_size);

        let mut prefix = String::new();
        // Skip the root's entry; it never draws a column.
        for &ancestor_is_last in &ancestors[1..] {
            if ancestor_is_last || branch.is_empty() {
                prefix.push_str(&" ".repeat(branch.chars().count()));
            } else {
                prefix.push_str(branch);
            }
            prefix.push_str(&gap);
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }

    fn describe(&self, node: &ViewNode, output: &mut String) {
        let show_colors = self.options.show_colors;
        match node {
            ViewNode::Container { style, .. } => {
                output.push_str("Container");
                if let Some(color) = style.background_color.as_set() {
                    write!(output, " background={color}").expect("write to String");
                }
            }
            ViewNode::Spacer { style } => {
                output.push_str("Spacer");
                if let Some(width) = style.width.as_set().and_then(|w| w.as_px()) {
                    write!(output, " width={width}").expect("write to String");
                }
            }
            ViewNode::IconButton(button) => {
                write!(output, "IconButton {:?}", button.glyph.name).expect("write to String");
                if let Some(key) = button.key {
                    write!(output, " key={key}").expect("write to String");
                }
                if let Some(badge) = &button.badge {
                    write!(output, " badge={:?}", badge.value).expect("write to String");
                }
                if button.disabled {
                    output.push_str(" disabled");
                }
                if let Some(opacity) = button.glyph.style.opacity.as_set() {
                    write!(output, " opacity={opacity:.2}").expect("write to String");
                }
                if show_colors {
                    write!(output, " color={}", button.glyph.color).expect("write to String");
                }
            }
            ViewNode::Text { content, style, .. } => {
                write!(output, "Text {content:?}").expect("write to String");
                if let Some(align) = style.text_align.as_set() {
                    write!(output, " align={align:?}").expect("write to String");
                }
                if show_colors {
                    if let Some(color) = style.color.as_set() {
                        write!(output, " color={color}").expect("write to String");
                    }
                }
            }
            ViewNode::Image { source, style } => {
                let written = match source {
                    Some(image) => write!(output, "Image({})", image.0),
                    None => write!(output, "Image(none)"),
                };
                written.expect("write to String");
                if let Some(align) = style.align_self.as_set() {
                    write!(output, " align_self={align:?}").expect("write to String");
                }
            }
        }
    }
}

impl fmt::Display for ViewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ViewTreeDebug::new().format(self))
    }
}
