//! Human-readable dumps of a window's control tree.
//!
//! ```
//! use trellis::prelude::*;
//! use trellis::debug::{TreeFormatOptions, TreeStyle};
//!
//! let mut window = Window::new();
//! window.set_geometry(&WindowConfig::new(800, 600, 2, 2).with_title("Demo"))?;
//! let ok = window.insert(BasicControl::button().with_name("ok"));
//! window.place_control(ok, Cell::new(0, 0))?;
//!
//! let options = TreeFormatOptions::minimal().with_style(TreeStyle::Ascii);
//! let dump = window.debug_tree().with_options(options).to_string();
//! assert_eq!(dump, "Demo (1 children)\n`-- ok\n");
//! # Ok::<(), trellis::Error>(())
//! ```

use std::fmt;

use trellis_core::ControlId;

use crate::host::{GridHost, HostPrimitive};
use crate::window::Window;

/// Branch characters used when drawing the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Dashes only.
    Compact,
}

/// What to print for each control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    pub show_ids: bool,
    pub show_kinds: bool,
    pub show_geometry: bool,
    /// Deepest level printed; `None` prints everything.
    pub max_depth: Option<usize>,
    /// Spaces per nesting level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_kinds: true,
            show_geometry: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Everything, including geometry.
    pub fn detailed() -> Self {
        Self {
            show_geometry: true,
            ..Default::default()
        }
    }

    /// Names only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_kinds: false,
            show_geometry: false,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Renders the host hierarchy of a [`Window`]: its grid children, and
/// recursively the children of every group.
pub struct ControlTreeDebug<'a, P: HostPrimitive> {
    window: &'a Window<P>,
    options: TreeFormatOptions,
}

impl<'a, P: HostPrimitive> ControlTreeDebug<'a, P> {
    pub fn new(window: &'a Window<P>) -> Self {
        Self {
            window,
            options: TreeFormatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TreeFormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Write `id` and its descendants. `ancestors` holds, for each enclosing
    /// level below the window, whether that ancestor was the last child.
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: ControlId,
        is_last: bool,
        ancestors: &mut Vec<bool>,
    ) -> fmt::Result {
        let depth = ancestors.len() + 1;
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        let Some(control) = self.window.control(id) else {
            return Ok(());
        };
        let base = control.base();

        f.write_str(&self.prefix(ancestors, is_last))?;
        let name = base.name();
        f.write_str(if name.is_empty() { "(unnamed)" } else { &name })?;
        if self.options.show_ids {
            write!(f, " [{id}]")?;
        }
        if self.options.show_kinds {
            write!(f, " ({})", base.kind().name())?;
        }
        if self.options.show_geometry {
            write!(f, " @ {}", base.geometry())?;
        }
        if !base.is_visible() {
            f.write_str(" hidden")?;
        }
        if !base.is_enabled() {
            f.write_str(" disabled")?;
        }
        f.write_str("\n")?;

        if let Some(group) = control.as_group() {
            let children = group.children();
            ancestors.push(is_last);
            for (index, child) in children.iter().enumerate() {
                self.write_node(f, *child, index + 1 == children.len(), ancestors)?;
            }
            ancestors.pop();
        }
        Ok(())
    }

    fn prefix(&self, ancestors: &[bool], is_last: bool) -> String {
        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };
        let gap = " ".repeat(self.options.indent_size + 1);

        let mut prefix = String::new();
        for &ancestor_last in ancestors {
            if ancestor_last {
                prefix.push_str(&" ".repeat(branch.chars().count()));
            } else {
                prefix.push_str(branch);
            }
            prefix.push_str(&gap);
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

impl<P: HostPrimitive> fmt::Display for ControlTreeDebug<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.window.title();
        let children = self.window.children();
        writeln!(
            f,
            "{} ({} children)",
            if title.is_empty() { "(untitled)" } else { title },
            children.len()
        )?;
        let mut ancestors = Vec::new();
        for (index, child) in children.iter().enumerate() {
            self.write_node(f, *child, index + 1 == children.len(), &mut ancestors)?;
        }
        Ok(())
    }
}

impl<P: HostPrimitive> Window<P> {
    /// A printable view of this window's control tree.
    pub fn debug_tree(&self) -> ControlTreeDebug<'_, P> {
        ControlTreeDebug::new(self)
    }
}
