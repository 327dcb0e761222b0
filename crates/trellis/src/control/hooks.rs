//! Optional lifecycle hooks for controls.

use trellis_core::{Callback, ConnectDecision, Rect};

use crate::host::HostId;
use crate::placement::Cell;

/// Details of a completed placement, passed to [`ControlHooks::on_placed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The host the control was placed into.
    pub host: HostId,
    /// The requested cell, span and padding.
    pub cell: Cell,
    /// The geometry that was applied.
    pub geometry: Rect,
}

impl Placement {
    #[inline]
    pub fn row(&self) -> u32 {
        self.cell.row
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.cell.column
    }

    #[inline]
    pub fn rowspan(&self) -> u32 {
        self.cell.rowspan
    }

    #[inline]
    pub fn columnspan(&self) -> u32 {
        self.cell.columnspan
    }

    #[inline]
    pub fn pad_x(&self) -> i32 {
        self.cell.pad_x
    }

    #[inline]
    pub fn pad_y(&self) -> i32 {
        self.cell.pad_y
    }
}

/// Notifications a control may opt into.
///
/// Every method has a no-op default, so implementors override only what they
/// need.
pub trait ControlHooks: 'static {
    /// Called after geometry was applied and the control was attached.
    fn on_placed(&mut self, placement: &Placement) {
        let _ = placement;
    }

    /// Called before the control is detached from `host`.
    fn on_removed(&mut self, host: HostId) {
        let _ = host;
    }

    /// Called when the control is asked to take focus.
    ///
    /// Returning `false` keeps focus where it is.
    fn on_focused(&mut self) -> bool {
        true
    }

    /// Inspect a callback about to be connected to this control.
    ///
    /// The decision may approve it, veto it, or substitute another callback.
    fn pre_connect(&mut self, callback: &Callback, host: HostId) -> ConnectDecision {
        let _ = (callback, host);
        ConnectDecision::Approve
    }
}

/// Borrow a boxed hook set as a trait object.
pub(crate) fn borrow_hooks(
    hooks: &mut Option<Box<dyn ControlHooks>>,
) -> Option<&mut dyn ControlHooks> {
    match hooks {
        Some(hooks) => Some(hooks.as_mut()),
        None => None,
    }
}
