//! Grid hosts and the native host primitive.
//!
//! [`GridHost`] is the contract shared by the [`Window`](crate::Window) and
//! every [`Group`](crate::Group): a grid of tiles plus an ordered child list.
//! [`HostPrimitive`] is the other side, the native layer that actually shows
//! controls. [`HeadlessHost`] implements it by recording every call, which
//! is what tests and backend-less embedders use.

use std::fmt;

use trellis_core::{ControlId, Rect, Result, Size};

use crate::control::ControlBase;
use crate::placement::{Cell, Grid};

/// Names a grid host within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostId {
    /// The window itself.
    Window,
    /// A group control placed somewhere in the window.
    Group(ControlId),
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => write!(f, "window"),
            Self::Group(id) => write!(f, "group {id}"),
        }
    }
}

/// Something that divides a content rectangle into a grid and holds children.
///
/// The geometry accessors fail with
/// [`NotReady`](trellis_core::Error::NotReady) until the host's grid is
/// established: for a window, once its geometry is set; for a group, once it
/// is placed into a parent host.
pub trait GridHost {
    /// This host's id within its window.
    fn host_id(&self) -> HostId;

    /// The established grid.
    fn grid(&self) -> Result<&Grid>;

    /// Children in insertion order.
    fn children(&self) -> &[ControlId];

    /// Append a child. Geometry is the caller's business.
    fn attach(&mut self, id: ControlId);

    /// Remove a child, returning whether it was present.
    fn detach(&mut self, id: ControlId) -> bool;

    fn rows(&self) -> Result<u32> {
        Ok(self.grid()?.rows())
    }

    fn columns(&self) -> Result<u32> {
        Ok(self.grid()?.columns())
    }

    fn grid_x(&self) -> Result<i32> {
        Ok(self.grid()?.area().x())
    }

    fn grid_y(&self) -> Result<i32> {
        Ok(self.grid()?.area().y())
    }

    fn grid_width(&self) -> Result<i32> {
        Ok(self.grid()?.area().width())
    }

    fn grid_height(&self) -> Result<i32> {
        Ok(self.grid()?.area().height())
    }

    fn tile_size(&self) -> Result<Size> {
        Ok(self.grid()?.tile())
    }

    fn tile_width(&self) -> Result<i32> {
        Ok(self.tile_size()?.width)
    }

    fn tile_height(&self) -> Result<i32> {
        Ok(self.tile_size()?.height)
    }

    /// Geometry a control placed at `cell` would receive.
    fn cell_geometry(&self, cell: &Cell) -> Result<Rect> {
        Ok(self.grid()?.cell_geometry(cell))
    }

    fn contains_child(&self, id: ControlId) -> bool {
        self.children().contains(&id)
    }
}

/// Opaque animation metadata forwarded to the native layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Animation {
    /// When the animation runs, e.g. `"WindowOpen"`.
    pub trigger: String,
    /// The effect description understood by the native layer.
    pub effect: String,
}

impl Animation {
    pub fn new(trigger: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            effect: effect.into(),
        }
    }
}

/// The native layer a window drives.
pub trait HostPrimitive {
    /// Show a control at its current geometry.
    fn add_control(&mut self, control: &ControlBase);

    fn remove_control(&mut self, id: ControlId);

    /// A control's geometry, flags or navigation links changed.
    fn update_control(&mut self, control: &ControlBase) {
        let _ = control;
    }

    fn set_animations(&mut self, id: ControlId, animations: &[Animation]);

    /// Give a control exclusive input focus.
    fn set_focus(&mut self, id: ControlId);

    /// Close the native window.
    fn close(&mut self) {}
}

/// A native call received by a [`HeadlessHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Add(ControlId, Rect),
    Remove(ControlId),
    Update(ControlId),
    Animations(ControlId, Vec<Animation>),
    Focus(ControlId),
    Close,
}

/// A [`HostPrimitive`] with no native backend that records every call.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    calls: Vec<HostCall>,
    shown: Vec<ControlId>,
    focused: Option<ControlId>,
    closed: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Controls currently shown, in the order they were added.
    pub fn shown(&self) -> &[ControlId] {
        &self.shown
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Animations most recently assigned to `id`.
    pub fn animations(&self, id: ControlId) -> Option<&[Animation]> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::Animations(target, animations) if *target == id => {
                Some(animations.as_slice())
            }
            _ => None,
        })
    }

    /// Forget recorded calls, keeping current state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl HostPrimitive for HeadlessHost {
    fn add_control(&mut self, control: &ControlBase) {
        self.calls.push(HostCall::Add(control.id(), control.geometry()));
        if !self.shown.contains(&control.id()) {
            self.shown.push(control.id());
        }
    }

    fn remove_control(&mut self, id: ControlId) {
        self.calls.push(HostCall::Remove(id));
        self.shown.retain(|shown| *shown != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    fn update_control(&mut self, control: &ControlBase) {
        self.calls.push(HostCall::Update(control.id()));
    }

    fn set_animations(&mut self, id: ControlId, animations: &[Animation]) {
        self.calls.push(HostCall::Animations(id, animations.to_vec()));
    }

    fn set_focus(&mut self, id: ControlId) {
        self.calls.push(HostCall::Focus(id));
        self.focused = Some(id);
    }

    fn close(&mut self) {
        self.calls.push(HostCall::Close);
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlKind;

    #[test]
    fn test_headless_records_calls() {
        let mut host = HeadlessHost::new();
        let base = ControlBase::new::<()>(ControlKind::Button);
        let fade = vec![Animation::new("WindowOpen", "effect=fade time=200")];

        host.add_control(&base);
        host.set_animations(base.id(), &fade);
        host.set_focus(base.id());
        assert_eq!(host.shown(), &[base.id()]);
        assert_eq!(host.focused(), Some(base.id()));
        assert_eq!(host.animations(base.id()), Some(fade.as_slice()));

        host.remove_control(base.id());
        assert!(host.shown().is_empty());
        assert_eq!(host.focused(), None);
        assert_eq!(host.calls().len(), 4);
    }

    #[test]
    fn test_host_id_display() {
        assert_eq!(HostId::Window.to_string(), "window");
    }
}
