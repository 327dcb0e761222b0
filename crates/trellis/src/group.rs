//! Nested grid hosts.
//!
//! A [`Group`] is a control that is also a [`GridHost`]. Its grid covers the
//! group's own placed geometry, so it only exists once the group has been
//! placed into a parent host:
//!
//! ```text
//! Unplaced --place--> Placed --remove--> Removed --place--> Placed ...
//! ```
//!
//! Placing into an unplaced or removed group fails with
//! [`NotReady`](trellis_core::Error::NotReady). Group children are shown by
//! the window like any other control; only their geometry is relative to the
//! group.

use std::fmt;

use trellis_core::{ControlId, Error, NotReadyReason, Result};

use crate::control::{Control, ControlBase, ControlHooks, ControlKind, borrow_hooks};
use crate::host::{GridHost, HostId};
use crate::placement::Grid;

/// Lifecycle state of a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    /// Constructed, never placed.
    Unplaced,
    /// Placed into a parent host; the grid covers the group's geometry.
    Placed(Grid),
    /// Removed from its parent host, children gone.
    Removed,
}

impl GroupState {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

/// A control hosting a nested grid of child controls.
pub struct Group {
    base: ControlBase,
    rows: u32,
    columns: u32,
    state: GroupState,
    children: Vec<ControlId>,
    hooks: Option<Box<dyn ControlHooks>>,
}

impl Group {
    /// Create an unplaced group with a `rows x columns` grid.
    pub fn new(rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidGrid { rows, columns });
        }
        Ok(Self {
            base: ControlBase::new::<Self>(ControlKind::Group),
            rows,
            columns,
            state: GroupState::Unplaced,
            children: Vec::new(),
            hooks: None,
        })
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.base.set_name(name);
        self
    }

    /// Attach lifecycle hooks, which run in addition to the group's own
    /// placement bookkeeping.
    pub fn with_hooks(mut self, hooks: impl ControlHooks) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    #[inline]
    pub fn state(&self) -> GroupState {
        self.state
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// The first child, which receives focus directed at the group.
    pub fn first_child(&self) -> Option<ControlId> {
        self.children.first().copied()
    }

    /// Install the grid computed from the group's placed geometry.
    pub(crate) fn mark_placed(&mut self, grid: Grid) {
        tracing::trace!(
            target: trellis_core::logging::targets::PLACEMENT,
            group = %self.id(),
            tile = %grid.tile(),
            "group placed"
        );
        self.state = GroupState::Placed(grid);
    }

    /// Invalidate the grid after the group was removed.
    pub(crate) fn mark_removed(&mut self) {
        debug_assert!(self.children.is_empty());
        tracing::trace!(
            target: trellis_core::logging::targets::PLACEMENT,
            group = %self.id(),
            "group removed"
        );
        self.state = GroupState::Removed;
    }
}

impl Control for Group {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn hooks(&mut self) -> Option<&mut dyn ControlHooks> {
        borrow_hooks(&mut self.hooks)
    }

    fn as_group(&self) -> Option<&Group> {
        Some(self)
    }

    fn as_group_mut(&mut self) -> Option<&mut Group> {
        Some(self)
    }
}

impl GridHost for Group {
    fn host_id(&self) -> HostId {
        HostId::Group(self.id())
    }

    fn grid(&self) -> Result<&Grid> {
        match &self.state {
            GroupState::Placed(grid) => Ok(grid),
            GroupState::Unplaced | GroupState::Removed => {
                Err(Error::NotReady(NotReadyReason::GroupNotPlaced))
            }
        }
    }

    fn children(&self) -> &[ControlId] {
        &self.children
    }

    fn attach(&mut self, id: ControlId) {
        self.children.push(id);
    }

    fn detach(&mut self, id: ControlId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| *child != id);
        self.children.len() != before
    }

    // Dimensions are fixed at construction, so these never fail.
    fn rows(&self) -> Result<u32> {
        Ok(self.rows)
    }

    fn columns(&self) -> Result<u32> {
        Ok(self.columns)
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("base", &self.base)
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::Rect;

    use super::*;
    use crate::placement::Cell;

    #[test]
    fn test_unplaced_group_is_not_ready() {
        let group = Group::new(2, 2).unwrap();
        assert_eq!(group.state(), GroupState::Unplaced);
        assert_eq!(
            group.grid_x(),
            Err(Error::NotReady(NotReadyReason::GroupNotPlaced))
        );
        assert!(group.cell_geometry(&Cell::new(0, 0)).unwrap_err().is_not_ready());
        assert_eq!(group.rows(), Ok(2));
    }

    #[test]
    fn test_lifecycle() {
        let mut group = Group::new(2, 4).unwrap();
        group.mark_placed(Grid::new(Rect::new(100, 100, 400, 200), 2, 4).unwrap());
        assert!(group.is_placed());
        assert_eq!(group.tile_width(), Ok(100));
        assert_eq!(group.tile_height(), Ok(100));
        assert_eq!(
            group.cell_geometry(&Cell::new(1, 3).with_padding(0, 0)),
            Ok(Rect::new(400, 200, 100, 100))
        );

        group.mark_removed();
        assert_eq!(group.state(), GroupState::Removed);
        assert!(group.grid_width().unwrap_err().is_not_ready());
    }

    #[test]
    fn test_children_order() {
        let mut group = Group::new(1, 1).unwrap();
        let a = ControlBase::new::<()>(ControlKind::Button);
        let b = ControlBase::new::<()>(ControlKind::Button);
        group.attach(a.id());
        group.attach(b.id());
        assert_eq!(group.first_child(), Some(a.id()));
        assert!(group.detach(a.id()));
        assert!(!group.detach(a.id()));
        assert_eq!(group.children(), &[b.id()]);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Group::new(3, 0),
            Err(Error::InvalidGrid { rows: 3, columns: 0 })
        ));
    }
}
