//! Spatial auto-navigation.
//!
//! [`compute_navigation`] links every control to its nearest neighbour in
//! each of the four directions, based purely on geometry:
//!
//! 1. A candidate must overlap the control on the perpendicular axis: for
//!    left/right, their vertical extents overlap; for up/down, their
//!    horizontal extents do.
//! 2. Among candidates strictly on the requested side, the smallest gap
//!    between the two origins wins. Ties go to the smallest difference
//!    between midpoints on the perpendicular axis, then to the smaller
//!    [`ControlId`].
//! 3. With wrapping enabled for the axis and no direct neighbour, the
//!    candidate farthest away on the opposite side is linked instead, with
//!    the same tie-breaks.
//!
//! Because the final tie-break is the id, the result does not depend on the
//! order of the input.

use trellis_core::{ControlId, Rect};

use crate::control::{Control, ControlKind};

/// A navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Signed distance from `from` to `to` along this direction.
    fn gap(self, from: &Rect, to: &Rect) -> i64 {
        let (from_x, from_y, to_x, to_y) = (
            i64::from(from.x()),
            i64::from(from.y()),
            i64::from(to.x()),
            i64::from(to.y()),
        );
        match self {
            Self::Left => from_x - to_x,
            Self::Right => to_x - from_x,
            Self::Up => from_y - to_y,
            Self::Down => to_y - from_y,
        }
    }

    fn overlaps(self, a: &Rect, b: &Rect) -> bool {
        if self.is_horizontal() {
            a.overlaps_vertically(b)
        } else {
            a.overlaps_horizontally(b)
        }
    }

    /// Doubled midpoint distance on the perpendicular axis.
    fn offset(self, a: &Rect, b: &Rect) -> i64 {
        let (ax, ay) = a.doubled_midpoint();
        let (bx, by) = b.doubled_midpoint();
        if self.is_horizontal() {
            (ay - by).abs()
        } else {
            (ax - bx).abs()
        }
    }
}

/// Directional links of one control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NavLinks {
    pub up: Option<ControlId>,
    pub down: Option<ControlId>,
    pub left: Option<ControlId>,
    pub right: Option<ControlId>,
}

impl NavLinks {
    pub fn get(&self, direction: Direction) -> Option<ControlId> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, target: Option<ControlId>) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = target;
    }

    /// Whether no direction is linked.
    pub fn is_empty(&self) -> bool {
        Direction::ALL.iter().all(|d| self.get(*d).is_none())
    }

    /// Linked directions and their targets.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, ControlId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|target| (d, target)))
    }
}

/// A control as seen by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: ControlId,
    pub geometry: Rect,
}

impl NavItem {
    pub fn new(id: ControlId, geometry: Rect) -> Self {
        Self { id, geometry }
    }
}

/// Compute directional links for `items`.
///
/// Returns one entry per input item, in input order. Directions with no
/// qualifying neighbour are left as `None`.
#[tracing::instrument(skip_all, target = "trellis::navigation", level = "trace", fields(count = items.len()))]
pub fn compute_navigation(
    items: &[NavItem],
    vertical_wrap: bool,
    horizontal_wrap: bool,
) -> Vec<(ControlId, NavLinks)> {
    items
        .iter()
        .map(|item| {
            let mut links = NavLinks::default();
            for direction in Direction::ALL {
                let wrap = if direction.is_horizontal() {
                    horizontal_wrap
                } else {
                    vertical_wrap
                };
                links.set(direction, neighbor(items, item, direction, wrap));
            }
            (item.id, links)
        })
        .collect()
}

fn neighbor(items: &[NavItem], from: &NavItem, direction: Direction, wrap: bool) -> Option<ControlId> {
    let candidates: Vec<(i64, i64, ControlId)> = items
        .iter()
        .filter(|to| to.id != from.id && direction.overlaps(&from.geometry, &to.geometry))
        .map(|to| {
            (
                direction.gap(&from.geometry, &to.geometry),
                direction.offset(&from.geometry, &to.geometry),
                to.id,
            )
        })
        .collect();

    let direct = candidates.iter().filter(|(gap, _, _)| *gap > 0).min().copied();
    // Most negative gap is the farthest control on the opposite side.
    let wrapped = || candidates.iter().filter(|(gap, _, _)| *gap < 0).min().copied();

    match direct {
        Some((_, _, id)) => Some(id),
        None if wrap => wrapped().map(|(_, _, id)| id),
        None => None,
    }
}

/// Which control kinds auto-navigation considers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KindFilter {
    /// Buttons, radio buttons, edits, lists and sliders.
    #[default]
    Interactive,
    /// Every kind.
    Any,
    /// Exactly the listed kinds.
    Only(Vec<ControlKind>),
}

impl KindFilter {
    pub fn accepts(&self, kind: ControlKind) -> bool {
        match self {
            Self::Interactive => kind.is_interactive(),
            Self::Any => true,
            Self::Only(kinds) => kinds.contains(&kind),
        }
    }
}

/// Options for [`Window::auto_navigation`](crate::Window::auto_navigation).
///
/// By default both axes wrap, and only enabled, visible, interactive
/// controls among everything the window has added take part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    pub vertical_wrap: bool,
    pub horizontal_wrap: bool,
    pub include_disabled: bool,
    pub include_invisible: bool,
    /// Restrict the pass to these controls instead of every added control.
    pub controls: Option<Vec<ControlId>>,
    pub kinds: KindFilter,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            vertical_wrap: true,
            horizontal_wrap: true,
            include_disabled: false,
            include_invisible: false,
            controls: None,
            kinds: KindFilter::Interactive,
        }
    }
}

impl NavigationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertical_wrap(mut self, wrap: bool) -> Self {
        self.vertical_wrap = wrap;
        self
    }

    pub fn with_horizontal_wrap(mut self, wrap: bool) -> Self {
        self.horizontal_wrap = wrap;
        self
    }

    pub fn with_disabled(mut self, include: bool) -> Self {
        self.include_disabled = include;
        self
    }

    pub fn with_invisible(mut self, include: bool) -> Self {
        self.include_invisible = include;
        self
    }

    pub fn with_controls(mut self, controls: impl IntoIterator<Item = ControlId>) -> Self {
        self.controls = Some(controls.into_iter().collect());
        self
    }

    pub fn with_kinds(mut self, kinds: KindFilter) -> Self {
        self.kinds = kinds;
        self
    }

    /// Whether `control` passes the kind and flag filters.
    pub fn accepts(&self, control: &dyn Control) -> bool {
        self.kinds.accepts(control.kind())
            && (self.include_disabled || control.is_enabled())
            && (self.include_invisible || control.is_visible())
    }
}
