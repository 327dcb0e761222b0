//! Controls: positioned rectangles with identity, flags and optional hooks.
//!
//! A control is any type implementing [`Control`]. Implementations embed a
//! [`ControlBase`], which carries the state every host needs: identity,
//! geometry, visible/enabled flags and directional navigation links.
//!
//! # Hooks
//!
//! Lifecycle hooks are an optional capability. A control that wants to hear
//! about placement, removal, focus or connection returns a
//! [`ControlHooks`] implementation from [`Control::hooks`]; the default
//! returns `None` and hosts skip the notification entirely.
//!
//! # Example
//!
//! ```
//! use trellis::control::{BasicControl, Control, ControlKind};
//!
//! let button = BasicControl::button().with_name("ok");
//! assert_eq!(button.kind(), ControlKind::Button);
//! assert!(button.is_enabled() && button.is_visible());
//! ```

mod basic;
mod hooks;

pub use basic::BasicControl;
pub use hooks::{ControlHooks, Placement};
pub(crate) use hooks::borrow_hooks;

use trellis_core::{ControlId, Identity, Point, Rect, Size};

use crate::group::Group;
use crate::navigation::{Direction, NavLinks};

/// The kind of a control.
///
/// Hosts attach no behaviour to most kinds; they exist so callers can filter
/// control sets, e.g. auto-navigation defaults to the interactive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Label,
    FadeLabel,
    TextBox,
    Image,
    Button,
    RadioButton,
    Edit,
    List,
    Slider,
    Group,
    /// A control kind defined outside this crate.
    Custom(&'static str),
}

impl ControlKind {
    /// Whether controls of this kind take keyboard focus and activation.
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            Self::Button | Self::RadioButton | Self::Edit | Self::List | Self::Slider
        )
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::FadeLabel => "FadeLabel",
            Self::TextBox => "TextBox",
            Self::Image => "Image",
            Self::Button => "Button",
            Self::RadioButton => "RadioButton",
            Self::Edit => "Edit",
            Self::List => "List",
            Self::Slider => "Slider",
            Self::Group => "Group",
            Self::Custom(name) => name,
        }
    }
}

/// State shared by every control.
///
/// Freshly constructed controls sit off-screen at `(-10, -10)` with a 1x1
/// size until a host places them.
#[derive(Debug)]
pub struct ControlBase {
    identity: Identity,
    kind: ControlKind,
    geometry: Rect,
    visible: bool,
    enabled: bool,
    navigation: NavLinks,
}

impl ControlBase {
    /// Geometry of a control that has never been placed.
    pub const DETACHED_GEOMETRY: Rect = Rect::new(-10, -10, 1, 1);

    /// Create a base for a control of type `T`, allocating its identity.
    pub fn new<T: 'static>(kind: ControlKind) -> Self {
        Self {
            identity: Identity::new::<T>(),
            kind,
            geometry: Self::DETACHED_GEOMETRY,
            visible: true,
            enabled: true,
            navigation: NavLinks::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> ControlId {
        self.identity.id()
    }

    #[inline]
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Debug name, empty if none was set.
    pub fn name(&self) -> String {
        self.identity.name()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.identity.set_name(name);
    }

    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.geometry.origin
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.geometry.origin = Point::new(x, y);
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.geometry.size = Size::new(width, height);
    }

    pub fn set_width(&mut self, width: i32) {
        self.geometry.size.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.geometry.size.height = height;
    }

    /// Midpoint in pixels, rounded toward the top-left and clamped to the
    /// `i32` range.
    pub fn midpoint(&self) -> Point {
        let (x2, y2) = self.geometry.doubled_midpoint();
        let half = |doubled: i64| {
            doubled
                .div_euclid(2)
                .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        };
        Point::new(half(x2), half(y2))
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn navigation(&self) -> &NavLinks {
        &self.navigation
    }

    /// The control reached by moving in `direction`, if linked.
    pub fn link(&self, direction: Direction) -> Option<ControlId> {
        self.navigation.get(direction)
    }

    pub fn set_link(&mut self, direction: Direction, target: Option<ControlId>) {
        self.navigation.set(direction, target);
    }
}

/// A rectangular control that can be placed into a grid host.
pub trait Control: 'static {
    fn base(&self) -> &ControlBase;

    fn base_mut(&mut self) -> &mut ControlBase;

    /// Lifecycle hooks, if this control has any.
    fn hooks(&mut self) -> Option<&mut dyn ControlHooks> {
        None
    }

    /// Downcast to a group, for controls that host a nested grid.
    fn as_group(&self) -> Option<&Group> {
        None
    }

    fn as_group_mut(&mut self) -> Option<&mut Group> {
        None
    }

    #[inline]
    fn id(&self) -> ControlId {
        self.base().id()
    }

    #[inline]
    fn kind(&self) -> ControlKind {
        self.base().kind()
    }

    #[inline]
    fn geometry(&self) -> Rect {
        self.base().geometry()
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }
}
