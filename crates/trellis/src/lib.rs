//! Trellis - grid placement, spatial navigation and event wiring for
//! rectangular controls.
//!
//! Trellis places controls on a row/column grid hosted by a [`Window`] or a
//! nested [`Group`], links them for arrow-key navigation based on their
//! geometry, and dispatches activation to connected callbacks. Drawing is
//! left to a native layer behind the [`HostPrimitive`] trait;
//! [`HeadlessHost`] stands in when there is none.
//!
//! This crate re-exports everything from `trellis-core`.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell as Flag;
//! use std::rc::Rc;
//! use trellis::prelude::*;
//!
//! let mut window = Window::new();
//! window.set_geometry(&WindowConfig::new(600, 200, 1, 3).with_title("Row"))?;
//!
//! let buttons: Vec<ControlId> = (0..3)
//!     .map(|column| {
//!         let id = window.insert(BasicControl::button());
//!         window.place_control(id, Cell::new(0, column)).map(|_| id)
//!     })
//!     .collect::<Result<_>>()?;
//!
//! window.auto_navigation(&NavigationOptions::default())?;
//! let first = window.base(buttons[0])?;
//! assert_eq!(first.link(Direction::Right), Some(buttons[1]));
//! assert_eq!(first.link(Direction::Left), Some(buttons[2]));
//!
//! let pressed = Rc::new(Flag::new(false));
//! let flag = pressed.clone();
//! window.connect(buttons[1], Callback::new(move || flag.set(true)));
//! window.on_control(buttons[1]);
//! assert!(pressed.get());
//! # Ok::<(), trellis::Error>(())
//! ```

pub use trellis_core::*;

pub mod actions;
pub mod control;
pub mod debug;
pub mod group;
pub mod host;
pub mod navigation;
pub mod placement;
pub mod prelude;
pub mod window;

pub use control::{BasicControl, Control, ControlBase, ControlHooks, ControlKind, Placement};
pub use debug::ControlTreeDebug;
pub use group::{Group, GroupState};
pub use host::{Animation, GridHost, HeadlessHost, HostCall, HostId, HostPrimitive};
pub use navigation::{
    Direction, KindFilter, NavItem, NavLinks, NavigationOptions, compute_navigation,
};
pub use placement::{Cell, Grid};
pub use window::{FrameMetrics, Window, WindowConfig};
