//! The top-level grid host.
//!
//! A [`Window`] owns every control it shows, the grid they are placed on,
//! the event registry that dispatches their activation, and the native
//! [`HostPrimitive`](crate::host::HostPrimitive) it drives.
//!
//! # Placing controls
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut window = Window::new();
//! window.set_geometry(&WindowConfig::new(1290, 730, 4, 4).with_position(-5, -5))?;
//!
//! let ok = window.insert(BasicControl::button());
//! let geometry = window.place_control(ok, Cell::new(1, 2))?;
//! assert_eq!(geometry, Rect::new(645, 185, 310, 170));
//! # Ok::<(), trellis::Error>(())
//! ```
//!
//! # Nested groups
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut window = Window::new();
//! window.set_geometry(&WindowConfig::new(800, 600, 2, 2))?;
//!
//! let group = window.insert(Group::new(2, 2)?);
//! let button = window.insert(BasicControl::button());
//!
//! // The group has no grid until it is placed itself.
//! assert!(window.place_control_in(HostId::Group(group), button, Cell::new(0, 0)).is_err());
//!
//! window.place_control(group, Cell::new(0, 0).with_span(2, 2))?;
//! window.place_control_in(HostId::Group(group), button, Cell::new(0, 0))?;
//! # Ok::<(), trellis::Error>(())
//! ```

mod host_window;
mod window_config;
mod window_events;

pub use host_window::{AnimationHook, Window};
pub use window_config::{FrameMetrics, SCREEN_HEIGHT, SCREEN_WIDTH, WindowConfig};
