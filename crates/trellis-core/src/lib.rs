//! Core systems for Trellis.
//!
//! This crate provides the leaf components the Trellis toolkit is built on:
//!
//! - **Control identity**: process-wide registry of stable [`ControlId`]s
//! - **Geometry**: integer [`Point`], [`Size`] and [`Rect`] in pixels
//! - **Event registry**: action codes and control ids bound to ordered
//!   callback lists, with pre-connect veto/substitution
//! - **Errors**: the [`Error`] taxonomy shared by every Trellis crate
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Event Registry Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trellis_core::{Callback, EventRegistry};
//!
//! const ACTION_NAV_BACK: i32 = 92;
//!
//! let presses = Rc::new(Cell::new(0));
//! let counter = presses.clone();
//!
//! let mut registry = EventRegistry::new();
//! registry.connect(ACTION_NAV_BACK, Callback::new(move || counter.set(counter.get() + 1)));
//!
//! registry.dispatch(ACTION_NAV_BACK);
//! assert_eq!(presses.get(), 1);
//!
//! registry.disconnect(ACTION_NAV_BACK, None).unwrap();
//! assert!(registry.disconnect(ACTION_NAV_BACK, None).is_err());
//! ```

mod error;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod registry;

pub use error::{Error, NotReadyReason, Result};
pub use events::{Callback, ConnectDecision, EventKey, EventRegistry};
pub use geometry::{Point, Rect, Size};
pub use logging::PerfSpan;
pub use registry::{
    ControlId, ControlRegistry, Identity, SharedControlRegistry, global_registry,
};
