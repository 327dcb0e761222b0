//! Prelude module for Trellis.
//!
//! ```
//! use trellis::prelude::*;
//! ```
//!
//! This provides access to:
//! - Hosts (`Window`, `Group`, `GridHost`, `HostId`)
//! - Controls and hooks (`BasicControl`, `Control`, `ControlHooks`)
//! - Placement and navigation parameters (`Cell`, `NavigationOptions`)
//! - Event wiring (`Callback`, `ConnectDecision`, `EventKey`)
//! - Geometry and errors

// ============================================================================
// Hosts
// ============================================================================

pub use crate::group::Group;
pub use crate::host::{Animation, GridHost, HeadlessHost, HostId, HostPrimitive};
pub use crate::window::{FrameMetrics, Window, WindowConfig};

// ============================================================================
// Controls
// ============================================================================

pub use crate::control::{BasicControl, Control, ControlBase, ControlHooks, ControlKind, Placement};

// ============================================================================
// Placement and Navigation
// ============================================================================

pub use crate::navigation::{Direction, KindFilter, NavigationOptions};
pub use crate::placement::Cell;

// ============================================================================
// Events, Geometry and Errors
// ============================================================================

pub use trellis_core::{
    Callback, ConnectDecision, ControlId, Error, EventKey, Point, Rect, Result, Size,
};
