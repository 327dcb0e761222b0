//! Error types for Trellis.
//!
//! Every error is a contract violation detected up front: operations check
//! their preconditions before mutating anything, so an `Err` always leaves
//! hosts, controls and the event registry exactly as they were.

use std::fmt;

use crate::events::EventKey;
use crate::registry::ControlId;

/// Why a grid host cannot serve geometry yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyReason {
    /// A window whose geometry has not been configured.
    GeometryNotSet,
    /// A group that has not been placed into a parent host, or was removed.
    GroupNotPlaced,
}

impl fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometryNotSet => write!(f, "window geometry is not set, call set_geometry first"),
            Self::GroupNotPlaced => write!(f, "group is not placed, place it in a host first"),
        }
    }
}

/// The error type for Trellis operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Grid geometry is not established yet.
    #[error("Grid host not ready: {0}")]
    NotReady(NotReadyReason),

    /// Disconnect referenced a key with no entry, or a callback the entry does not hold.
    #[error("{}", not_connected_message(.key, .callback))]
    NotConnected {
        /// The event key that was addressed.
        key: EventKey,
        /// `true` when the key exists but the given callback is not bound to it.
        callback: bool,
    },

    /// A grid was configured with zero rows or columns.
    #[error("Invalid grid {rows}x{columns}: rows and columns must be at least 1")]
    InvalidGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },

    /// The id does not name a control held by this window.
    #[error("Unknown control {0}")]
    InvalidControl(ControlId),

    /// A group operation addressed a control that is not a group.
    #[error("Control {0} is not a group")]
    NotAGroup(ControlId),

    /// Removal of a control that is not placed in any host.
    #[error("Control {0} is not placed")]
    NotPlaced(ControlId),

    /// Placement of a control that already belongs to a host.
    #[error("Control {0} is already placed")]
    AlreadyPlaced(ControlId),
}

fn not_connected_message(key: &EventKey, callback: &bool) -> String {
    if *callback {
        format!("The callback is not connected to {key}")
    } else {
        format!("{key} is not connected")
    }
}

impl Error {
    /// Whether this is a [`NotReady`](Self::NotReady) error.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady(_))
    }

    /// Whether this is a [`NotConnected`](Self::NotConnected) error.
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::NotConnected { .. })
    }
}

/// A specialized Result type for Trellis operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::NotReady(NotReadyReason::GroupNotPlaced);
        assert!(err.is_not_ready());
        assert_eq!(
            err.to_string(),
            "Grid host not ready: group is not placed, place it in a host first"
        );

        let err = Error::NotConnected {
            key: EventKey::Action(92),
            callback: false,
        };
        assert!(err.is_not_connected());
        assert_eq!(err.to_string(), "action 92 is not connected");

        let err = Error::NotConnected {
            key: EventKey::Action(92),
            callback: true,
        };
        assert_eq!(err.to_string(), "The callback is not connected to action 92");
    }

    #[test]
    fn test_invalid_grid_message() {
        let err = Error::InvalidGrid { rows: 0, columns: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid grid 0x3: rows and columns must be at least 1"
        );
    }
}
