//! Integer pixel geometry.
//!
//! Controls are positioned on whole pixels, so every coordinate here is an
//! `i32`. Sizes are signed as well: placement with oversized padding can
//! legitimately produce a negative extent and the value is carried through
//! unchanged.

use std::fmt;

/// A position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from its components.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Left edge.
    #[inline]
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    /// Top edge.
    #[inline]
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// The x coordinate one past the right edge, saturating at the `i32`
    /// range.
    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x.saturating_add(self.size.width)
    }

    /// The y coordinate one past the bottom edge, saturating at the `i32`
    /// range.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(self.size.height)
    }

    /// The midpoint with both coordinates doubled.
    ///
    /// Doubling keeps odd extents exact without resorting to floats; only
    /// differences between doubled midpoints are ever compared.
    #[inline]
    pub fn doubled_midpoint(&self) -> (i64, i64) {
        (
            2 * i64::from(self.origin.x) + i64::from(self.size.width),
            2 * i64::from(self.origin.y) + i64::from(self.size.height),
        )
    }

    /// Whether the vertical extents of `self` and `other` intersect.
    ///
    /// Touching edges do not count as overlap.
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        other.y() < self.bottom() && other.bottom() > self.y()
    }

    /// Whether the horizontal extents of `self` and `other` intersect.
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        other.x() < self.right() && other.right() > self.x()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}
