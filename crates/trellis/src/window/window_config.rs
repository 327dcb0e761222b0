//! Window configuration and builder.
//!
//! This module provides `WindowConfig`, a builder describing a window's
//! outer geometry and grid, and `FrameMetrics`, the insets a decorated
//! window reserves for its frame and title bar.

use trellis_core::{Rect, Result};

use crate::placement::Grid;

/// Width of the reference screen windows are centred on.
pub const SCREEN_WIDTH: i32 = 1280;
/// Height of the reference screen windows are centred on.
pub const SCREEN_HEIGHT: i32 = 720;

/// Insets reserved by a window's decoration.
///
/// A blank window uses [`FrameMetrics::NONE`]. Decorated windows reserve a
/// header for the title bar and margins around the grid; the presets match
/// the two common skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameMetrics {
    /// Height of the title bar above the grid.
    pub header_height: i32,
    /// Extra vertical offset of the title background.
    pub title_back_y_shift: i32,
    /// Horizontal margin on each side of the grid.
    pub x_margin: i32,
    /// Vertical margin above and below the grid.
    pub y_margin: i32,
}

impl FrameMetrics {
    /// No decoration.
    pub const NONE: Self = Self {
        header_height: 0,
        title_back_y_shift: 0,
        x_margin: 0,
        y_margin: 0,
    };

    /// The Confluence skin.
    pub const CONFLUENCE: Self = Self {
        header_height: 35,
        title_back_y_shift: 4,
        x_margin: 5,
        y_margin: 5,
    };

    /// The Estuary skin.
    pub const ESTUARY: Self = Self {
        header_height: 45,
        title_back_y_shift: 0,
        x_margin: 0,
        y_margin: 0,
    };
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::NONE
    }
}

/// Configuration for a window's geometry and grid.
///
/// # Example
///
/// ```
/// use trellis::window::{FrameMetrics, WindowConfig};
///
/// let config = WindowConfig::new(400, 300, 3, 2)
///     .with_title("Settings")
///     .with_frame(FrameMetrics::CONFLUENCE);
///
/// // No explicit position: centred on a 1280x720 screen.
/// assert_eq!(config.resolve_position(), (440, 210));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title.
    title: String,
    /// Outer size (width, height) in pixels.
    size: (i32, i32),
    /// Grid rows.
    rows: u32,
    /// Grid columns.
    columns: u32,
    /// Top-left corner; centred when unset.
    position: Option<(i32, i32)>,
    /// Inset between the window edge and the grid.
    padding: i32,
    /// Decoration insets.
    frame: FrameMetrics,
}

impl WindowConfig {
    /// Inset between the window edge and the grid when none is given.
    pub const DEFAULT_PADDING: i32 = 5;

    /// A `width x height` window divided into `rows x columns` tiles.
    pub fn new(width: i32, height: i32, rows: u32, columns: u32) -> Self {
        Self {
            title: String::new(),
            size: (width, height),
            rows,
            columns,
            position: None,
            padding: Self::DEFAULT_PADDING,
            frame: FrameMetrics::NONE,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the top-left corner in screen pixels.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_frame(mut self, frame: FrameMetrics) -> Self {
        self.frame = frame;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frame(&self) -> FrameMetrics {
        self.frame
    }

    /// The top-left corner, centring the window if no position was set.
    pub fn resolve_position(&self) -> (i32, i32) {
        let (width, height) = self.size;
        self.position.unwrap_or((
            SCREEN_WIDTH / 2 - width.div_euclid(2),
            SCREEN_HEIGHT / 2 - height.div_euclid(2),
        ))
    }

    /// Compute the outer rectangle and the grid.
    ///
    /// Fails with [`InvalidGrid`](trellis_core::Error::InvalidGrid) when rows
    /// or columns is zero.
    pub(crate) fn resolve(&self) -> Result<(Rect, Grid)> {
        let (x, y) = self.resolve_position();
        let (width, height) = self.size;
        let frame = &self.frame;
        let padding = self.padding;

        let area = Rect::new(
            x + padding + frame.x_margin,
            y + padding + frame.y_margin + frame.title_back_y_shift + frame.header_height,
            width - 2 * padding - 2 * frame.x_margin,
            height
                - 2 * padding
                - frame.header_height
                - frame.title_back_y_shift
                - 2 * frame.y_margin,
        );
        let grid = Grid::new(area, self.rows, self.columns)?;
        Ok((Rect::new(x, y, width, height), grid))
    }
}
