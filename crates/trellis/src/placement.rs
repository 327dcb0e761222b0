//! Grid arithmetic: cells, tiles and the geometry of a placed control.
//!
//! A grid divides a host rectangle into `rows x columns` equal tiles. Tile
//! dimensions use floor division, so any remainder pixels are left unused
//! along the right and bottom edges. A control placed at a [`Cell`] covers
//! `rowspan x columnspan` tiles, inset by its padding on every side:
//!
//! ```text
//! x      = grid_x + tile_width  * column + pad_x
//! y      = grid_y + tile_height * row    + pad_y
//! width  = tile_width  * columnspan - 2 * pad_x
//! height = tile_height * rowspan    - 2 * pad_y
//! ```
//!
//! No bounds are enforced: a cell may lie outside the grid and a large
//! padding may produce a non-positive size. Both are the caller's concern.
//! The arithmetic runs in `i64` and saturates to the `i32` range, so a cell
//! too far out to be addressed in pixels lands on the edge of that range.

use trellis_core::{Error, Point, Rect, Result, Size};

/// A placement request: cell coordinates, span and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
    pub rowspan: u32,
    pub columnspan: u32,
    pub pad_x: i32,
    pub pad_y: i32,
}

impl Cell {
    /// Padding applied on each side when none is given.
    pub const DEFAULT_PADDING: i32 = 5;

    /// A single-tile cell with default padding.
    pub const fn new(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            rowspan: 1,
            columnspan: 1,
            pad_x: Self::DEFAULT_PADDING,
            pad_y: Self::DEFAULT_PADDING,
        }
    }

    pub const fn with_span(mut self, rowspan: u32, columnspan: u32) -> Self {
        self.rowspan = rowspan;
        self.columnspan = columnspan;
        self
    }

    pub const fn with_padding(mut self, pad_x: i32, pad_y: i32) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, column): (u32, u32)) -> Self {
        Self::new(row, column)
    }
}

/// A configured grid: the area it covers, its dimensions and cached tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    area: Rect,
    rows: u32,
    columns: u32,
    tile: Size,
}

impl Grid {
    /// Divide `area` into `rows x columns` tiles.
    ///
    /// Fails with [`Error::InvalidGrid`] if either dimension is zero.
    pub fn new(area: Rect, rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidGrid { rows, columns });
        }
        Ok(Self {
            area,
            rows,
            columns,
            tile: tile_size(area.size, rows, columns),
        })
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.area.origin
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn tile(&self) -> Size {
        self.tile
    }

    /// Geometry of a control placed at `cell`.
    pub fn cell_geometry(&self, cell: &Cell) -> Rect {
        cell_geometry(self.area.origin, self.tile, cell)
    }
}

/// Floor-divided tile size of an area split into `rows x columns`.
///
/// `rows` and `columns` must be non-zero.
pub fn tile_size(area: Size, rows: u32, columns: u32) -> Size {
    Size::new(
        saturate(i64::from(area.width).div_euclid(i64::from(columns.max(1)))),
        saturate(i64::from(area.height).div_euclid(i64::from(rows.max(1)))),
    )
}

/// Geometry of `cell` in a grid starting at `origin` with tiles of `tile`.
///
/// Coordinates and extents that do not fit in `i32` saturate.
pub fn cell_geometry(origin: Point, tile: Size, cell: &Cell) -> Rect {
    let offset = |start: i32, tile: i32, index: u32, pad: i32| {
        i64::from(tile)
            .saturating_mul(i64::from(index))
            .saturating_add(i64::from(start))
            .saturating_add(i64::from(pad))
    };
    let extent = |tile: i32, span: u32, pad: i32| {
        i64::from(tile)
            .saturating_mul(i64::from(span))
            .saturating_sub(2 * i64::from(pad))
    };
    Rect::new(
        saturate(offset(origin.x, tile.width, cell.column, cell.pad_x)),
        saturate(offset(origin.y, tile.height, cell.row, cell.pad_y)),
        saturate(extent(tile.width, cell.columnspan, cell.pad_x)),
        saturate(extent(tile.height, cell.rowspan, cell.pad_y)),
    )
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_defaults() {
        let cell = Cell::new(1, 2);
        assert_eq!((cell.rowspan, cell.columnspan), (1, 1));
        assert_eq!((cell.pad_x, cell.pad_y), (5, 5));
        assert_eq!(Cell::from((1, 2)), cell);
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::new(Rect::new(0, 0, 1280, 720), 4, 4).unwrap();
        assert_eq!(grid.tile(), Size::new(320, 180));
        assert_eq!(
            grid.cell_geometry(&Cell::new(1, 2)),
            Rect::new(645, 185, 310, 170)
        );
    }

    #[test]
    fn test_span_and_padding() {
        let grid = Grid::new(Rect::new(100, 50, 600, 300), 3, 3).unwrap();
        let cell = Cell::new(0, 1).with_span(2, 2).with_padding(0, 10);
        assert_eq!(grid.cell_geometry(&cell), Rect::new(300, 60, 400, 180));
    }

    #[test]
    fn test_tile_floor_division() {
        assert_eq!(tile_size(Size::new(100, 100), 3, 3), Size::new(33, 33));
        assert_eq!(tile_size(Size::new(-7, 7), 2, 2), Size::new(-4, 3));
    }

    #[test]
    fn test_no_bounds_checks() {
        let grid = Grid::new(Rect::new(0, 0, 100, 100), 2, 2).unwrap();
        let outside = grid.cell_geometry(&Cell::new(5, 5));
        assert_eq!(outside.origin, Point::new(255, 255));

        let inverted = grid.cell_geometry(&Cell::new(0, 0).with_padding(40, 40));
        assert_eq!(inverted.size, Size::new(-30, -30));
    }

    #[test]
    fn test_far_out_cell_saturates() {
        let grid = Grid::new(Rect::new(0, 0, 1280, 720), 4, 4).unwrap();
        assert_eq!(
            grid.cell_geometry(&Cell::new(0, 10_000_000)),
            Rect::new(i32::MAX, 5, 310, 170)
        );
        assert_eq!(
            grid.cell_geometry(&Cell::new(3_000_000_000, 0)),
            Rect::new(5, i32::MAX, 310, 170)
        );

        let wide = grid.cell_geometry(&Cell::new(0, 0).with_span(1, u32::MAX));
        assert_eq!(wide.width(), i32::MAX);
        let inverted = grid.cell_geometry(&Cell::new(0, 0).with_padding(i32::MAX, 0));
        assert_eq!(inverted.width(), i32::MIN);
    }

    #[test]
    fn test_tile_size_with_huge_counts() {
        assert_eq!(tile_size(Size::new(-7, 7), 1, u32::MAX), Size::new(-1, 7));
        assert_eq!(tile_size(Size::new(1280, 720), u32::MAX, 1), Size::new(1280, 0));
    }

    #[test]
    fn test_invalid_grid() {
        assert_eq!(
            Grid::new(Rect::new(0, 0, 10, 10), 0, 2),
            Err(Error::InvalidGrid { rows: 0, columns: 2 })
        );
    }
}
