//! # Tile Operations Module
//!
//! Computes the positions of a rectangular grid of new components.
//!
//! A tile is described by a start point, a spacing per axis and a count per
//! axis. Cell `(i, j)` sits at `start + (i * x_spacing, j * y_spacing)`.
//!
//! - Counts of zero or less produce an empty grid, not an error
//! - Negative spacing is allowed and walks toward smaller coordinates
//! - Positions are generated column by column: `i` outer, `j` inner, so the
//!   last position is cell `(num_x - 1, num_y - 1)`

use tilekit_core::Point;

/// Parameters collected by the tile dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileParams {
    /// X coordinate of cell (0, 0)
    pub x_start: i32,
    /// Y coordinate of cell (0, 0)
    pub y_start: i32,
    /// Horizontal distance between neighbouring cells
    pub x_spacing: i32,
    /// Vertical distance between neighbouring cells
    pub y_spacing: i32,
    /// Number of cells along X
    pub num_x: i32,
    /// Number of cells along Y
    pub num_y: i32,
}

impl TileParams {
    /// Create new tile parameters
    pub fn new(
        x_start: i32,
        y_start: i32,
        x_spacing: i32,
        y_spacing: i32,
        num_x: i32,
        num_y: i32,
    ) -> Self {
        Self {
            x_start,
            y_start,
            x_spacing,
            y_spacing,
            num_x,
            num_y,
        }
    }

    /// Columns actually produced; negative counts clamp to zero.
    pub fn columns(&self) -> u32 {
        self.num_x.max(0) as u32
    }

    /// Rows actually produced; negative counts clamp to zero.
    pub fn rows(&self) -> u32 {
        self.num_y.max(0) as u32
    }

    /// Get total number of cells
    pub fn total_copies(&self) -> u64 {
        u64::from(self.columns()) * u64::from(self.rows())
    }

    /// Position of cell `(i, j)`, or `None` outside the grid.
    ///
    /// Coordinates saturate at the `i32` range instead of overflowing.
    pub fn position(&self, i: u32, j: u32) -> Option<Point> {
        if i >= self.columns() || j >= self.rows() {
            return None;
        }
        let step = |start: i32, index: u32, spacing: i32| {
            let index = i32::try_from(index).unwrap_or(i32::MAX);
            start.saturating_add(index.saturating_mul(spacing))
        };
        Some(Point::new(
            step(self.x_start, i, self.x_spacing),
            step(self.y_start, j, self.y_spacing),
        ))
    }

    /// Iterates cell positions, `i` outer and `j` inner.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.columns())
            .flat_map(move |i| (0..self.rows()).filter_map(move |j| self.position(i, j)))
    }
}

/// Generator for tile positions
pub struct TileGenerator;

impl TileGenerator {
    /// Generate every cell position of a tile.
    pub fn generate(params: &TileParams) -> Vec<Point> {
        params.positions().collect()
    }
}
