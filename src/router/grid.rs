//! Coarse grid discretization
//!
//! Both alignment classification and obstacle rasterization work on grid
//! cells rather than raw coordinates, so the router only ever compares
//! integer cell indices.

use crate::model::Point;

/// A discretized unit of 2D space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Maps continuous coordinates to grid cells at a fixed cell size
///
/// The cell size is validated at router construction; a `Grid` always holds
/// a positive cell size.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    cell_size: f64,
}

impl Grid {
    pub(crate) fn new(cell_size: f64) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid cell containing a point, using floor division
    ///
    /// Floor (not truncation) keeps negative coordinates on the correct side
    /// of the origin: (-20, -20) at cell size 10 maps to (-2, -2).
    pub fn cell(&self, point: Point) -> GridCell {
        GridCell {
            x: (point.x / self.cell_size).floor() as i64,
            y: (point.y / self.cell_size).floor() as i64,
        }
    }
}
