//! Obstacle grid construction
//!
//! Every component's bounding box, expanded by the configured padding, is
//! rasterized into grid cells. The result is a plain union: a cell is just
//! "blocked", with no record of which component blocked it. Small components
//! whose padding overlaps merge into a single blocked region, which is
//! intentionally coarse.

use std::collections::HashSet;

use crate::model::{Component, Point};

use super::grid::{Grid, GridCell};

/// The set of grid cells considered blocked for pipe routing
///
/// Built once per diagram-generation pass from the full component registry
/// and reused read-only for every connection in that pass. Routed pipes are
/// never added back in, so later pipes may overlap earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    cells: HashSet<GridCell>,
}

impl ObstacleSet {
    /// Rasterize all components into an obstacle set
    pub fn build<'a>(
        components: impl IntoIterator<Item = &'a Component>,
        grid: &Grid,
        padding: f64,
    ) -> Self {
        let mut set = Self::default();
        for component in components {
            set.block_component(component, grid, padding);
        }
        set
    }

    /// Block the padded bounding box of a single component
    pub fn block_component(&mut self, component: &Component, grid: &Grid, padding: f64) {
        let bounds = component.bounds();
        let lo = grid.cell(Point::new(bounds.x - padding, bounds.y - padding));
        let hi = grid.cell(Point::new(bounds.right() + padding, bounds.bottom() + padding));

        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                self.cells.insert(GridCell::new(x, y));
            }
        }
    }

    /// Block a single cell
    ///
    /// Lets callers reserve regions outside any component, such as title
    /// blocks or legend areas.
    pub fn block(&mut self, cell: GridCell) {
        self.cells.insert(cell);
    }

    /// Whether a cell is blocked
    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of blocked cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
