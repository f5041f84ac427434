//! Orthogonal pipe routing
//!
//! This module takes a component registry and a connection list and produces
//! routed pipes with waypoint polylines. The obstacle set is built once per
//! pass from the full registry, reused read-only for every connection, and
//! never updated with routed pipes.

pub mod config;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod path;

pub use config::{ConfigError, RouterConfig};
pub use error::RouterError;
pub use grid::{Grid, GridCell};
pub use obstacles::ObstacleSet;
pub use path::Alignment;

use std::collections::HashMap;

use crate::model::{Component, Connection, Diagram, Pipe};

/// Pipe router with validated configuration
///
/// Construction fails fast on non-positive cell size or padding; after that
/// every routing operation is total. A `Router` holds no mutable state, so
/// concurrent diagram requests can each construct their own or share one
/// behind a reference.
#[derive(Debug, Clone)]
pub struct Router {
    grid: Grid,
    padding: f64,
}

impl Router {
    /// Create a router, validating the configuration
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        if !config.cell_size.is_finite() || config.cell_size <= 0.0 {
            return Err(RouterError::InvalidCellSize {
                value: config.cell_size,
            });
        }
        if !config.padding.is_finite() || config.padding <= 0.0 {
            return Err(RouterError::InvalidPadding {
                value: config.padding,
            });
        }
        Ok(Self {
            grid: Grid::new(config.cell_size),
            padding: config.padding,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Rasterize a component registry into an obstacle set
    pub fn build_obstacles(&self, components: &HashMap<String, Component>) -> ObstacleSet {
        ObstacleSet::build(components.values(), &self.grid, self.padding)
    }

    /// Route every connection against a component registry
    ///
    /// Connections referencing an unknown component id are skipped, which
    /// preserves partial-diagram generation when the user's selection omits
    /// some equipment. Unknown port names resolve to the component center.
    pub fn route_all(
        &self,
        components: &HashMap<String, Component>,
        connections: &[Connection],
    ) -> Vec<Pipe> {
        let obstacles = self.build_obstacles(components);

        connections
            .iter()
            .filter_map(|conn| {
                let from = components.get(&conn.from)?;
                let to = components.get(&conn.to)?;

                let start = from.port_position(&conn.from_port);
                let end = to.port_position(&conn.to_port);
                let waypoints = path::route(&self.grid, &obstacles, start, end);

                Some(Pipe {
                    from: conn.from.clone(),
                    from_port: conn.from_port.clone(),
                    to: conn.to.clone(),
                    to_port: conn.to_port.clone(),
                    label: conn.label.clone(),
                    category: conn.category,
                    waypoints,
                })
            })
            .collect()
    }

    /// Route a whole diagram description
    pub fn route_diagram(&self, diagram: &Diagram) -> Vec<Pipe> {
        self.route_all(&diagram.registry(), &diagram.connections)
    }
}
