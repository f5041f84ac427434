//! Orthogonal pipe router for P&ID generation
//!
//! Given placed equipment (rectangles with named ports) and a list of desired
//! connections, this library computes polyline paths between port pairs. It
//! prefers straight runs when the ports are aligned at grid resolution, falls
//! back to right-angle routing otherwise, and steers around the padded
//! bounding boxes of equipment using a coarse obstacle grid.
//!
//! Rendering (DXF/SVG/PNG), symbol libraries, and the UI that assembles
//! component selections are separate layers; this crate only turns a diagram
//! description into routed pipes with waypoints.
//!
//! # Example
//!
//! ```rust
//! use pid_router::{route, Component, Connection, Diagram};
//!
//! let diagram = Diagram {
//!     components: vec![
//!         Component::new("P-101", 0.0, 0.0, 20.0, 20.0),
//!         Component::new("V-201", 100.0, 0.0, 20.0, 20.0),
//!     ],
//!     connections: vec![Connection::process("P-101", "discharge", "V-201", "inlet")],
//! };
//!
//! let pipes = route(&diagram).unwrap();
//! assert_eq!(pipes.len(), 1);
//! // Centers share a grid row, so the run is a single straight segment
//! assert_eq!(pipes[0].waypoints.len(), 2);
//! ```

pub mod model;
pub mod router;

pub use model::{
    BoundingBox, Component, Connection, Diagram, LineCategory, Pipe, Point, PortOffset,
};
pub use router::{ConfigError, Router, RouterConfig, RouterError};

/// Route a diagram with the default configuration
///
/// This is the main entry point for the library: it builds the component
/// registry, rasterizes obstacles, and routes every connection.
pub fn route(diagram: &Diagram) -> Result<Vec<Pipe>, RouterError> {
    route_with_config(diagram, RouterConfig::default())
}

/// Route a diagram with a custom configuration
///
/// Fails only if the configuration is invalid; routing itself is total.
pub fn route_with_config(
    diagram: &Diagram,
    config: RouterConfig,
) -> Result<Vec<Pipe>, RouterError> {
    let router = Router::new(config)?;
    Ok(router.route_diagram(diagram))
}
