//! Data model for P&ID routing
//!
//! Components, connections, and routed pipes are plain record types with
//! required fields. They are built once during diagram assembly and treated
//! as immutable for the duration of a routing pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A 2D point in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a placed component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// A named attachment point, stored as an offset from the component origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PortOffset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A placed equipment item with named ports
///
/// Ports are optional: a connection naming a port that is absent resolves to
/// the component's geometric center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub ports: HashMap<String, PortOffset>,
}

impl Component {
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            ports: HashMap::new(),
        }
    }

    /// Add a named port at an offset from the component origin
    pub fn with_port(mut self, name: impl Into<String>, dx: f64, dy: f64) -> Self {
        self.ports.insert(name.into(), PortOffset::new(dx, dy));
        self
    }

    /// Bounding box of the component
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    /// Geometric center of the component
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Resolve a named port to drawing coordinates
    ///
    /// Falls back to the component center when the port is not defined.
    pub fn port_position(&self, name: &str) -> Point {
        match self.ports.get(name) {
            Some(offset) => Point::new(self.x + offset.dx, self.y + offset.dy),
            None => self.center(),
        }
    }
}

/// Category tag for a connection, consumed downstream for line styling
///
/// The router is agnostic to category; it is carried through to the pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    #[default]
    Process,
    Instrument,
    Electrical,
    Pneumatic,
    Utility,
}

/// A desired connection between two named ports on named components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    #[serde(default = "default_from_port")]
    pub from_port: String,
    pub to: String,
    #[serde(default = "default_to_port")]
    pub to_port: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub category: LineCategory,
}

fn default_from_port() -> String {
    "outlet".to_string()
}

fn default_to_port() -> String {
    "inlet".to_string()
}

impl Connection {
    pub fn new(
        from: impl Into<String>,
        from_port: impl Into<String>,
        to: impl Into<String>,
        to_port: impl Into<String>,
        label: impl Into<String>,
        category: LineCategory,
    ) -> Self {
        Self {
            from: from.into(),
            from_port: from_port.into(),
            to: to.into(),
            to_port: to_port.into(),
            label: label.into(),
            category,
        }
    }

    /// Unlabeled process line between two ports
    pub fn process(
        from: impl Into<String>,
        from_port: impl Into<String>,
        to: impl Into<String>,
        to_port: impl Into<String>,
    ) -> Self {
        Self::new(from, from_port, to, to_port, "", LineCategory::Process)
    }
}

/// A routed connection: the connection metadata plus its waypoint polyline
///
/// Waypoints always contain at least the start and end point. Pipes are built
/// once per diagram generation and are immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub from: String,
    pub from_port: String,
    pub to: String,
    pub to_port: String,
    pub label: String,
    pub category: LineCategory,
    pub waypoints: Vec<Point>,
}

/// A complete diagram description: placed components plus desired connections
///
/// This is the serializable input format consumed by the CLI and handed to
/// the router by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Diagram {
    /// Build the component registry keyed by identifier
    ///
    /// Later components win on duplicate ids.
    pub fn registry(&self) -> HashMap<String, Component> {
        self.components
            .iter()
            .map(|c| (c.id.clone(), c.clone()))
            .collect()
    }
}
