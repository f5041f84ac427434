//! Configuration for the pipe router

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a router configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for a router instance
///
/// Both values must be positive; `Router::new` rejects anything else rather
/// than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Edge length of one grid cell in drawing units
    pub cell_size: f64,

    /// Margin added around each component's bounding box before rasterizing
    /// it into the obstacle set
    pub padding: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            padding: 20.0,
        }
    }
}

impl RouterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid cell size
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the obstacle padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
