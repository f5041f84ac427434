//! Error types for the pipe router

use thiserror::Error;

/// Errors that can occur at router construction
///
/// Routing itself is total: unknown component ids are skipped and blocked
/// layouts fall back to a deterministic path, so only invalid configuration
/// is fatal.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Grid cell size must be a positive finite number
    #[error("grid cell size must be positive, got {value}")]
    InvalidCellSize { value: f64 },

    /// Obstacle padding must be a positive finite number
    #[error("obstacle padding must be positive, got {value}")]
    InvalidPadding { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouterError::InvalidCellSize { value: -1.0 };
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("cell size"));

        let err = RouterError::InvalidPadding { value: 0.0 };
        assert!(err.to_string().contains("padding"));
    }
}
