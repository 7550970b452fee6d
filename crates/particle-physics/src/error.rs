//! Error types for constructing physics primitives.

use std::fmt;

/// Errors raised when a particle or container would violate its invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Particle radius must be finite and strictly positive.
    InvalidRadius(f32),
    /// Container corners must satisfy `min < max` on every axis.
    InvalidBounds {
        axis: usize,
        min: f32,
        max: f32,
    },
    /// Cube half extent must be finite and strictly positive.
    InvalidExtent(f32),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius(r) => {
                write!(f, "particle radius must be positive and finite, got {}", r)
            }
            PhysicsError::InvalidBounds { axis, min, max } => write!(
                f,
                "container bounds are degenerate on axis {}: min {} is not below max {}",
                axis, min, max
            ),
            PhysicsError::InvalidExtent(h) => {
                write!(f, "container half extent must be positive and finite, got {}", h)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Checks the particle radius invariant.
pub fn validate_radius(radius: f32) -> Result<f32, PhysicsError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(PhysicsError::InvalidRadius(radius))
    }
}
