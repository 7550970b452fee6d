//! Errors raised by configuration events.

use std::fmt;

use particle_physics::PhysicsError;

/// Rejected simulation configuration.
///
/// The simulation state is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Gravity magnitude must be finite and non-negative.
    InvalidGravity(f32),
    /// Particle count must be at least one.
    ZeroParticleCount,
    /// Container scale must be finite and strictly positive.
    InvalidScale(f32),
    /// Grid must have at least one column.
    ZeroGridColumns,
    /// Grid spacing must be finite and strictly positive.
    InvalidGridSpacing(f32),
    /// Restitution must lie in `[0, 1]`.
    InvalidRestitution(f32),
    /// Interaction strength must be finite.
    InvalidInteractionStrength(f32),
    /// A particle or container invariant would be violated.
    Physics(PhysicsError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGravity(g) => {
                write!(f, "gravity must be non-negative and finite, got {}", g)
            }
            ConfigError::ZeroParticleCount => write!(f, "particle count must be at least 1"),
            ConfigError::InvalidScale(s) => {
                write!(f, "container scale must be positive and finite, got {}", s)
            }
            ConfigError::ZeroGridColumns => write!(f, "grid must have at least one column"),
            ConfigError::InvalidGridSpacing(s) => {
                write!(f, "grid spacing must be positive and finite, got {}", s)
            }
            ConfigError::InvalidRestitution(r) => {
                write!(f, "restitution must be within [0, 1], got {}", r)
            }
            ConfigError::InvalidInteractionStrength(s) => {
                write!(f, "interaction strength must be finite, got {}", s)
            }
            ConfigError::Physics(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Physics(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PhysicsError> for ConfigError {
    fn from(e: PhysicsError) -> Self {
        ConfigError::Physics(e)
    }
}
