//! Particle state shared by the physics passes and the renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::{validate_radius, PhysicsError};

/// Spherical point mass with a collision radius
///
/// Laid out for direct upload as per-instance data:
/// `position.xyz, radius, velocity.xyz, padding` (32 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position in world space
    pub position: Vec3,
    radius: f32,
    /// Velocity in world units per second
    pub velocity: Vec3,
    _padding: f32,
}

impl Particle {
    /// Create a particle at rest
    pub fn new(position: Vec3, radius: f32) -> Result<Self, PhysicsError> {
        Self::with_velocity(position, Vec3::ZERO, radius)
    }

    pub fn with_velocity(position: Vec3, velocity: Vec3, radius: f32) -> Result<Self, PhysicsError> {
        Ok(Self {
            position,
            radius: validate_radius(radius)?,
            velocity,
            _padding: 0.0,
        })
    }

    /// Collision radius, always positive
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), PhysicsError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Magnitude of the velocity, used for velocity colouring
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Kinetic energy assuming unit mass
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.velocity.length_squared()
    }
}
