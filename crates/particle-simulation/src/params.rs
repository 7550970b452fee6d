//! Simulation parameters for runtime tuning
//!
//! These are the knobs a UI exposes as sliders. The whole struct is handed
//! to [`crate::Simulation::step`] every frame; per-frame values (gravity,
//! restitution, resolution passes, interaction strength) are read fresh on
//! each call, while structural values (count, radius, scale, grid) only take
//! effect through [`crate::Simulation::configure`].

use serde::{Deserialize, Serialize};

use particle_physics::{
    validate_radius, GRAVITY, GRID_COLUMNS, GRID_SPACING, INTERACTION_STRENGTH, PARTICLE_RADIUS,
    RESOLUTION_ITERATIONS, RESTITUTION,
};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravity magnitude, applied along -Y
    pub gravity: f32,
    pub particle_radius: f32,
    pub particle_count: u32,
    /// Multiplier on the grid footprint that sizes the container
    pub container_scale: f32,
    pub grid_columns: u32,
    pub grid_spacing: f32,
    /// Shared by wall and pair collisions
    pub restitution: f32,
    /// Pairwise passes per frame (0 disables particle-particle collisions)
    pub resolution_iterations: u32,
    pub interaction_strength: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            particle_radius: PARTICLE_RADIUS,
            particle_count: 400,
            container_scale: 1.0,
            grid_columns: GRID_COLUMNS,
            grid_spacing: GRID_SPACING,
            restitution: RESTITUTION,
            resolution_iterations: RESOLUTION_ITERATIONS,
            interaction_strength: INTERACTION_STRENGTH,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        validate_radius(self.particle_radius)?;
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticleCount);
        }
        if !(self.container_scale.is_finite() && self.container_scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.container_scale));
        }
        if self.grid_columns == 0 {
            return Err(ConfigError::ZeroGridColumns);
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(ConfigError::InvalidGridSpacing(self.grid_spacing));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        if !self.interaction_strength.is_finite() {
            return Err(ConfigError::InvalidInteractionStrength(
                self.interaction_strength,
            ));
        }
        Ok(())
    }

    /// Half extent of the cubic container: `columns / 2 * spacing * scale`
    pub fn container_half_extent(&self) -> f32 {
        self.grid_columns as f32 / 2.0 * self.grid_spacing * self.container_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use particle_physics::PhysicsError;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.gravity, 9.8);
        assert_eq!(config.restitution, 0.6);
        assert_eq!(config.resolution_iterations, 2);
        assert_eq!(config.interaction_strength, 100.0);
        assert_relative_eq!(config.container_half_extent(), 20.0);
    }

    #[test]
    fn scale_multiplies_half_extent() {
        let config = SimulationConfig {
            container_scale: 1.5,
            ..Default::default()
        };
        assert_relative_eq!(config.container_half_extent(), 30.0);
    }

    #[test]
    fn rejects_each_invalid_field() {
        let base = SimulationConfig::default();
        let cases = [
            (
                SimulationConfig { gravity: -1.0, ..base },
                ConfigError::InvalidGravity(-1.0),
            ),
            (
                SimulationConfig { particle_radius: 0.0, ..base },
                ConfigError::Physics(PhysicsError::InvalidRadius(0.0)),
            ),
            (
                SimulationConfig { particle_count: 0, ..base },
                ConfigError::ZeroParticleCount,
            ),
            (
                SimulationConfig { container_scale: 0.0, ..base },
                ConfigError::InvalidScale(0.0),
            ),
            (
                SimulationConfig { grid_columns: 0, ..base },
                ConfigError::ZeroGridColumns,
            ),
            (
                SimulationConfig { grid_spacing: -2.0, ..base },
                ConfigError::InvalidGridSpacing(-2.0),
            ),
            (
                SimulationConfig { restitution: 1.5, ..base },
                ConfigError::InvalidRestitution(1.5),
            ),
            (
                SimulationConfig { interaction_strength: f32::INFINITY, ..base },
                ConfigError::InvalidInteractionStrength(f32::INFINITY),
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn zero_gravity_and_zero_iterations_are_allowed() {
        let config = SimulationConfig {
            gravity: 0.0,
            resolution_iterations: 0,
            restitution: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
