//! Default physical constants for the particle box
//!
//! Values are tuned for a real-time interactive scene rather than physical
//! units: lengths are in world units, time in seconds.

/// Default gravitational acceleration magnitude (applied along -Y)
pub const GRAVITY: f32 = 9.8;

/// Fraction of normal speed kept after a wall or particle collision
pub const RESTITUTION: f32 = 0.6;

/// Number of pairwise resolution passes per frame
///
/// Two passes tighten packing and reduce residual interpenetration at the
/// cost of extra damping.
pub const RESOLUTION_ITERATIONS: u32 = 2;

/// Acceleration applied by the push/pull interaction field (units/s²)
pub const INTERACTION_STRENGTH: f32 = 100.0;

/// Particles closer than this to the interaction point are left alone
pub const INTERACTION_DEAD_ZONE: f32 = 0.01;

/// Default particle radius
pub const PARTICLE_RADIUS: f32 = 1.0;

// Grid seeding
/// Columns per grid row when regenerating particles
pub const GRID_COLUMNS: u32 = 20;

/// Distance between neighbouring grid slots
pub const GRID_SPACING: f32 = 2.0;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn restitution_is_dissipative() {
        assert!(RESTITUTION > 0.0 && RESTITUTION < 1.0);
        assert_relative_eq!(RESTITUTION, 0.6, epsilon = TOLERANCE);
    }

    #[test]
    fn default_grid_spans_forty_units() {
        let span = GRID_COLUMNS as f32 * GRID_SPACING;
        assert_relative_eq!(span, 40.0, epsilon = TOLERANCE);
    }

    #[test]
    fn dead_zone_is_smaller_than_particles() {
        assert!(INTERACTION_DEAD_ZONE < PARTICLE_RADIUS);
    }
}
