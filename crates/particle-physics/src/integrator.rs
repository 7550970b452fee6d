//! Explicit Euler integration driven by wall-clock frame time
//!
//! Velocities are kicked by gravity first and positions advanced with the
//! updated velocity. `dt` is used as given: there is no substepping and no
//! clamping, so a long stall between frames can carry fast particles
//! through a wall or through each other.

use glam::Vec3;

use crate::particle::Particle;

/// Gravity vector for a magnitude acting along -Y
pub fn gravity_vector(magnitude: f32) -> Vec3 {
    Vec3::new(0.0, -magnitude, 0.0)
}

/// `v += (0, -g, 0) * dt` for every particle
pub fn apply_gravity(particles: &mut [Particle], gravity_magnitude: f32, dt: f32) {
    let dv = gravity_vector(gravity_magnitude) * dt;
    for p in particles.iter_mut() {
        p.velocity += dv;
    }
}

/// `p += v * dt` for every particle
pub fn integrate_positions(particles: &mut [Particle], dt: f32) {
    for p in particles.iter_mut() {
        p.position += p.velocity * dt;
    }
}

/// Gravity kick followed by the position update.
pub fn integrate(particles: &mut [Particle], gravity_magnitude: f32, dt: f32) {
    apply_gravity(particles, gravity_magnitude, dt);
    integrate_positions(particles, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn free_fall_single_step() {
        let mut ps = vec![Particle::new(Vec3::ZERO, 1.0).unwrap()];
        integrate(&mut ps, 9.8, 0.1);

        assert_relative_eq!(ps[0].velocity.x, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(ps[0].velocity.y, -0.98, epsilon = TOLERANCE);
        assert_relative_eq!(ps[0].velocity.z, 0.0, epsilon = TOLERANCE);
        // Position uses the kicked velocity
        assert_relative_eq!(ps[0].position.y, -0.098, epsilon = TOLERANCE);
    }

    #[test]
    fn zero_gravity_is_inertial() {
        let v = Vec3::new(1.0, 2.0, -3.0);
        let mut ps = vec![Particle::with_velocity(Vec3::ONE, v, 1.0).unwrap()];
        integrate(&mut ps, 0.0, 0.5);
        assert_eq!(ps[0].velocity, v);
        assert!(ps[0].position.abs_diff_eq(Vec3::new(1.5, 2.0, -0.5), TOLERANCE));
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let before = Particle::with_velocity(Vec3::ONE, Vec3::X, 1.0).unwrap();
        let mut ps = vec![before];
        integrate(&mut ps, 9.8, 0.0);
        assert_eq!(ps[0], before);
    }

    #[test]
    fn gravity_points_down() {
        assert_eq!(gravity_vector(2.0), Vec3::new(0.0, -2.0, 0.0));
    }
}
