//! Particle-particle collision response
//!
//! Every unordered pair is narrow-tested directly; there is no broad phase,
//! so a pass is O(n²). A uniform grid or BVH in front of `resolve_pairs`
//! would be the place to prune pairs for large swarms.

use glam::Vec3;

use crate::constants::{RESOLUTION_ITERATIONS, RESTITUTION};
use crate::particle::Particle;

/// Separation + impulse resolver for overlapping particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResolver {
    pub restitution: f32,
    /// Full passes over all pairs per call to [`CollisionResolver::apply`]
    pub iterations: u32,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self {
            restitution: RESTITUTION,
            iterations: RESOLUTION_ITERATIONS,
        }
    }
}

impl CollisionResolver {
    pub fn new(restitution: f32, iterations: u32) -> Self {
        Self {
            restitution,
            iterations,
        }
    }

    /// Run `iterations` resolution passes.
    ///
    /// Returns the number of overlapping pairs seen across all passes.
    pub fn apply(&self, particles: &mut [Particle]) -> usize {
        (0..self.iterations)
            .map(|_| self.resolve_pairs(particles))
            .sum()
    }

    /// One pass over all pairs `(i, j)` with `i < j`, in index order.
    ///
    /// Overlapping pairs are pushed apart symmetrically along the contact
    /// normal by the full overlap. Approaching pairs additionally receive an
    /// equal-mass impulse; pairs already separating keep their velocities.
    pub fn resolve_pairs(&self, particles: &mut [Particle]) -> usize {
        let mut contacts = 0;
        for i in 0..particles.len() {
            let (head, tail) = particles.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if self.resolve(a, b) {
                    contacts += 1;
                }
            }
        }
        contacts
    }

    fn resolve(&self, a: &mut Particle, b: &mut Particle) -> bool {
        let delta = b.position - a.position;
        let dist2 = delta.length_squared();
        let r_sum = a.radius() + b.radius();
        if dist2 >= r_sum * r_sum {
            return false;
        }

        // Coincident centres: fall back to r_sum, which zeroes both the
        // normal and the overlap for this pair
        let dist = match dist2.sqrt() {
            d if d == 0.0 => r_sum,
            d => d,
        };
        let normal = delta / dist;

        let correction = normal * ((r_sum - dist) * 0.5);
        a.position -= correction;
        b.position += correction;

        let vel_along_normal = (b.velocity - a.velocity).dot(normal);
        if vel_along_normal > 0.0 {
            return true;
        }

        let impulse = -(1.0 + self.restitution) * vel_along_normal / 2.0;
        let dv: Vec3 = normal * impulse;
        a.velocity -= dv;
        b.velocity += dv;
        true
    }
}

/// Single resolution pass with the given restitution.
pub fn apply_particle_collisions(particles: &mut [Particle], restitution: f32) -> usize {
    CollisionResolver::new(restitution, 1).resolve_pairs(particles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn pair(dist: f32, va: Vec3, vb: Vec3) -> Vec<Particle> {
        vec![
            Particle::with_velocity(Vec3::new(-dist / 2.0, 0.0, 0.0), va, 1.0).unwrap(),
            Particle::with_velocity(Vec3::new(dist / 2.0, 0.0, 0.0), vb, 1.0).unwrap(),
        ]
    }

    fn gap(ps: &[Particle]) -> f32 {
        ps[0].position.distance(ps[1].position)
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut ps = pair(2.5, Vec3::X, -Vec3::X);
        let before = ps.clone();
        assert_eq!(apply_particle_collisions(&mut ps, RESTITUTION), 0);
        assert_eq!(ps, before);
    }

    #[test]
    fn touching_pair_is_not_a_contact() {
        let mut ps = pair(2.0, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(apply_particle_collisions(&mut ps, RESTITUTION), 0);
    }

    #[test]
    fn overlap_is_removed_symmetrically() {
        let mut ps = pair(1.5, Vec3::ZERO, Vec3::ZERO);
        let com_before = (ps[0].position + ps[1].position) / 2.0;

        assert_eq!(apply_particle_collisions(&mut ps, RESTITUTION), 1);

        assert_relative_eq!(gap(&ps), 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(ps[0].position.x, -1.0, epsilon = TOLERANCE);
        assert_relative_eq!(ps[1].position.x, 1.0, epsilon = TOLERANCE);
        let com_after = (ps[0].position + ps[1].position) / 2.0;
        assert!(com_after.abs_diff_eq(com_before, TOLERANCE));
        // Resting pair gets no impulse
        assert_eq!(ps[0].velocity, Vec3::ZERO);
        assert_eq!(ps[1].velocity, Vec3::ZERO);
    }

    #[test]
    fn approaching_pair_gets_restitution_impulse() {
        let mut ps = pair(1.8, Vec3::new(2.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0));
        apply_particle_collisions(&mut ps, RESTITUTION);

        // vn = -4, j = 1.6 * 4 / 2 = 3.2
        assert_relative_eq!(ps[0].velocity.x, -1.2, epsilon = TOLERANCE);
        assert_relative_eq!(ps[1].velocity.x, 1.2, epsilon = TOLERANCE);
        let vn_after = (ps[1].velocity - ps[0].velocity).x;
        assert_relative_eq!(vn_after, 4.0 * RESTITUTION, epsilon = TOLERANCE);
    }

    #[test]
    fn impulse_conserves_momentum() {
        let va = Vec3::new(3.0, -1.0, 0.5);
        let vb = Vec3::new(-2.0, 4.0, -1.5);
        let mut ps = vec![
            Particle::with_velocity(Vec3::new(0.0, 0.0, 0.0), va, 0.7).unwrap(),
            Particle::with_velocity(Vec3::new(0.6, 0.4, -0.2), vb, 0.9).unwrap(),
        ];
        let before = va + vb;
        apply_particle_collisions(&mut ps, RESTITUTION);
        let after = ps[0].velocity + ps[1].velocity;
        assert!(after.abs_diff_eq(before, TOLERANCE), "{after} != {before}");
        // And the velocities did change
        assert!(!ps[0].velocity.abs_diff_eq(va, TOLERANCE));
    }

    #[test]
    fn separating_pair_keeps_velocity_but_is_pushed_apart() {
        let va = Vec3::new(-1.0, 0.5, 0.0);
        let vb = Vec3::new(1.0, 0.5, 0.0);
        let mut ps = pair(1.0, va, vb);

        assert_eq!(apply_particle_collisions(&mut ps, RESTITUTION), 1);
        assert_eq!(ps[0].velocity, va);
        assert_eq!(ps[1].velocity, vb);
        assert_relative_eq!(gap(&ps), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn shortfall_shrinks_monotonically() {
        // Three particles squeezed on a line so a single pass cannot settle them
        let mut ps: Vec<Particle> = [-0.4, 0.0, 0.5]
            .iter()
            .map(|&x| Particle::new(Vec3::new(x, 0.0, 0.0), 1.0).unwrap())
            .collect();

        let shortfall = |ps: &[Particle]| -> f32 {
            let mut total = 0.0;
            for i in 0..ps.len() {
                for j in (i + 1)..ps.len() {
                    let d = ps[i].position.distance(ps[j].position);
                    total += (2.0 - d).max(0.0);
                }
            }
            total
        };

        let mut previous = shortfall(&ps);
        for _ in 0..50 {
            apply_particle_collisions(&mut ps, RESTITUTION);
            let current = shortfall(&ps);
            assert!(current.is_finite());
            assert!(current <= previous + TOLERANCE, "{current} > {previous}");
            previous = current;
        }
        assert!(previous < 1e-3, "residual overlap {previous}");
    }

    #[test]
    fn coincident_particles_do_not_produce_nan() {
        let mut ps = vec![
            Particle::with_velocity(Vec3::ONE, Vec3::X, 1.0).unwrap(),
            Particle::with_velocity(Vec3::ONE, -Vec3::X, 1.0).unwrap(),
        ];
        assert_eq!(apply_particle_collisions(&mut ps, RESTITUTION), 1);
        for p in &ps {
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
        }
        // Zero normal: the pair is left exactly where it was
        assert_eq!(ps[0].position, Vec3::ONE);
        assert_eq!(ps[0].velocity, Vec3::X);
    }

    #[test]
    fn iterations_control_pass_count() {
        let mut ps = pair(1.5, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(CollisionResolver::new(RESTITUTION, 0).apply(&mut ps), 0);
        assert_relative_eq!(gap(&ps), 1.5, epsilon = TOLERANCE);

        // Second default pass finds the pair already separated
        let resolver = CollisionResolver::default();
        assert_eq!(resolver.iterations, 2);
        assert_eq!(resolver.apply(&mut ps), 1);
    }
}
