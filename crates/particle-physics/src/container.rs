//! Axis-aligned box that keeps particles inside

use glam::Vec3;

use crate::constants::RESTITUTION;
use crate::error::PhysicsError;
use crate::particle::Particle;

/// Axis-aligned rectangular container
///
/// Bounds are validated on construction, so `min[i] < max[i]` holds for
/// every axis of every `Container` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    min: Vec3,
    max: Vec3,
    restitution: f32,
}

impl Container {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, PhysicsError> {
        for axis in 0..3 {
            let (lo, hi) = (min[axis], max[axis]);
            if lo.is_nan() || hi.is_nan() || lo >= hi {
                return Err(PhysicsError::InvalidBounds {
                    axis,
                    min: min[axis],
                    max: max[axis],
                });
            }
        }
        Ok(Self {
            min,
            max,
            restitution: RESTITUTION,
        })
    }

    /// Cube centred on the origin spanning `-half_extent..half_extent`
    pub fn cube(half_extent: f32) -> Result<Self, PhysicsError> {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(PhysicsError::InvalidExtent(half_extent));
        }
        Self::new(Vec3::splat(-half_extent), Vec3::splat(half_extent))
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Clamp a particle back inside the walls and reflect its velocity.
    ///
    /// Axes are handled independently, so a particle pushed into a corner has
    /// every offending component corrected in one call. The reflected
    /// component always points back into the box and is scaled by the
    /// restitution. A radius of at least half the extent on an axis clamps
    /// against the max wall into an inverted range; that is left to the
    /// caller.
    ///
    /// Returns `true` if any axis was corrected.
    pub fn collide(&self, particle: &mut Particle) -> bool {
        let r = particle.radius();
        let mut hit = false;
        for axis in 0..3 {
            let p = particle.position[axis];
            if p - r < self.min[axis] {
                particle.position[axis] = self.min[axis] + r;
                particle.velocity[axis] = particle.velocity[axis].abs() * self.restitution;
                hit = true;
            } else if p + r > self.max[axis] {
                particle.position[axis] = self.max[axis] - r;
                particle.velocity[axis] = -particle.velocity[axis].abs() * self.restitution;
                hit = true;
            }
        }
        hit
    }

    /// Slab test of a ray against the box.
    ///
    /// Returns the distance along `direction` to the nearest intersection in
    /// front of the origin: the entry point when the origin is outside, the
    /// exit point when it is inside, `None` on a miss, when the box lies
    /// behind the ray, or when `direction` has zero length.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let inv = direction.recip();
        let t1 = (self.min - origin) * inv;
        let t2 = (self.max - origin) * inv;

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            let (lo, hi) = if t1[axis] <= t2[axis] {
                (t1[axis], t2[axis])
            } else {
                (t2[axis], t1[axis])
            };
            // NaN appears when the ray is parallel and starts on a slab plane
            if lo.is_nan() || hi.is_nan() {
                continue;
            }
            if t_near > hi || lo > t_far {
                return None;
            }
            t_near = t_near.max(lo);
            t_far = t_far.min(hi);
        }

        // A zero-length direction from inside the box yields an infinite exit
        let t = if t_near >= 0.0 { t_near } else { t_far };
        (t >= 0.0 && t.is_finite()).then_some(t)
    }
}

/// Run the wall check for every particle.
///
/// Returns how many particles were corrected.
pub fn apply_container_collisions(particles: &mut [Particle], container: &Container) -> usize {
    particles
        .iter_mut()
        .map(|p| container.collide(p))
        .filter(|&hit| hit)
        .count()
}
