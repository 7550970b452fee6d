//! User-driven push/pull field
//!
//! The field is a pure velocity perturbation of constant magnitude toward
//! (pull) or away from (push) a target point. It is not limited in range:
//! every particle outside the dead zone is affected.

use glam::Vec3;

use crate::constants::INTERACTION_DEAD_ZONE;
use crate::particle::Particle;

/// Direction of the interaction field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    /// Accelerate particles away from the target
    #[default]
    Push,
    /// Accelerate particles toward the target
    Pull,
}

impl InteractionMode {
    /// +1 for pull, -1 for push
    pub fn sign(self) -> f32 {
        match self {
            InteractionMode::Push => -1.0,
            InteractionMode::Pull => 1.0,
        }
    }
}

/// Unit direction of the field acting on a particle at `position`,
/// or `None` inside the dead zone around `point`.
pub fn interaction_direction(position: Vec3, point: Vec3, mode: InteractionMode) -> Option<Vec3> {
    let toward = point - position;
    let dist = toward.length();
    if dist <= INTERACTION_DEAD_ZONE {
        return None;
    }
    Some(toward / dist * mode.sign())
}

/// `v += dir * strength * dt` for every particle outside the dead zone.
///
/// Returns the number of particles affected.
pub fn apply_interaction(
    particles: &mut [Particle],
    point: Vec3,
    mode: InteractionMode,
    strength: f32,
    dt: f32,
) -> usize {
    let scale = strength * dt;
    let mut affected = 0;
    for p in particles.iter_mut() {
        if let Some(dir) = interaction_direction(p.position, point, mode) {
            p.velocity += dir * scale;
            affected += 1;
        }
    }
    affected
}
