//! Read-only measurements over a particle slice, for logging and tests

use particle_physics::{Container, Particle};

/// Summary of one call to [`crate::Simulation::step`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Frame number after the step
    pub frame: u64,
    /// Particles corrected by the wall pass
    pub wall_contacts: usize,
    /// Overlapping pairs across all resolution passes
    pub pair_contacts: usize,
    /// Particles pushed or pulled by the interaction field
    pub interacted: usize,
}

/// Total kinetic energy with unit mass per particle
pub fn kinetic_energy(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

pub fn max_speed(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::speed).fold(0.0, f32::max)
}

/// Deepest overlap between any two particles (O(n²))
pub fn max_penetration(particles: &[Particle]) -> f32 {
    let mut deepest = 0.0_f32;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let overlap = a.radius() + b.radius() - a.position.distance(b.position);
            deepest = deepest.max(overlap);
        }
    }
    deepest
}

/// Number of particles whose sphere pokes through a wall by more than `tolerance`
pub fn containment_violations(particles: &[Particle], container: &Container, tolerance: f32) -> usize {
    particles
        .iter()
        .filter(|p| {
            let r = p.radius();
            (0..3).any(|axis| {
                p.position[axis] - r < container.min()[axis] - tolerance
                    || p.position[axis] + r > container.max()[axis] + tolerance
            })
        })
        .count()
}
