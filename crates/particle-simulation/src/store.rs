//! Particle storage and grid seeding

use glam::Vec3;
use particle_physics::{validate_radius, Particle, PhysicsError, GRID_COLUMNS, GRID_SPACING};

/// Regular lattice used to seed particles
///
/// Index `i` walks x first, then z, then y, so `columns²` particles fill one
/// horizontal layer. Every axis is offset by `-columns / 2` slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    pub spacing: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            spacing: GRID_SPACING,
        }
    }
}

impl GridLayout {
    pub fn new(columns: u32, spacing: f32) -> Self {
        Self { columns, spacing }
    }

    /// World-space seed position of particle `index`
    pub fn position(&self, index: usize) -> Vec3 {
        let cols = self.columns.max(1) as usize;
        let layer = cols * cols;
        let offset = cols as f32 / 2.0;
        let slot = |n: usize| (n as f32 - offset) * self.spacing;

        Vec3::new(
            slot(index % cols),
            slot(index / layer),
            slot((index % layer) / cols),
        )
    }
}

/// Ordered particle collection
///
/// Indices are stable between regenerations so a renderer can keep a
/// parallel array of per-instance transforms.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded store with `count` resting particles on the grid
    pub fn seeded(count: usize, radius: f32, layout: &GridLayout) -> Result<Self, PhysicsError> {
        let mut store = Self::new();
        store.regenerate(count, radius, layout)?;
        Ok(store)
    }

    /// Replace every particle with a fresh grid-seeded one at rest.
    ///
    /// Nothing carries over from the previous contents.
    pub fn regenerate(
        &mut self,
        count: usize,
        radius: f32,
        layout: &GridLayout,
    ) -> Result<(), PhysicsError> {
        let radius = validate_radius(radius)?;
        self.particles = (0..count)
            .map(|i| Particle::new(layout.position(i), radius))
            .collect::<Result<_, _>>()?;
        log::debug!(
            "regenerated {} particles (radius {}, {} columns)",
            count,
            radius,
            layout.columns
        );
        Ok(())
    }

    /// Apply one radius to every particle.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), PhysicsError> {
        let radius = validate_radius(radius)?;
        for p in &mut self.particles {
            p.set_radius(radius)?;
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Raw instance data for a GPU vertex/storage buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }
}
