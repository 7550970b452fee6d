//! Frame-driven particle box simulation
//!
//! One [`Simulation::step`] per rendered frame, in this order:
//! gravity, position integration, wall collisions, pairwise collisions
//! (`resolution_iterations` passes), interaction field. The renderer reads
//! [`Simulation::particles`] between steps.

use particle_physics::{
    apply_container_collisions, apply_interaction, integrate, CollisionResolver, Container,
    Particle,
};

use crate::diagnostics::StepReport;
use crate::error::ConfigError;
use crate::interaction::InteractionState;
use crate::params::SimulationConfig;
use crate::store::{GridLayout, ParticleStore};

/// Which configuration events fired during [`Simulation::configure`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigChanges {
    pub regenerated: bool,
    pub radius_changed: bool,
    pub container_replaced: bool,
}

impl ConfigChanges {
    pub fn any(&self) -> bool {
        self.regenerated || self.radius_changed || self.container_replaced
    }
}

/// Particle box: owns the particle store and the container
pub struct Simulation {
    store: ParticleStore,
    container: Container,
    layout: GridLayout,
    particle_radius: f32,
    /// Structural settings last applied through `new`/`configure`/setters
    applied: SimulationConfig,
    frame: u64,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        log::info!("Initializing particle box simulation...");
        config.validate()?;

        let layout = GridLayout::new(config.grid_columns, config.grid_spacing);
        let container = Self::build_container(config)?;
        let store =
            ParticleStore::seeded(config.particle_count as usize, config.particle_radius, &layout)?;

        log::info!(
            "✓ {} particles (radius {:.2}) in a box of half extent {:.1}",
            store.len(),
            config.particle_radius,
            config.container_half_extent()
        );
        warn_if_oversized(config.particle_radius, &container);

        Ok(Self {
            store,
            container,
            layout,
            particle_radius: config.particle_radius,
            applied: *config,
            frame: 0,
        })
    }

    fn build_container(config: &SimulationConfig) -> Result<Container, ConfigError> {
        Ok(Container::cube(config.container_half_extent())?.with_restitution(config.restitution))
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Gravity, restitution, resolution passes and interaction strength are
    /// taken from `config` on every call, so they may change between frames.
    /// The config is assumed valid; structural fields are ignored here.
    pub fn step(
        &mut self,
        dt: f32,
        config: &SimulationConfig,
        interaction: &InteractionState,
    ) -> StepReport {
        let container = self.container.with_restitution(config.restitution);
        let resolver = CollisionResolver::new(config.restitution, config.resolution_iterations);
        let particles = self.store.particles_mut();

        integrate(particles, config.gravity, dt);
        let wall_contacts = apply_container_collisions(particles, &container);
        let pair_contacts = resolver.apply(particles);

        let interacted = if interaction.active {
            apply_interaction(
                particles,
                interaction.point,
                interaction.mode,
                config.interaction_strength,
                dt,
            )
        } else {
            0
        };

        self.frame += 1;
        StepReport {
            frame: self.frame,
            wall_contacts,
            pair_contacts,
            interacted,
        }
    }

    /// Apply the structural parts of `config` that differ from the current
    /// state.
    ///
    /// A count change regenerates the whole store, a radius change resizes
    /// every particle, and any change to scale or grid that alters the half
    /// extent replaces the container. Nothing is modified if the config is invalid.
    pub fn configure(&mut self, config: &SimulationConfig) -> Result<ConfigChanges, ConfigError> {
        config.validate()?;
        let mut changes = ConfigChanges::default();
        let previous = self.applied;

        let layout = GridLayout::new(config.grid_columns, config.grid_spacing);
        // Restitution is read per step, so only the extent replaces the box
        let container_changed = config.container_half_extent() != previous.container_half_extent();
        // Build first so a failure leaves the old container in place
        let container = if container_changed {
            Some(Self::build_container(config)?)
        } else {
            None
        };

        if config.particle_count != previous.particle_count || layout != self.layout {
            self.layout = layout;
            self.store
                .regenerate(config.particle_count as usize, config.particle_radius, &layout)?;
            self.particle_radius = config.particle_radius;
            changes.regenerated = true;
            log::info!("Regenerated {} particles", self.store.len());
        } else if config.particle_radius != self.particle_radius {
            self.store.set_radius(config.particle_radius)?;
            self.particle_radius = config.particle_radius;
            changes.radius_changed = true;
            log::info!("Particle radius set to {:.2}", self.particle_radius);
        }

        if let Some(container) = container {
            self.container = container;
            changes.container_replaced = true;
            log::info!(
                "Container replaced (half extent {:.1})",
                config.container_half_extent()
            );
        }

        if changes.any() {
            warn_if_oversized(self.particle_radius, &self.container);
        }
        self.applied = *config;
        Ok(changes)
    }

    /// Regenerate the store with `count` particles at the current radius.
    pub fn set_particle_count(&mut self, count: u32) -> Result<(), ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroParticleCount);
        }
        self.store
            .regenerate(count as usize, self.particle_radius, &self.layout)?;
        self.applied.particle_count = count;
        log::info!("Regenerated {} particles", count);
        Ok(())
    }

    /// Resize every particle.
    pub fn set_particle_radius(&mut self, radius: f32) -> Result<(), ConfigError> {
        self.store.set_radius(radius)?;
        self.particle_radius = radius;
        self.applied.particle_radius = radius;
        warn_if_oversized(radius, &self.container);
        Ok(())
    }

    /// Replace the container with the cube `(-h, -h, -h)..(h, h, h)`.
    pub fn set_container_extent(&mut self, half_extent: f32) -> Result<(), ConfigError> {
        let container =
            Container::cube(half_extent)?.with_restitution(self.container.restitution());
        self.container = container;
        // Keep `configure` diffing against the box that is actually in use
        self.applied.container_scale = half_extent
            / (self.applied.grid_columns as f32 / 2.0 * self.applied.grid_spacing);
        log::info!("Container replaced (half extent {:.1})", half_extent);
        warn_if_oversized(self.particle_radius, &self.container);
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    /// Mutable access for scripted scenes and tests
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.store.particles_mut()
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn particle_radius(&self) -> f32 {
        self.particle_radius
    }

    /// Number of completed steps
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

fn warn_if_oversized(radius: f32, container: &Container) {
    let narrowest = container.size().min_element();
    if 2.0 * radius > narrowest {
        log::warn!(
            "particle radius {:.2} does not fit in container width {:.2}; wall clamping will invert",
            radius,
            narrowest
        );
    }
}
