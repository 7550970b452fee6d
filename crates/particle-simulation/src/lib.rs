//! # Particle Box Simulation
//!
//! Frame-driven orchestration of the physics kernel: owns the particle store
//! and container, applies configuration events, and steps the world once
//! per rendered frame.

pub mod diagnostics;
pub mod error;
pub mod interaction;
pub mod params;
pub mod simulation;
pub mod store;

pub use diagnostics::*;
pub use error::*;
pub use interaction::*;
pub use params::*;
pub use simulation::*;
pub use store::*;

pub use particle_physics::{Container, InteractionMode, Particle};
