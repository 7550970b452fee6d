//! # Particle Box Physics
//!
//! CPU physics kernel for spheres falling inside an axis-aligned box:
//! gravity integration, wall collisions, brute-force pairwise collisions
//! with impulse response, and a push/pull interaction field.

pub mod collision;
pub mod constants;
pub mod container;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod particle;

pub use collision::*;
pub use constants::*;
pub use container::*;
pub use error::*;
pub use forces::*;
pub use integrator::*;
pub use particle::*;
