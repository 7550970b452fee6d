//! Pointer-driven push/pull state
//!
//! The input layer turns cursor coordinates into a world-space ray (that
//! needs the camera, so it stays outside this crate). Presses that hit the
//! container start an interaction; drags move the target; release ends it.

use glam::Vec3;
use particle_physics::{Container, InteractionMode};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub active: bool,
    pub mode: InteractionMode,
    /// Target of the field in world space
    pub point: Vec3,
}

impl InteractionState {
    /// Inactive state
    pub fn idle() -> Self {
        Self::default()
    }

    /// Active state aimed at a fixed point
    pub fn at(point: Vec3, mode: InteractionMode) -> Self {
        Self {
            active: true,
            mode,
            point,
        }
    }

    /// Start an interaction if the pick ray hits the container.
    ///
    /// Returns `true` when the interaction became active. A miss leaves the
    /// state untouched.
    pub fn press(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        mode: InteractionMode,
        container: &Container,
    ) -> bool {
        match container.intersect_ray(origin, direction) {
            Some(t) => {
                self.active = true;
                self.mode = mode;
                self.point = origin + direction * t;
                log::debug!("interaction {:?} started at {}", mode, self.point);
                true
            }
            None => false,
        }
    }

    /// Move the target while active. Misses keep the previous point.
    pub fn drag(&mut self, origin: Vec3, direction: Vec3, container: &Container) {
        if !self.active {
            return;
        }
        if let Some(t) = container.intersect_ray(origin, direction) {
            self.point = origin + direction * t;
        }
    }

    pub fn release(&mut self) {
        if self.active {
            log::debug!("interaction released");
        }
        self.active = false;
    }
}
