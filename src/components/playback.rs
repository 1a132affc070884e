//! Per-node playback state for scheduled motions.
//!
//! A node's [`ScrollMotion`](super::scrollmotion::ScrollMotion) only advances
//! while the node is not paused, at `speed` times the world delta.

use bevy_ecs::prelude::Component;

/// Largest playback multiplier a node runs at.
pub const MAX_PLAYBACK_SPEED: f32 = 100.0;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    /// When true the node's motion is frozen in place.
    pub paused: bool,
    /// Multiplier applied to the world delta. `1.0` is normal speed.
    pub speed: f32,
}

impl Playback {
    /// Effective delta for this node, `0.0` while paused.
    ///
    /// The speed is read within `0.0..=MAX_PLAYBACK_SPEED`; NaN counts as stopped.
    pub fn scaled_delta(&self, dt: f32) -> f32 {
        if self.paused {
            0.0
        } else {
            dt * self.speed.max(0.0).min(MAX_PLAYBACK_SPEED)
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            paused: false,
            speed: 1.0,
        }
    }
}
