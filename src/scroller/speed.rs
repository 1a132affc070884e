//! Transition speed of a scrolling background.
//!
//! The speed is a bounded value in `(0, 100]`, larger is faster. It converts
//! to the time a single image takes to travel one tile extent:
//! `duration = TRANSITION_DURATION_FACTOR / speed`.

use std::fmt;

use super::error::ScrollerError;

/// Seconds per tile at a transition speed of `1.0`.
pub const TRANSITION_DURATION_FACTOR: f32 = 50.0;

/// Upper bound (inclusive) for a transition speed.
pub const MAX_TRANSITION_SPEED: f32 = 100.0;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct TransitionSpeed(f32);

impl TransitionSpeed {
    /// Validate a raw speed. NaN, zero, negatives and values above
    /// [`MAX_TRANSITION_SPEED`] are rejected.
    pub fn new(speed: f32) -> Result<Self, ScrollerError> {
        if speed > 0.0 && speed <= MAX_TRANSITION_SPEED {
            Ok(Self(speed))
        } else {
            Err(ScrollerError::InvalidTransitionSpeed(speed))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Seconds a single image takes to cross one tile extent.
    pub fn tile_duration(self) -> f32 {
        TRANSITION_DURATION_FACTOR / self.0
    }
}

impl TryFrom<f32> for TransitionSpeed {
    type Error = ScrollerError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TransitionSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
