//! Scheduled motion along one axis.
//!
//! A [`ScrollMotion`] is a declarative chain of [`MoveTo`] steps: an entry
//! sequence played once, followed by a cycle repeated forever. A step with a
//! zero duration is a teleport. See [`crate::systems::scrollmotion`] for the
//! system that plays them.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::scroller::direction::Axis;

/// Linear move of the axis coordinate to `target` over `duration` seconds.
///
/// The start point is wherever the node is when the step begins.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveTo {
    pub target: f32,
    pub duration: f32,
}

impl MoveTo {
    pub fn new(target: f32, duration: f32) -> Self {
        Self {
            target,
            duration: duration.max(0.0),
        }
    }

    /// Zero-duration repositioning.
    pub fn teleport(target: f32) -> Self {
        Self::new(target, 0.0)
    }

    pub fn is_teleport(&self) -> bool {
        self.duration <= 0.0
    }
}

/// Which part of the chain is playing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    Entry,
    Cycle,
    /// Only reached when the cycle is empty.
    Finished,
}

pub type Steps = SmallVec<[MoveTo; 2]>;

#[derive(Component, Clone, Debug)]
pub struct ScrollMotion {
    /// Axis the steps move along.
    pub axis: Axis,
    /// Played once.
    pub entry: Steps,
    /// Repeated forever after the entry.
    pub cycle: Steps,
    /// Current part of the chain.
    pub phase: MotionPhase,
    /// Index of the current step within its phase.
    pub step: usize,
    /// Time spent in the current step.
    pub time: f32,
    /// Coordinate captured when the current step began.
    pub from: Option<f32>,
    /// Number of completed cycle iterations.
    pub loops: u32,
}

impl ScrollMotion {
    pub fn new(axis: Axis) -> Self {
        ScrollMotion {
            axis,
            entry: SmallVec::new(),
            cycle: SmallVec::new(),
            phase: MotionPhase::Entry,
            step: 0,
            time: 0.0,
            from: None,
            loops: 0,
        }
    }

    pub fn with_entry(mut self, steps: impl IntoIterator<Item = MoveTo>) -> Self {
        self.entry.extend(steps);
        self
    }

    pub fn with_cycle(mut self, steps: impl IntoIterator<Item = MoveTo>) -> Self {
        self.cycle.extend(steps);
        self
    }

    /// Total duration of the entry sequence.
    pub fn entry_duration(&self) -> f32 {
        self.entry.iter().map(|s| s.duration).sum()
    }

    /// Duration of one cycle iteration.
    pub fn cycle_duration(&self) -> f32 {
        self.cycle.iter().map(|s| s.duration).sum()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MotionPhase::Finished
    }

    /// Step being played, moving into the cycle (or finishing) when the
    /// current phase is exhausted.
    pub fn current_step(&mut self) -> Option<MoveTo> {
        if self.phase == MotionPhase::Entry && self.step >= self.entry.len() {
            self.phase = MotionPhase::Cycle;
            self.step = 0;
        }
        if self.phase == MotionPhase::Cycle && self.step >= self.cycle.len() {
            if self.cycle.is_empty() {
                self.phase = MotionPhase::Finished;
            } else {
                self.step = 0;
                self.loops += 1;
            }
        }
        match self.phase {
            MotionPhase::Entry => self.entry.get(self.step).copied(),
            MotionPhase::Cycle => self.cycle.get(self.step).copied(),
            MotionPhase::Finished => None,
        }
    }

    /// Leave the current step.
    pub fn next_step(&mut self) {
        self.step += 1;
        self.time = 0.0;
        self.from = None;
    }

    /// Total number of steps in both phases.
    pub fn len(&self) -> usize {
        self.entry.len() + self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_move_to_negative_duration_is_teleport() {
        let m = MoveTo::new(10.0, -2.0);
        assert!(m.is_teleport());
        assert!(approx_eq(m.duration, 0.0));
        assert!(MoveTo::teleport(3.0).is_teleport());
        assert!(!MoveTo::new(3.0, 0.5).is_teleport());
    }

    #[test]
    fn test_new_motion_is_empty_entry() {
        let m = ScrollMotion::new(Axis::Horizontal);
        assert!(m.is_empty());
        assert_eq!(m.phase, MotionPhase::Entry);
        assert_eq!(m.step, 0);
        assert!(m.from.is_none());
    }

    #[test]
    fn test_builder_and_durations() {
        let m = ScrollMotion::new(Axis::Vertical)
            .with_entry([MoveTo::new(100.0, 2.0), MoveTo::teleport(-50.0)])
            .with_cycle([MoveTo::new(100.0, 4.0), MoveTo::teleport(-50.0)]);
        assert_eq!(m.len(), 4);
        assert!(approx_eq(m.entry_duration(), 2.0));
        assert!(approx_eq(m.cycle_duration(), 4.0));
    }

    #[test]
    fn test_current_step_walks_entry_then_cycles() {
        let mut m = ScrollMotion::new(Axis::Horizontal)
            .with_entry([MoveTo::new(1.0, 1.0)])
            .with_cycle([MoveTo::new(2.0, 1.0), MoveTo::teleport(0.0)]);

        assert_eq!(m.current_step(), Some(MoveTo::new(1.0, 1.0)));
        m.next_step();
        assert_eq!(m.current_step(), Some(MoveTo::new(2.0, 1.0)));
        assert_eq!(m.phase, MotionPhase::Cycle);
        m.next_step();
        assert_eq!(m.current_step(), Some(MoveTo::teleport(0.0)));
        m.next_step();
        assert_eq!(m.current_step(), Some(MoveTo::new(2.0, 1.0)));
        assert_eq!(m.loops, 1);
    }

    #[test]
    fn test_empty_cycle_finishes() {
        let mut m = ScrollMotion::new(Axis::Horizontal).with_entry([MoveTo::new(1.0, 1.0)]);
        m.next_step();
        assert_eq!(m.current_step(), None);
        assert!(m.is_finished());
    }

    #[test]
    fn test_next_step_resets_step_state() {
        let mut m = ScrollMotion::new(Axis::Horizontal).with_cycle([MoveTo::new(1.0, 1.0)]);
        m.time = 0.4;
        m.from = Some(3.0);
        m.next_step();
        assert!(approx_eq(m.time, 0.0));
        assert!(m.from.is_none());
    }
}
