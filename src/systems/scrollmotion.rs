//! Motion playback system.
//!
//! [`scroll_motion_system`] advances every [`ScrollMotion`] by the world delta
//! (scaled by the node's [`Playback`]) and writes the resulting coordinate
//! into the node's [`MapPosition`].
//!
//! Time left over when a step completes carries into the following steps, so a
//! long frame never shortens the cycle and nodes scheduled together stay in
//! lock-step.

use crate::components::mapposition::MapPosition;
use crate::components::playback::Playback;
use crate::components::scrollmotion::{MotionPhase, ScrollMotion};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Play `dt` seconds of `motion` starting from the coordinate `current`.
///
/// Returns the new coordinate. Zero-duration steps are applied immediately,
/// including when `dt` is zero.
pub(crate) fn advance(motion: &mut ScrollMotion, current: f32, dt: f32) -> f32 {
    let mut pos = current;
    let mut remaining = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    // Consecutive steps completed without consuming time; bounded so a chain of
    // teleports cannot spin forever.
    let mut idle_steps = 0usize;

    while let Some(step) = motion.current_step() {
        // At a cycle boundary whole loops are skipped at once: each one ends on
        // the last step's target.
        if motion.phase == MotionPhase::Cycle && motion.step == 0 && motion.time == 0.0 {
            let cycle = motion.cycle_duration();
            if cycle > 0.0 && remaining >= cycle {
                let loops = (remaining / cycle).floor();
                remaining %= cycle;
                motion.loops = motion.loops.saturating_add(loops as u32);
                if let Some(last) = motion.cycle.last() {
                    pos = last.target;
                }
                motion.from = None;
            }
        }

        let from = *motion.from.get_or_insert(pos);
        let left = (step.duration - motion.time).max(0.0);

        if left <= remaining {
            remaining -= left;
            pos = step.target;
            motion.next_step();
            if left > 0.0 {
                idle_steps = 0;
            } else {
                idle_steps += 1;
                if idle_steps > motion.len() {
                    break;
                }
            }
            continue;
        }

        motion.time += remaining;
        pos = lerp_f32(from, step.target, motion.time / step.duration);
        break;
    }

    pos
}

/// Animate node positions based on [`ScrollMotion`] components.
pub fn scroll_motion_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut ScrollMotion, Option<&Playback>)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut mp, mut motion, playback) in query.iter_mut() {
        if motion.is_finished() || playback.is_some_and(|p| p.paused) {
            continue;
        }
        let dt = playback.map_or(dt, |p| p.scaled_delta(dt));
        let axis = motion.axis;
        let next = advance(&mut motion, axis.component(mp.pos), dt);
        mp.pos = axis.with_component(mp.pos, next);
    }
}
