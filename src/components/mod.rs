//! ECS components for background nodes and scenes.
//!
//! Submodules overview:
//! - [`backgroundtile`] – marks nodes created by a scroller and their image index
//! - [`mapposition`] – scene-space position (pivot) for a node
//! - [`playback`] – per-node pause flag and motion speed multiplier
//! - [`sceneframe`] – size and anchor of a scene entity
//! - [`scrollmotion`] – entry + looping chain of axis moves and teleports
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – color modulation, used for opacity
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod backgroundtile;
pub mod mapposition;
pub mod playback;
pub mod sceneframe;
pub mod scrollmotion;
pub mod sprite;
pub mod tint;
pub mod zindex;
