//! Engine systems.
//!
//! Submodules overview
//! - [`render`] – draw sprites sorted by z-index using Raylib
//! - [`scrollmotion`] – play scheduled scroll motions on node positions
//! - [`time`] – update simulation time and delta

pub mod render;
pub mod scrollmotion;
pub mod time;
