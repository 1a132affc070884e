//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – demo settings loaded from an INI file
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs (non-send)
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
