//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The render pass reads
//! it to cull nodes that are entirely off screen.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
