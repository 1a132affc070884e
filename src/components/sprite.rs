use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its display size in scene units.
/// The origin selects the pivot point (in pixels, relative to the sprite's top-left)
/// that [`MapPosition`](super::mapposition::MapPosition) refers to when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Set the origin from a normalized anchor point (`0.0..=1.0` on both axes).
    pub fn set_anchor(&mut self, anchor: Vector2) {
        self.origin = Vector2 {
            x: anchor.x * self.width,
            y: anchor.y * self.height,
        };
    }

    /// Normalized anchor point derived from the pixel origin.
    pub fn anchor(&self) -> Vector2 {
        Vector2 {
            x: if self.width != 0.0 { self.origin.x / self.width } else { 0.0 },
            y: if self.height != 0.0 { self.origin.y / self.height } else { 0.0 },
        }
    }

    pub fn size(&self) -> Vector2 {
        Vector2 {
            x: self.width,
            y: self.height,
        }
    }
}
