use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of a node inside its scene, in screen coordinates (`y` grows downward).
///
/// The position is where the node's anchor point sits; see
/// [`Sprite::origin`](super::sprite::Sprite::origin).
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
