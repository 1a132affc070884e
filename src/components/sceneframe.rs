//! Scene frame component.
//!
//! A scene is any entity carrying a [`SceneFrame`]. Background nodes are
//! attached to it with [`ChildOf`](bevy_ecs::hierarchy::ChildOf); despawning
//! the scene despawns them as well.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

/// Visible region of a scene and the anchor point its coordinates refer to.
///
/// With an anchor of `(0, 0)` the scene origin is its top-left corner; with
/// `(0.5, 0.5)` the origin sits at its center. Positions of nodes attached to
/// the scene are relative to that origin, see [`SceneFrame::origin`].
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub width: f32,
    pub height: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl SceneFrame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }

    pub fn with_anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor_x = x;
        self.anchor_y = y;
        self
    }

    pub fn size(&self) -> Vector2 {
        Vector2 {
            x: self.width,
            y: self.height,
        }
    }

    pub fn anchor(&self) -> Vector2 {
        Vector2 {
            x: self.anchor_x,
            y: self.anchor_y,
        }
    }

    /// Screen offset of the scene origin from the frame's top-left corner.
    pub fn origin(&self) -> Vector2 {
        Vector2 {
            x: self.anchor_x * self.width,
            y: self.anchor_y * self.height,
        }
    }
}
