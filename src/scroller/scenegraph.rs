//! Scene graph port used by the scroller.
//!
//! [`SceneGraph`] is the small surface the scroller needs from its host: create
//! nodes, place them, schedule motions, attach them to a scene, and read/write
//! the bulk display properties. The production implementation is
//! `impl SceneGraph for World`, where scenes and nodes are entities.
//!
//! Scene handles are non-owning. Every scene access goes through
//! [`SceneGraph::scene_frame`], which returns `None` once the scene is gone.

use std::fmt::Debug;

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::backgroundtile::BackgroundTile;
use crate::components::mapposition::MapPosition;
use crate::components::playback::Playback;
use crate::components::sceneframe::SceneFrame;
use crate::components::scrollmotion::ScrollMotion;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;

/// An image to tile: a texture key plus its pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundImage {
    pub key: String,
    pub width: f32,
    pub height: f32,
}

impl BackgroundImage {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// Width over height, `None` for empty or non-finite sizes.
    pub fn aspect_ratio(&self) -> Option<f32> {
        let ratio = self.width / self.height;
        (self.width > 0.0 && self.height > 0.0 && ratio.is_finite()).then_some(ratio)
    }
}

/// Display properties the scroller sets uniformly on all its nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
    /// Draw order.
    pub z_index: i32,
    /// Whether the node's motion is frozen.
    pub paused: bool,
    /// Motion playback multiplier.
    pub speed: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            z_index: 0,
            paused: false,
            speed: 1.0,
        }
    }
}

pub trait SceneGraph {
    /// Handle to a drawable node.
    type Node: Copy + Debug + PartialEq;
    /// Non-owning handle to a scene.
    type Scene: Copy + Debug;

    /// Frame of `scene`, or `None` when the scene no longer exists.
    fn scene_frame(&self, scene: Self::Scene) -> Option<SceneFrame>;

    /// Create a detached node showing `image` at `size`.
    fn create_node(&mut self, image: &BackgroundImage, index: usize, size: Vector2) -> Self::Node;

    /// Normalized anchor point of a node. Returns false if the node is gone.
    fn set_anchor(&mut self, node: Self::Node, anchor: Vector2) -> bool;

    fn set_position(&mut self, node: Self::Node, pos: Vector2) -> bool;

    fn position(&self, node: Self::Node) -> Option<Vector2>;

    /// Run `motion` on `node`, replacing whatever motion it was running.
    fn schedule(&mut self, node: Self::Node, motion: ScrollMotion) -> bool;

    /// Stop the node's motion, leaving it where it is.
    fn cancel(&mut self, node: Self::Node) -> bool;

    /// Attach `node` to `scene`. Attaching twice is a no-op. Returns false when
    /// either side is gone.
    fn add_to_scene(&mut self, scene: Self::Scene, node: Self::Node) -> bool;

    fn appearance(&self, node: Self::Node) -> Option<Appearance>;

    fn update_appearance(&mut self, node: Self::Node, f: &mut dyn FnMut(&mut Appearance)) -> bool;
}

impl SceneGraph for World {
    type Node = Entity;
    type Scene = Entity;

    fn scene_frame(&self, scene: Entity) -> Option<SceneFrame> {
        self.get::<SceneFrame>(scene).copied()
    }

    fn create_node(&mut self, image: &BackgroundImage, index: usize, size: Vector2) -> Entity {
        self.spawn((
            Sprite::new(image.key.clone(), size.x, size.y),
            MapPosition::default(),
            ZIndex::default(),
            Tint::default(),
            Playback::default(),
            BackgroundTile { index },
        ))
        .id()
    }

    fn set_anchor(&mut self, node: Entity, anchor: Vector2) -> bool {
        match self.get_mut::<Sprite>(node) {
            Some(mut sprite) => {
                sprite.set_anchor(anchor);
                true
            }
            None => false,
        }
    }

    fn set_position(&mut self, node: Entity, pos: Vector2) -> bool {
        match self.get_mut::<MapPosition>(node) {
            Some(mut mp) => {
                mp.pos = pos;
                true
            }
            None => false,
        }
    }

    fn position(&self, node: Entity) -> Option<Vector2> {
        self.get::<MapPosition>(node).map(|mp| mp.pos)
    }

    fn schedule(&mut self, node: Entity, motion: ScrollMotion) -> bool {
        match self.get_entity_mut(node) {
            Ok(mut entity) => {
                entity.insert(motion);
                true
            }
            Err(_) => false,
        }
    }

    fn cancel(&mut self, node: Entity) -> bool {
        match self.get_entity_mut(node) {
            Ok(mut entity) => {
                entity.remove::<ScrollMotion>();
                true
            }
            Err(_) => false,
        }
    }

    fn add_to_scene(&mut self, scene: Entity, node: Entity) -> bool {
        if self.scene_frame(scene).is_none() {
            return false;
        }
        let Ok(mut entity) = self.get_entity_mut(node) else {
            return false;
        };
        if entity.get::<ChildOf>().is_some_and(|c| c.parent() == scene) {
            return true;
        }
        entity.insert(ChildOf(scene));
        true
    }

    fn appearance(&self, node: Entity) -> Option<Appearance> {
        let entity = self.get_entity(node).ok()?;
        let playback = entity.get::<Playback>().copied().unwrap_or_default();
        Some(Appearance {
            alpha: entity.get::<Tint>().map_or(1.0, Tint::alpha),
            z_index: entity.get::<ZIndex>().map_or(0, |z| z.0),
            paused: playback.paused,
            speed: playback.speed,
        })
    }

    fn update_appearance(&mut self, node: Entity, f: &mut dyn FnMut(&mut Appearance)) -> bool {
        let Some(mut appearance) = self.appearance(node) else {
            return false;
        };
        f(&mut appearance);
        let Ok(mut entity) = self.get_entity_mut(node) else {
            return false;
        };
        let mut tint = entity.get::<Tint>().copied().unwrap_or_default();
        tint.set_alpha(appearance.alpha);
        entity.insert((
            tint,
            ZIndex(appearance.z_index),
            Playback {
                paused: appearance.paused,
                speed: appearance.speed,
            },
        ));
        true
    }
}
