use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sceneframe::SceneFrame;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// Screen-space rectangle covered by a sprite whose pivot sits at `pos`.
pub fn sprite_bounds(sprite: &Sprite, pos: Vector2) -> Rectangle {
    let size = sprite.size();
    Rectangle {
        x: pos.x - sprite.origin.x,
        y: pos.y - sprite.origin.y,
        width: size.x,
        height: size.y,
    }
}

/// Whether `bounds` overlaps the `screen` rectangle. Touching an edge is not
/// enough.
pub fn is_visible(bounds: &Rectangle, screen: ScreenSize) -> bool {
    !(bounds.x + bounds.width <= 0.0
        || bounds.x >= screen.w as f32
        || bounds.y + bounds.height <= 0.0
        || bounds.y >= screen.h as f32)
}

/// Sprites overlapping the screen, sorted by [`ZIndex`], with their screen
/// rectangle and draw color.
///
/// Positions of nodes attached to a scene are offset by the scene's origin.
pub fn visible_sprites(world: &mut World) -> Vec<(Sprite, Rectangle, ZIndex, Color)> {
    let screen = *world.resource::<ScreenSize>();

    let mut to_draw: Vec<(Sprite, Rectangle, ZIndex, Color)> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            Option<&ZIndex>,
            Option<&Tint>,
            Option<&ChildOf>,
        )>();
        q.iter(world)
            .filter_map(|(s, p, z, t, parent)| {
                let offset = parent
                    .and_then(|c| world.get::<SceneFrame>(c.parent()))
                    .map_or(Vector2 { x: 0.0, y: 0.0 }, SceneFrame::origin);
                let bounds = sprite_bounds(s, p.pos + offset);
                is_visible(&bounds, screen).then(|| {
                    (
                        s.clone(),
                        bounds,
                        z.copied().unwrap_or_default(),
                        t.copied().unwrap_or_default().color,
                    )
                })
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, z, _)| *z);
    to_draw
}

/// We render inside raylib's drawing scope and query the ECS World.
/// Sprites fully outside the screen are culled, the rest are drawn sorted by
/// [`ZIndex`] and modulated by their [`Tint`].
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let to_draw = visible_sprites(world);

    let textures = world.non_send_resource::<TextureStore>();

    for (sprite, dest, _z, color) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // The whole texture is stretched over the sprite's display size.
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            d.draw_texture_pro(tex, src, *dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, *color);
        }
    }
}

/// Small overlay with the frame rate and scroller state.
pub fn render_debug_ui(d: &mut RaylibDrawHandle, paused: bool, speed: f32, alpha: f32) {
    let fps = d.get_fps();
    let text = format!(
        "FPS: {} | paused: {} | speed: {:.2} | alpha: {:.2}",
        fps, paused, speed, alpha
    );
    d.draw_text(&text, 10, 10, 10, Color::BLACK);
    d.draw_text(
        "SPACE pause  UP/DOWN speed  +/- alpha  R restart",
        10,
        24,
        10,
        Color::BLACK,
    );
}
