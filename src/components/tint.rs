//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component modulates a node's color at draw time. Background
//! scrollers only touch its alpha channel, exposed as a normalized opacity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Color tint component for rendering modulation.
///
/// When attached to an entity with a [`Sprite`](crate::components::sprite::Sprite),
/// the tint color replaces `Color::WHITE` in draw calls.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.a as f32 / 255.0
    }

    /// Set the opacity, clamping to `0.0..=1.0`.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.color.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Builder variant of [`Tint::set_alpha`].
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.set_alpha(alpha);
        self
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1.0 / 255.0;

    #[test]
    fn test_new() {
        let t = Tint::new(100, 150, 200, 255);
        assert_eq!(t.color.r, 100);
        assert_eq!(t.color.g, 150);
        assert_eq!(t.color.b, 200);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_default_is_opaque_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.g, 255);
        assert_eq!(t.color.b, 255);
        assert_eq!(t.color.a, 255);
        assert!((t.alpha() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_alpha_keeps_rgb() {
        let mut t = Tint::new(10, 20, 30, 255);
        t.set_alpha(0.5);
        assert_eq!(t.color.r, 10);
        assert_eq!(t.color.g, 20);
        assert_eq!(t.color.b, 30);
        assert_eq!(t.color.a, 128);
        assert!((t.alpha() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_set_alpha_clamps() {
        let mut t = Tint::default();
        t.set_alpha(-3.0);
        assert_eq!(t.color.a, 0);
        t.set_alpha(7.0);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_with_alpha() {
        let t = Tint::default().with_alpha(0.0);
        assert_eq!(t.color.a, 0);
    }
}
