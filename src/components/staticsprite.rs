//! Sprites without animations: one image drawn at a position.

use raylib::prelude::Vector2;

use crate::components::appearance::Appearance;
use crate::systems::render::SpriteBatch;

/// A single image drawn at [`StaticSprite::position`] when visible.
///
/// New sprites start hidden at the origin.
#[derive(Debug, Clone)]
pub struct StaticSprite {
    appearance: Appearance,
    position: Vector2,
    layer: f32,
    visible: bool,
}

impl StaticSprite {
    /// `layer` is clamped to `[0, 1]`; 0 is the front, 1 the back.
    pub fn new(appearance: Appearance, layer: f32) -> Self {
        Self {
            appearance,
            position: Vector2 { x: 0.0, y: 0.0 },
            layer: layer.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Rotation, alpha and scale stay adjustable on live sprites.
    pub fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.appearance
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn layer(&self) -> f32 {
        self.layer
    }

    pub fn set_layer(&mut self, layer: f32) {
        self.layer = layer.clamp(0.0, 1.0);
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn width(&self) -> i32 {
        self.appearance.width()
    }

    pub fn height(&self) -> i32 {
        self.appearance.height()
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        if self.visible {
            batch.draw(self.appearance.draw_call(self.position, self.layer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::appearance::SpriteDef;
    use crate::systems::render::DrawCall;

    fn sprite(layer: f32) -> StaticSprite {
        let appearance = SpriteDef::new()
            .texture("rock")
            .source(0, 0, 16, 16)
            .into_appearance()
            .unwrap();
        StaticSprite::new(appearance, layer)
    }

    #[test]
    fn test_starts_hidden_at_origin() {
        let s = sprite(0.5);
        assert!(!s.visible());
        assert_eq!((s.position().x, s.position().y), (0.0, 0.0));
    }

    #[test]
    fn test_layer_is_clamped() {
        assert_eq!(sprite(-3.0).layer(), 0.0);
        assert_eq!(sprite(4.0).layer(), 1.0);
        let mut s = sprite(0.5);
        s.set_layer(1.5);
        assert_eq!(s.layer(), 1.0);
    }

    #[test]
    fn test_draw_only_when_visible() {
        let mut s = sprite(0.25);
        let mut calls: Vec<DrawCall> = Vec::new();
        s.draw(&mut calls);
        assert!(calls.is_empty());

        s.set_visible(true);
        s.set_position(Vector2 { x: 10.0, y: 20.0 });
        s.draw(&mut calls);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].texture.key(), "rock");
        assert_eq!((calls[0].position.x, calls[0].position.y), (10.0, 20.0));
        assert_eq!(calls[0].layer, 0.25);
    }

    #[test]
    fn test_appearance_mut_changes_draw() {
        let mut s = sprite(0.0);
        s.set_visible(true);
        s.appearance_mut().set_alpha(40);
        s.appearance_mut().set_rotation(1.0);
        let mut calls: Vec<DrawCall> = Vec::new();
        s.draw(&mut calls);
        assert_eq!(calls[0].tint.a, 40);
        assert_eq!(calls[0].rotation, 1.0);
    }
}
