//! Sprites made of named animations.
//!
//! An [`AnimatedSprite`] holds a fixed set of [`Animation`]s and plays one of
//! them at a time. Until [`AnimatedSprite::select_animation`] is called no
//! animation is active and both `update` and `draw` do nothing.

use log::warn;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::error::{Result, SpriteError};
use crate::systems::render::SpriteBatch;

#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    animations: Vec<Animation>,
    position: Vector2,
    layer: f32,
    visible: bool,
    current: Option<usize>,
}

impl AnimatedSprite {
    /// Create a hidden sprite over `animations`; `layer` is clamped to `[0, 1]`.
    ///
    /// Fails with [`SpriteError::InvalidArgument`] when `animations` is empty.
    pub fn new(layer: f32, animations: Vec<Animation>) -> Result<Self> {
        if animations.is_empty() {
            return Err(SpriteError::InvalidArgument(
                "an animated sprite needs at least one animation".to_string(),
            ));
        }
        Ok(Self {
            animations,
            position: Vector2 { x: 0.0, y: 0.0 },
            layer: layer.clamp(0.0, 1.0),
            visible: false,
            current: None,
        })
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// First animation called `name`. Later duplicates are shadowed.
    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.name() == name)
    }

    /// Restart the animation called `name` and make it the active one.
    ///
    /// On a miss the current selection is left as it was.
    pub fn select_animation(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.animations.iter().position(|a| a.name() == name) else {
            warn!("No animation named '{}' on this sprite", name);
            return Err(SpriteError::NotFound(format!("animation '{name}'")));
        };
        self.animations[index].play();
        self.current = Some(index);
        Ok(())
    }

    pub fn current_animation(&self) -> Option<&Animation> {
        self.current.map(|i| &self.animations[i])
    }

    pub fn current_animation_name(&self) -> Option<&str> {
        self.current_animation().map(Animation::name)
    }

    /// Whether the active animation has run out of loops. Always false for
    /// infinite animations; `None` before any selection.
    pub fn current_animation_finished(&self) -> Option<bool> {
        self.current_animation().map(Animation::finished)
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

    /// Advance the active animation. Hidden sprites do not advance.
    pub fn update(&mut self, dt: f32) {
        if !self.visible {
            return;
        }
        if let Some(i) = self.current {
            self.animations[i].update(dt);
        }
    }

    /// Submit the active animation's current frame.
    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        if !self.visible {
            return;
        }
        if let Some(animation) = self.current_animation() {
            let frame = animation.current_frame();
            batch.draw(frame.appearance().draw_call(self.position, self.layer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::appearance::SpriteDef;
    use crate::components::frame::Frame;
    use crate::systems::render::DrawCall;

    fn animation(name: &str, count: u32, loops: u32) -> Animation {
        let frames = (0..count)
            .map(|n| {
                let appearance = SpriteDef::new()
                    .texture("sheet")
                    .source(n as i32 * 8, 0, 8, 8)
                    .into_appearance()
                    .unwrap();
                Frame::new(n, appearance)
            })
            .collect();
        Animation::new(name, frames, 1.0, loops).unwrap()
    }

    fn sprite() -> AnimatedSprite {
        AnimatedSprite::new(
            0.5,
            vec![animation("walk", 3, 0), animation("jump", 2, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_no_animations() {
        let err = AnimatedSprite::new(0.0, Vec::new()).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidArgument(_)));
    }

    #[test]
    fn test_no_selection_is_inert() {
        let mut s = sprite();
        s.set_visible(true);
        s.update(5.0);
        let mut calls: Vec<DrawCall> = Vec::new();
        s.draw(&mut calls);
        assert!(calls.is_empty());
        assert_eq!(s.current_animation_name(), None);
        assert_eq!(s.current_animation_finished(), None);
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut s = sprite();
        s.select_animation("jump").unwrap();
        let err = s.select_animation("swim").unwrap_err();
        assert!(matches!(err, SpriteError::NotFound(_)));
        assert_eq!(s.current_animation_name(), Some("jump"));
    }

    #[test]
    fn test_select_restarts_animation() {
        let mut s = sprite();
        s.set_visible(true);
        s.select_animation("walk").unwrap();
        s.update(1.0);
        assert_eq!(s.current_animation().unwrap().current_frame_index(), 1);
        s.select_animation("walk").unwrap();
        assert_eq!(s.current_animation().unwrap().current_frame_index(), 0);
    }

    #[test]
    fn test_hidden_sprite_does_not_advance() {
        let mut s = sprite();
        s.select_animation("walk").unwrap();
        s.update(1.0);
        assert_eq!(s.current_animation().unwrap().current_frame_index(), 0);
    }

    #[test]
    fn test_draw_uses_current_frame() {
        let mut s = sprite();
        s.set_visible(true);
        s.set_position(Vector2 { x: 3.0, y: 4.0 });
        s.select_animation("walk").unwrap();
        s.update(1.0);
        s.update(1.0);
        let mut calls: Vec<DrawCall> = Vec::new();
        s.draw(&mut calls);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].source.x, 16.0);
        assert_eq!((calls[0].position.x, calls[0].position.y), (3.0, 4.0));
        assert_eq!(calls[0].layer, 0.5);
    }

    #[test]
    fn test_finished_reports_active_animation() {
        let mut s = sprite();
        s.set_visible(true);
        s.select_animation("jump").unwrap();
        s.update(1.0);
        s.update(1.0);
        assert_eq!(s.current_animation_finished(), Some(true));
        s.select_animation("walk").unwrap();
        assert_eq!(s.current_animation_finished(), Some(false));
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let s = AnimatedSprite::new(
            0.0,
            vec![animation("idle", 1, 0), animation("idle", 4, 0)],
        )
        .unwrap();
        assert_eq!(s.animation("idle").unwrap().frame_count(), 1);
    }
}
