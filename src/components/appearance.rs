//! How a single sprite image is cut from its sheet and presented.
//!
//! [`SpriteDef`] is the caller-facing description passed to the template
//! builder; it may still lack a texture. [`Appearance`] is the resolved form
//! stored in frames and static sprites, and always carries one.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::anchor::Anchor;
use crate::components::flip::Flip;
use crate::error::{Result, SpriteError};
use crate::resources::texturestore::TextureHandle;
use crate::systems::render::DrawCall;

/// Parameters for one sprite image, assembled with builder-style setters.
///
/// ```
/// use raylib::prelude::Color;
/// use spritekit::components::anchor::Anchor;
/// use spritekit::components::appearance::SpriteDef;
///
/// let def = SpriteDef::new()
///     .texture("hero-sheet")
///     .source(0, 0, 32, 32)
///     .tint(Color::WHITE)
///     .anchor(Anchor::Center);
/// assert!(def.has_texture());
/// ```
#[derive(Debug, Clone)]
pub struct SpriteDef {
    texture: Option<TextureHandle>,
    source: Rectangle,
    tint: Color,
    alpha: u8,
    rotation: f32,
    anchor: Anchor,
    scale: f32,
    flip: Flip,
}

impl Default for SpriteDef {
    fn default() -> Self {
        Self {
            texture: None,
            source: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            tint: Color::WHITE,
            alpha: 255,
            rotation: 0.0,
            anchor: Anchor::TopLeft,
            scale: 1.0,
            flip: Flip::NONE,
        }
    }
}

impl SpriteDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texture(mut self, texture: impl Into<TextureHandle>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    /// Source rectangle on the sheet, in pixels.
    pub fn source(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.source = Rectangle {
            x: x as f32,
            y: y as f32,
            width: width as f32,
            height: height as f32,
        };
        self
    }

    /// Tint colour. Its alpha channel is replaced by [`SpriteDef::alpha`].
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn texture_handle(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Resolve into an [`Appearance`], failing if no texture was given.
    pub fn into_appearance(self) -> Result<Appearance> {
        let texture = self.texture.ok_or_else(|| {
            SpriteError::ValidationError("sprite image has no texture".to_string())
        })?;
        let origin = self
            .anchor
            .origin(self.source.width as i32, self.source.height as i32);
        Ok(Appearance {
            texture,
            source: self.source,
            tint: Color::new(self.tint.r, self.tint.g, self.tint.b, self.alpha),
            rotation: self.rotation,
            anchor: self.anchor,
            origin,
            scale: self.scale,
            flip: self.flip,
        })
    }
}

/// Resolved presentation of one sprite image.
#[derive(Debug, Clone)]
pub struct Appearance {
    texture: TextureHandle,
    source: Rectangle,
    tint: Color,
    rotation: f32,
    anchor: Anchor,
    origin: Vector2,
    scale: f32,
    flip: Flip,
}

impl Appearance {
    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    pub fn source(&self) -> Rectangle {
        self.source
    }

    /// Tint with the alpha level already applied.
    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn alpha(&self) -> u8 {
        self.tint.a
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.tint.a = alpha;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Rotation origin in source pixels, derived from the anchor.
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn flip(&self) -> Flip {
        self.flip
    }

    /// Width on screen after scaling, truncated to whole pixels.
    pub fn width(&self) -> i32 {
        (self.source.width * self.scale) as i32
    }

    /// Height on screen after scaling, truncated to whole pixels.
    pub fn height(&self) -> i32 {
        (self.source.height * self.scale) as i32
    }

    /// Build the backend submission for this image at `position` on `layer`.
    pub fn draw_call(&self, position: Vector2, layer: f32) -> DrawCall {
        DrawCall {
            texture: self.texture.clone(),
            position,
            source: self.source,
            tint: self.tint,
            rotation: self.rotation,
            origin: self.origin,
            scale: self.scale,
            flip: self.flip,
            layer: layer.clamp(0.0, 1.0),
        }
    }
}
