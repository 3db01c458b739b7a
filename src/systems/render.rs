//! Draw submission.
//!
//! Sprites do not talk to the GPU. Drawing a sprite produces one [`DrawCall`]
//! that is handed to a [`SpriteBatch`]; the batch decides what to do with it.
//!
//! - `Vec<DrawCall>` simply records the calls, which is what tests use.
//! - [`RaylibSpriteBatch`] collects a tick's calls, sorts them back to front
//!   by layer and submits them through raylib's `draw_texture_pro`.
//!
//! [`render_sprites`] wires the manager, the texture store and a raylib draw
//! handle together for the main loop.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;

use crate::components::flip::Flip;
use crate::resources::spritemanager::SpriteManager;
use crate::resources::texturestore::{TextureHandle, TextureStore};

/// One image submission for the render backend.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub texture: TextureHandle,
    /// Where the image's rotation origin lands on screen.
    pub position: Vector2,
    pub source: Rectangle,
    pub tint: Color,
    /// Radians, clockwise.
    pub rotation: f32,
    /// Rotation origin in source pixels.
    pub origin: Vector2,
    pub scale: f32,
    pub flip: Flip,
    /// Depth in `[0, 1]`; 0 is the front, 1 the back.
    pub layer: f32,
}

/// Receiver of draw calls.
pub trait SpriteBatch {
    fn draw(&mut self, call: DrawCall);
}

impl SpriteBatch for Vec<DrawCall> {
    fn draw(&mut self, call: DrawCall) {
        self.push(call);
    }
}

/// A draw call translated to raylib's `draw_texture_pro` arguments.
#[derive(Debug, Clone, Copy)]
pub struct TexturedQuad {
    /// Source rectangle; negative extents mirror the image.
    pub source: Rectangle,
    /// Destination rectangle, scaled, positioned at the origin point.
    pub dest: Rectangle,
    /// Rotation origin in destination (scaled) pixels.
    pub origin: Vector2,
    pub rotation_degrees: f32,
}

impl TexturedQuad {
    pub fn from_call(call: &DrawCall) -> Self {
        let width = call.source.width;
        let height = call.source.height;
        let source = Rectangle {
            x: call.source.x,
            y: call.source.y,
            width: if call.flip.horizontal { -width } else { width },
            height: if call.flip.vertical { -height } else { height },
        };
        let dest = Rectangle {
            x: call.position.x,
            y: call.position.y,
            width: width * call.scale,
            height: height * call.scale,
        };
        let origin = Vector2 {
            x: call.origin.x * call.scale,
            y: call.origin.y * call.scale,
        };
        Self {
            source,
            dest,
            origin,
            rotation_degrees: call.rotation.to_degrees(),
        }
    }
}

/// Collects one tick of draw calls and submits them back to front.
#[derive(Debug, Default)]
pub struct RaylibSpriteBatch {
    calls: Vec<DrawCall>,
}

impl RaylibSpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Sort back to front. Equal layers keep submission order.
    pub fn sort(&mut self) {
        self.calls.sort_by(|a, b| b.layer.total_cmp(&a.layer));
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Sort and draw every collected call, emptying the batch.
    pub fn flush(&mut self, d: &mut impl RaylibDraw, textures: &TextureStore) {
        self.sort();
        let mut skipped = 0;
        for call in self.calls.drain(..) {
            let Some(texture) = textures.get(&call.texture) else {
                skipped += 1;
                continue;
            };
            let quad = TexturedQuad::from_call(&call);
            d.draw_texture_pro(
                texture,
                quad.source,
                quad.dest,
                quad.origin,
                quad.rotation_degrees,
                call.tint,
            );
        }
        if skipped > 0 {
            warn!("Skipped {} draw calls with unknown textures", skipped);
        }
    }
}

impl SpriteBatch for RaylibSpriteBatch {
    fn draw(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}

/// Draw every visible managed sprite with raylib.
///
/// Requires a [`SpriteManager`] non-send resource and a [`TextureStore`]
/// resource in `world`.
pub fn render_sprites(world: &World, d: &mut impl RaylibDraw) {
    let mut batch = RaylibSpriteBatch::new();
    world.non_send_resource::<SpriteManager>().draw(&mut batch);
    batch.flush(d, world.resource::<TextureStore>());
}
