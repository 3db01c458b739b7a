//! Per-tick sprite update.
//!
//! [`update_sprites`] advances every animated sprite registered with the
//! [`SpriteManager`] by the current [`WorldTime::delta`]. Drawing happens in
//! [`crate::systems::render::render_sprites`], inside the raylib draw scope.

use bevy_ecs::prelude::*;

use crate::resources::spritemanager::SpriteManager;
use crate::resources::worldtime::WorldTime;

/// Advance managed animations.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Walks the manager's updatable sprites in registration order.
/// - Hidden sprites and sprites with no selected animation stay put.
pub fn update_sprites(manager: NonSend<SpriteManager>, time: Res<WorldTime>) {
    manager.update(time.delta);
}
