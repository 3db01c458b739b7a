//! Spritekit library.
//!
//! Reusable templates for static images and multi-frame animations, live
//! sprite instances deep-copied from those templates, and the per-tick
//! update/draw passes that drive them. The modules are laid out for use
//! inside a bevy_ecs world with a raylib render backend, but the core types
//! only need a delta time and a [`systems::render::SpriteBatch`].

pub mod components;
pub mod error;
pub mod resources;
pub mod scene;
pub mod systems;

pub use error::{RejectedTemplate, Result, SpriteError};
