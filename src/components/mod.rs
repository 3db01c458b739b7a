//! Sprite building blocks.
//!
//! Submodules overview:
//! - [`anchor`] – pivot point for rotation and placement of an image
//! - [`flip`] – horizontal/vertical mirror flags
//! - [`appearance`] – sprite image definition and its resolved presentation
//! - [`frame`] – one numbered image of an animation
//! - [`animation`] – frame sequence with timing and the frame-advance state machine
//! - [`staticsprite`] – single-image sprite
//! - [`animatedsprite`] – sprite playing one of several animations
//! - [`spriteref`] – shared identity handles to live sprites

pub mod anchor;
pub mod animatedsprite;
pub mod animation;
pub mod appearance;
pub mod flip;
pub mod frame;
pub mod spriteref;
pub mod staticsprite;
