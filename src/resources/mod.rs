//! Long-lived data shared by the per-tick systems.
//!
//! Overview
//! - `spritemanager` – template registries and the live sprite collections
//! - `templatebuilder` – staged builder session for animated templates
//! - `texturestore` – texture handles and the loaded textures behind them
//! - `viewerconfig` – INI settings for the sprite sheet viewer
//! - `worldtime` – simulation time and delta
pub mod spritemanager;
pub mod templatebuilder;
pub mod texturestore;
pub mod viewerconfig;
pub mod worldtime;
