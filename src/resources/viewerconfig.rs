//! Viewer configuration resource.
//!
//! Settings for the sprite sheet viewer, loaded from an INI file. Every key
//! has a default so the viewer can start without a config file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [sheet]
//! texture = ./assets/sheet.png
//! frame_width = 32
//! frame_height = 32
//! frames = 8
//! delay = 0.1
//! loops = 0
//! scale = 2.0
//! anchor = center
//!
//! [scene]
//! sprites = 16
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::anchor::Anchor;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SHEET_TEXTURE: &str = "./assets/sheet.png";
const DEFAULT_FRAME_WIDTH: u32 = 32;
const DEFAULT_FRAME_HEIGHT: u32 = 32;
const DEFAULT_FRAMES: u32 = 8;
const DEFAULT_DELAY: f32 = 0.1;
const DEFAULT_LOOPS: u32 = 0;
const DEFAULT_SCALE: f32 = 2.0;
const DEFAULT_SPRITES: u32 = 16;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Viewer configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Path of the sprite sheet image.
    pub sheet_texture: PathBuf,
    /// Size of one cell on the sheet, in pixels.
    pub frame_width: u32,
    pub frame_height: u32,
    /// Number of cells in the animation, read left to right, top to bottom.
    pub frames: u32,
    /// Seconds per frame.
    pub delay: f32,
    /// Loop count, 0 for forever.
    pub loops: u32,
    pub scale: f32,
    pub anchor: Anchor,
    /// Number of sprite instances to spawn.
    pub sprites: u32,
    pub config_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            sheet_texture: PathBuf::from(DEFAULT_SHEET_TEXTURE),
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            frames: DEFAULT_FRAMES,
            delay: DEFAULT_DELAY,
            loops: DEFAULT_LOOPS,
            scale: DEFAULT_SCALE,
            anchor: Anchor::Center,
            sprites: DEFAULT_SPRITES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from [`ViewerConfig::config_path`].
    ///
    /// Missing values keep their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!(
            "Loaded config from {:?}: {}x{} window, sheet {:?} ({} frames of {}x{}), {} sprites",
            self.config_path,
            self.window_width,
            self.window_height,
            self.sheet_texture,
            self.frames,
            self.frame_width,
            self.frame_height,
            self.sprites
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window]
        if let Some(v) = config.getuint("window", "width").ok().flatten() {
            self.window_width = v as u32;
        }
        if let Some(v) = config.getuint("window", "height").ok().flatten() {
            self.window_height = v as u32;
        }
        if let Some(v) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = v as u32;
        }

        // [sheet]
        if let Some(v) = config.get("sheet", "texture") {
            self.sheet_texture = PathBuf::from(v);
        }
        if let Some(v) = config.getuint("sheet", "frame_width").ok().flatten() {
            self.frame_width = v as u32;
        }
        if let Some(v) = config.getuint("sheet", "frame_height").ok().flatten() {
            self.frame_height = v as u32;
        }
        if let Some(v) = config.getuint("sheet", "frames").ok().flatten() {
            self.frames = v as u32;
        }
        if let Some(v) = config.getfloat("sheet", "delay").ok().flatten() {
            self.delay = v as f32;
        }
        if let Some(v) = config.getuint("sheet", "loops").ok().flatten() {
            self.loops = v as u32;
        }
        if let Some(v) = config.getfloat("sheet", "scale").ok().flatten() {
            self.scale = v as f32;
        }
        if let Some(v) = config.get("sheet", "anchor") {
            match Anchor::from_name(&v) {
                Some(anchor) => self.anchor = anchor,
                None => warn!("Unknown anchor '{}' in config, keeping {:?}", v, self.anchor),
            }
        }

        // [scene]
        if let Some(v) = config.getuint("scene", "sprites").ok().flatten() {
            self.sprites = v as u32;
        }
    }

    /// Save configuration to [`ViewerConfig::config_path`].
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "sheet",
            "texture",
            Some(self.sheet_texture.display().to_string()),
        );
        config.set("sheet", "frame_width", Some(self.frame_width.to_string()));
        config.set("sheet", "frame_height", Some(self.frame_height.to_string()));
        config.set("sheet", "frames", Some(self.frames.to_string()));
        config.set("sheet", "delay", Some(self.delay.to_string()));
        config.set("sheet", "loops", Some(self.loops.to_string()));
        config.set("sheet", "scale", Some(self.scale.to_string()));
        config.set("sheet", "anchor", Some(format!("{:?}", self.anchor)));

        config.set("scene", "sprites", Some(self.sprites.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
