//! Viewer scene setup.
//!
//! Turns a [`ViewerConfig`] into sprite templates on a [`SpriteManager`] and
//! spawns the instances the viewer animates:
//!
//! - a static `"backdrop"` template cut from the first sheet cell
//! - a one-animation `"walker"` template that plays the configured cells
//!   left to right, top to bottom
//!
//! Nothing here opens a window, so the same setup path serves `--check`.

use log::info;
use raylib::prelude::Vector2;

use crate::components::anchor::Anchor;
use crate::components::appearance::SpriteDef;
use crate::components::spriteref::{AnimatedSpriteRef, StaticSpriteRef};
use crate::error::Result;
use crate::resources::spritemanager::SpriteManager;
use crate::resources::texturestore::TextureHandle;
use crate::resources::viewerconfig::ViewerConfig;

pub const BACKDROP_TEMPLATE: &str = "backdrop";
pub const WALKER_TEMPLATE: &str = "walker";
pub const WALK_ANIMATION: &str = "walk";

const BACKDROP_LAYER: f32 = 1.0;
const WALKER_LAYER: f32 = 0.5;

/// Grid of equally sized cells on a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub frame_width: i32,
    pub frame_height: i32,
    pub columns: i32,
    pub frames: u32,
}

impl SheetLayout {
    /// Layout for a sheet `sheet_width` pixels wide. A sheet narrower than
    /// one cell still gets a single column.
    pub fn new(config: &ViewerConfig, sheet_width: i32) -> Self {
        let frame_width = config.frame_width as i32;
        let columns = if frame_width > 0 {
            (sheet_width / frame_width).max(1)
        } else {
            1
        };
        Self {
            frame_width,
            frame_height: config.frame_height as i32,
            columns,
            frames: config.frames,
        }
    }

    /// Top-left pixel of cell `index`.
    pub fn cell(&self, index: u32) -> (i32, i32) {
        let index = index as i32;
        (
            (index % self.columns) * self.frame_width,
            (index / self.columns) * self.frame_height,
        )
    }
}

/// Register the backdrop and walker templates.
pub fn build_templates(
    manager: &mut SpriteManager,
    config: &ViewerConfig,
    layout: &SheetLayout,
    sheet: &TextureHandle,
) -> Result<()> {
    let cell = |index: u32| {
        let (x, y) = layout.cell(index);
        SpriteDef::new()
            .texture(sheet.clone())
            .source(x, y, layout.frame_width, layout.frame_height)
            .scale(config.scale)
    };

    manager.create_static_template(
        BACKDROP_TEMPLATE,
        cell(0).anchor(Anchor::TopLeft),
        BACKDROP_LAYER,
    )?;

    manager.start_animated_template(WALKER_TEMPLATE, WALKER_LAYER, 1)?;
    manager.add_animation(
        WALK_ANIMATION,
        layout.frames as usize,
        config.delay,
        config.loops,
    )?;
    for index in 0..layout.frames {
        manager.add_frame(WALK_ANIMATION, index, cell(index).anchor(config.anchor))?;
    }
    manager.end_animated_template()?;

    info!(
        "Built templates: {} frames of {}x{} from '{}'",
        layout.frames,
        layout.frame_width,
        layout.frame_height,
        sheet
    );
    Ok(())
}

/// Spawn the visible backdrop at the top-left corner.
pub fn spawn_backdrop(manager: &mut SpriteManager) -> Result<StaticSpriteRef> {
    let backdrop = manager.new_static_sprite(BACKDROP_TEMPLATE)?;
    backdrop.borrow_mut().set_visible(true);
    Ok(backdrop)
}

/// Spawn `count` walkers at random positions inside `area`, playing.
pub fn spawn_walkers(
    manager: &mut SpriteManager,
    count: u32,
    area: (f32, f32),
    rng: &mut fastrand::Rng,
) -> Result<Vec<AnimatedSpriteRef>> {
    let mut walkers = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let walker = manager.new_animated_sprite(WALKER_TEMPLATE)?;
        {
            let mut sprite = walker.borrow_mut();
            sprite.set_position(Vector2 {
                x: rng.f32() * area.0,
                y: rng.f32() * area.1,
            });
            sprite.set_visible(true);
            sprite.select_animation(WALK_ANIMATION)?;
        }
        walkers.push(walker);
    }
    Ok(walkers)
}

/// Restart the walk animation on every walker.
pub fn replay(walkers: &[AnimatedSpriteRef]) -> Result<()> {
    for walker in walkers {
        walker.borrow_mut().select_animation(WALK_ANIMATION)?;
    }
    Ok(())
}

/// Flip visibility on every walker.
pub fn toggle_visibility(walkers: &[AnimatedSpriteRef]) {
    for walker in walkers {
        let mut sprite = walker.borrow_mut();
        let visible = sprite.visible();
        sprite.set_visible(!visible);
    }
}
