//! Spritekit viewer entry point.
//!
//! Loads a sprite sheet described by `config.ini`, builds a walker template
//! through the staged template builder and animates a crowd of instances:
//! - **raylib** for the window and texture drawing
//! - **bevy_ecs** for the world, resources and the update schedule
//!
//! # Main Loop
//!
//! 1. Parse the CLI and load the viewer configuration
//! 2. Open the window and load the sheet texture
//! 3. Build templates and spawn instances
//! 4. Each frame: update `WorldTime`, run the update schedule, draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --sprites 32
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;

use spritekit::resources::spritemanager::SpriteManager;
use spritekit::resources::texturestore::{TextureHandle, TextureStore};
use spritekit::resources::viewerconfig::ViewerConfig;
use spritekit::resources::worldtime::WorldTime;
use spritekit::scene::{self, SheetLayout};
use spritekit::systems::render::render_sprites;
use spritekit::systems::sprites::update_sprites;
use spritekit::systems::time::update_world_time;

const SHEET_KEY: &str = "sheet";

/// Spritekit sprite sheet viewer
#[derive(Parser)]
#[command(version, about = "Plays a sprite sheet animation on a crowd of sprites.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of sprites to spawn, overriding `[scene] sprites`.
    #[arg(long, value_name = "N")]
    sprites: Option<u32>,

    /// Build the templates without opening a window, print a summary and exit.
    #[arg(long)]
    check: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ViewerConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default configuration: {}", e);
    }
    if let Some(sprites) = cli.sprites {
        config.sprites = sprites;
    }

    if cli.check {
        check(&config);
        return;
    }

    if let Err(e) = run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Early-exit: build templates against a placeholder texture.
fn check(config: &ViewerConfig) {
    let sheet = TextureHandle::from(SHEET_KEY);
    // Without the image, lay every frame out on a single row.
    let sheet_width = config.frame_width.saturating_mul(config.frames.max(1)) as i32;
    let layout = SheetLayout::new(config, sheet_width);
    let mut manager = SpriteManager::new();
    match scene::build_templates(&mut manager, config, &layout, &sheet) {
        Ok(()) => {
            println!(
                "{}: {} static and {} animated templates, {} frames of {}x{}, delay {}s, loops {}",
                config.config_path.display(),
                manager.static_template_count(),
                manager.animated_template_count(),
                layout.frames,
                layout.frame_width,
                layout.frame_height,
                config.delay,
                config.loops,
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(config: ViewerConfig) -> Result<(), String> {
    let (window_width, window_height) = config.window_size();

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Spritekit Viewer")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- Textures ---------------
    let sheet_path = config.sheet_texture.to_string_lossy().into_owned();
    let texture = rl
        .load_texture(&thread, &sheet_path)
        .map_err(|e| format!("Failed to load sheet '{}': {}", sheet_path, e))?;
    log::info!(
        "Loaded sheet '{}' ({}x{})",
        sheet_path,
        texture.width,
        texture.height
    );
    let layout = SheetLayout::new(&config, texture.width);
    let mut textures = TextureStore::new();
    let sheet = textures.insert(SHEET_KEY, texture);

    // --------------- Templates + instances ---------------
    let mut manager = SpriteManager::new();
    scene::build_templates(&mut manager, &config, &layout, &sheet).map_err(|e| e.to_string())?;
    scene::spawn_backdrop(&mut manager).map_err(|e| e.to_string())?;
    let mut rng = fastrand::Rng::new();
    let walkers = scene::spawn_walkers(
        &mut manager,
        config.sprites,
        (window_width as f32, window_height as f32),
        &mut rng,
    )
    .map_err(|e| e.to_string())?;
    log::info!("Spawned {} sprites", walkers.len());

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(textures);
    world.insert_resource(config);
    world.insert_non_send_resource(manager);

    let mut update = Schedule::default();
    update.add_systems(update_sprites);
    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize schedule: {:?}", e))?;

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            if let Err(e) = scene::replay(&walkers) {
                log::warn!("Replay failed: {}", e);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            scene::toggle_visibility(&walkers);
        }

        update_world_time(&mut world, rl.get_frame_time());
        update.run(&mut world);
        world.clear_trackers();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGRAY);
        render_sprites(&world, &mut d);
        d.draw_fps(10, 10);
    }
    Ok(())
}
