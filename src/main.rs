//! Aberred Scroll demo entry point.
//!
//! Opens a raylib window and scrolls a list of images forever using
//! [`InfiniteScrollingBackground`]:
//! - **raylib** for windowing, textures and drawing
//! - **bevy_ecs** for the scene, the background nodes and their motions
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (if present) and apply command line overrides
//! 2. Load the textures and create a scene entity the size of the window
//! 3. Build the scroller and call `scroll()`
//! 4. Each frame: handle keys, advance `WorldTime`, play motions, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- assets/bg1.png assets/bg2.png --direction left
//! ```

use std::path::{Path, PathBuf};

use aberredscroll::components::sceneframe::SceneFrame;
use aberredscroll::resources::gameconfig::GameConfig;
use aberredscroll::resources::screensize::ScreenSize;
use aberredscroll::resources::texturestore::TextureStore;
use aberredscroll::resources::worldtime::WorldTime;
use aberredscroll::scroller::{BackgroundImage, InfiniteScrollingBackground, ScrollDirection};
use aberredscroll::systems::render::{render_debug_ui, render_pass};
use aberredscroll::systems::scrollmotion::scroll_motion_system;
use aberredscroll::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;

const SPEED_STEP: f32 = 0.25;
const ALPHA_STEP: f32 = 0.1;

/// Aberred Scroll
#[derive(Parser)]
#[command(version, about = "Infinite scrolling background demo built on the Aberred Engine stack.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Direction the images travel (overrides the config file).
    #[arg(long, value_enum)]
    direction: Option<ScrollDirection>,

    /// Transition speed in (0, 100], the higher the faster (overrides the config file).
    #[arg(long, value_name = "SPEED")]
    transition_speed: Option<f32>,

    /// Print the computed scroll plan as JSON and exit (no window needed).
    #[arg(long)]
    dump_plan: bool,

    /// Images to tile, in order (overrides the config file).
    images: Vec<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(direction) = cli.direction {
        config.direction = direction;
    }
    if let Some(speed) = cli.transition_speed {
        config.transition_speed = speed;
    }
    if !cli.images.is_empty() {
        config.images = cli.images;
    }

    let result = if cli.dump_plan {
        dump_plan(&config)
    } else {
        run(&config)
    };
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn path_key(path: &Path) -> String {
    path.display().to_string()
}

/// Build the scroller against a window-sized scene without opening a window
/// and print its layout.
fn dump_plan(config: &GameConfig) -> Result<(), String> {
    let mut images = Vec::with_capacity(config.images.len());
    for path in &config.images {
        let key = path_key(path);
        let image =
            Image::load_image(&key).map_err(|e| format!("Failed to load image {}: {}", key, e))?;
        images.push(BackgroundImage::new(key, image.width as f32, image.height as f32));
    }

    let mut world = World::new();
    let scene = world
        .spawn(SceneFrame::new(
            config.window_width as f32,
            config.window_height as f32,
        ))
        .id();
    let scroller = InfiniteScrollingBackground::new(
        &mut world,
        &images,
        scene,
        config.direction,
        config.transition_speed,
    )
    .map_err(|e| e.to_string())?;

    let plan = scroller.plan(&world);
    let tiles: Vec<_> = plan
        .tiles
        .iter()
        .zip(&images)
        .map(|(tile, image)| {
            serde_json::json!({
                "image": image.key,
                "start": [tile.start.x, tile.start.y],
                "entry": tile.motion.entry.as_slice(),
                "cycle": tile.motion.cycle.as_slice(),
            })
        })
        .collect();
    let dump = serde_json::json!({
        "direction": config.direction,
        "transition_speed": scroller.transition_speed().get(),
        "sprite_size": [scroller.sprite_size().x, scroller.sprite_size().y],
        "extent": plan.extent,
        "tile_duration": plan.tile_duration,
        "tiles": tiles,
    });
    let text = serde_json::to_string_pretty(&dump).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

fn run(config: &GameConfig) -> Result<(), String> {
    log::info!("Hello, world! This is Aberred Scroll!");

    let (w, h) = config.window_size();
    let mut builder = raylib::init();
    builder.size(w as i32, h as i32).title("Aberred Scroll");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- Textures ---------------
    let mut textures = TextureStore::new();
    let mut images = Vec::with_capacity(config.images.len());
    for path in &config.images {
        let key = path_key(path);
        let texture = rl
            .load_texture(&thread, &key)
            .map_err(|e| format!("Failed to load texture {}: {}", key, e))?;
        images.push(BackgroundImage::new(
            key.clone(),
            texture.width as f32,
            texture.height as f32,
        ));
        textures.insert(key, texture);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: w as i32,
        h: h as i32,
    });
    world.insert_non_send_resource(textures);
    let scene = world.spawn(SceneFrame::new(w as f32, h as f32)).id();

    let scroller = InfiniteScrollingBackground::new(
        &mut world,
        &images,
        scene,
        config.direction,
        config.transition_speed,
    )
    .map_err(|e| e.to_string())?;
    scroller.scroll(&mut world);
    scroller.set_z_index(&mut world, config.z_index);
    scroller.set_alpha(&mut world, config.alpha);

    let mut update = Schedule::default();
    update.add_systems(scroll_motion_system);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            let paused = scroller.is_paused(&world).unwrap_or(false);
            scroller.set_paused(&mut world, !paused);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_UP) {
            let speed = scroller.speed(&world).unwrap_or(1.0);
            scroller.set_speed(&mut world, speed + SPEED_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
            let speed = scroller.speed(&world).unwrap_or(1.0);
            scroller.set_speed(&mut world, speed - SPEED_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_EQUAL) || rl.is_key_pressed(KeyboardKey::KEY_KP_ADD)
        {
            let alpha = scroller.alpha(&world).unwrap_or(1.0);
            scroller.set_alpha(&mut world, alpha + ALPHA_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_MINUS)
            || rl.is_key_pressed(KeyboardKey::KEY_KP_SUBTRACT)
        {
            let alpha = scroller.alpha(&world).unwrap_or(1.0);
            scroller.set_alpha(&mut world, alpha - ALPHA_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            scroller.scroll(&mut world);
        }

        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        let paused = scroller.is_paused(&world).unwrap_or(false);
        let speed = scroller.speed(&world).unwrap_or(1.0);
        let alpha = scroller.alpha(&world).unwrap_or(1.0);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        render_pass(&mut world, &mut d);
        render_debug_ui(&mut d, paused, speed, alpha);
    }

    Ok(())
}
