//! Demo configuration resource.
//!
//! Manages the settings of the demo binary loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! vsync = true
//! target_fps = 120
//!
//! [scroller]
//! direction = bottom
//! transition_speed = 3
//! z_index = 0
//! alpha = 1.0
//! images = assets/bg1.png, assets/bg2.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::scroller::direction::ScrollDirection;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_DIRECTION: ScrollDirection = ScrollDirection::Bottom;
const DEFAULT_TRANSITION_SPEED: f32 = 3.0;
const DEFAULT_Z_INDEX: i32 = 0;
const DEFAULT_ALPHA: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo configuration resource.
///
/// Stores window settings and the scroller to build at startup.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Where the background images travel.
    pub direction: ScrollDirection,
    /// Scroll transition speed, `(0, 100]`.
    pub transition_speed: f32,
    /// Draw order of the background nodes.
    pub z_index: i32,
    /// Opacity of the background nodes.
    pub alpha: f32,
    /// Image files to tile, in order.
    pub images: Vec<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            direction: DEFAULT_DIRECTION,
            transition_speed: DEFAULT_TRANSITION_SPEED,
            z_index: DEFAULT_Z_INDEX,
            alpha: DEFAULT_ALPHA,
            images: Vec::new(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, scroll {} at {} with {} images",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.direction,
            self.transition_speed,
            self.images.len()
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [scroller] section
        if let Some(direction) = config.get("scroller", "direction") {
            match direction.parse() {
                Ok(direction) => self.direction = direction,
                Err(e) => warn!("Ignoring [scroller] direction: {}", e),
            }
        }
        if let Some(speed) = config.getfloat("scroller", "transition_speed").ok().flatten() {
            self.transition_speed = speed as f32;
        }
        if let Some(z) = config.getint("scroller", "z_index").ok().flatten() {
            self.z_index = z as i32;
        }
        if let Some(alpha) = config.getfloat("scroller", "alpha").ok().flatten() {
            self.alpha = alpha as f32;
        }
        if let Some(images) = config.get("scroller", "images") {
            self.images = images
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [scroller] section
        config.set("scroller", "direction", Some(self.direction.to_string()));
        config.set(
            "scroller",
            "transition_speed",
            Some(self.transition_speed.to_string()),
        );
        config.set("scroller", "z_index", Some(self.z_index.to_string()));
        config.set("scroller", "alpha", Some(self.alpha.to_string()));
        let images: Vec<String> = self
            .images
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        config.set("scroller", "images", Some(images.join(", ")));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
