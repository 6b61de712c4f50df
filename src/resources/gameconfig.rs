//! Game configuration resource.
//!
//! Manages runtime settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [canvas]
//! width = 600
//! height = 400
//!
//! [loop]
//! tick_ms = 1
//! time_scale = 1.0
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_CANVAS_WIDTH: u32 = 600;
const DEFAULT_CANVAS_HEIGHT: u32 = 400;
const DEFAULT_TICK_MS: u64 = 1;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Runtime configuration.
///
/// Stores the logical canvas size, tick pacing, and the time scale applied to
/// wall-clock deltas. Missing file or missing keys fall back to defaults.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Logical canvas width in pixels.
    pub canvas_width: u32,
    /// Logical canvas height in pixels.
    pub canvas_height: u32,
    /// Sleep between ticks of the demo loop, in milliseconds.
    pub tick_ms: u64,
    /// Multiplier applied to wall-clock deltas.
    pub time_scale: f32,
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
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            time_scale: DEFAULT_TIME_SCALE,
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

        // [canvas] section
        if let Some(width) = config.getuint("canvas", "width").ok().flatten() {
            self.canvas_width = width as u32;
        }
        if let Some(height) = config.getuint("canvas", "height").ok().flatten() {
            self.canvas_height = height as u32;
        }

        // [loop] section
        if let Some(tick) = config.getuint("loop", "tick_ms").ok().flatten() {
            self.tick_ms = tick;
        }
        if let Some(scale) = config.getfloat("loop", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        info!(
            "Loaded config: {}x{} canvas, tick_ms={}, time_scale={}",
            self.canvas_width, self.canvas_height, self.tick_ms, self.time_scale
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("canvas", "width", Some(self.canvas_width.to_string()));
        config.set("canvas", "height", Some(self.canvas_height.to_string()));
        config.set("loop", "tick_ms", Some(self.tick_ms.to_string()));
        config.set("loop", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Aspect-preserving scale factor that fits the logical canvas into a
    /// window of the given size.
    pub fn fit_scale(&self, window_width: u32, window_height: u32) -> f32 {
        let sx = window_width as f32 / self.canvas_width as f32;
        let sy = window_height as f32 / self.canvas_height as f32;
        sx.min(sy)
    }
}
