//! Salto Engine main entry point.
//!
//! A small 2D platformer runtime written in Rust using:
//! - **serde + serde_json** for level descriptors
//! - **configparser** for the INI runtime configuration
//! - **log + env_logger** for structured logging
//!
//! This executable loads a JSON level, builds a scene through the prefab
//! registry, and drives the tick loop until the level ends (goal reached,
//! player fell out, or time budget elapsed).
//!
//! # Project Structure
//!
//! - [`salto::components`] – entity components (collider, physics body,
//!   sprite, animator)
//! - [`salto::behaviors`] – scripted behaviors (player controller, camera)
//! - [`salto::scene`] – entity list owner and tick driver
//! - [`salto::level`] – level descriptors and the prefab registry
//! - [`salto::resources`] – config, input, and the world clock
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- assets/levels/demo.json
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use salto::level::{LevelData, PrefabRegistry};
use salto::render::{NoopRenderer, Renderer, TraceRenderer};
use salto::resources::gameconfig::GameConfig;
use salto::scene::Scene;

const DEFAULT_LEVEL_PATH: &str = "assets/levels/demo.json";

/// Salto Engine 2D
#[derive(Parser)]
#[command(version, about = "Salto Engine 2D, a tiny platformer runtime")]
struct Cli {
    /// Path to the JSON level descriptor.
    #[arg(value_name = "LEVEL", default_value = DEFAULT_LEVEL_PATH)]
    level: PathBuf,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Advance every tick by this fixed delta in milliseconds instead of
    /// wall-clock time. Makes runs deterministic.
    #[arg(long, value_name = "MS")]
    fixed_dt: Option<f32>,

    /// Log every draw call at trace level.
    #[arg(long)]
    trace_draws: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let level = match LevelData::from_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("Failed to load level {}: {}", cli.level.display(), e);
            std::process::exit(1);
        }
    };

    let renderer: Box<dyn Renderer> = if cli.trace_draws {
        Box::new(TraceRenderer)
    } else {
        Box::new(NoopRenderer)
    };

    let registry = PrefabRegistry::default();
    let mut scene = match Scene::from_level(&level, &registry, renderer) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };
    scene.set_time_scale(config.time_scale);

    info!(
        "Salto Engine running {} on a {}x{} canvas",
        cli.level.display(),
        config.canvas_width,
        config.canvas_height
    );

    while scene.is_running() {
        match cli.fixed_dt {
            Some(dt) => scene.advance(dt),
            None => scene.tick(),
        }
        thread::sleep(Duration::from_millis(config.tick_ms));
    }

    info!(
        "level over after {:.0} ms: won={}, coins={}",
        scene.elapsed_time(),
        scene.won(),
        scene.coin_count()
    );
}
