//! Sprite rendering component.
//!
//! Thin by design: the runtime only needs a renderable slot with frame
//! timing so the animator has something to drive and draw layering can be
//! tested. Actual rasterization happens behind the
//! [`Renderer`](crate::render::Renderer) seam; frames are opaque texture
//! keys.

use serde::Deserialize;

use crate::render::Renderer;

/// One animation usable by a [`Sprite`]: frame keys plus geometry and
/// playback speed (frames per second).
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDef {
    #[serde(default)]
    pub frames: Vec<String>,
    pub width: f32,
    pub height: f32,
    /// Playback speed in frames per second.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Center of the sprite relative to the owner (pre-centered on apply).
    #[serde(default)]
    pub x_offset: f32,
    #[serde(default)]
    pub y_offset: f32,
}

fn default_speed() -> f32 {
    1.0
}

/// Renderable slot: current frame list, pre-centered offsets, playback
/// state.
#[derive(Debug, Clone)]
pub struct Sprite {
    frames: Vec<String>,
    pub width: f32,
    pub height: f32,
    /// Milliseconds per frame, derived from FPS.
    frame_time: f32,
    /// Stored pre-centered, like the collider offsets.
    pub x_offset: f32,
    pub y_offset: f32,
    frame_index: usize,
    accumulator: f32,
    pub paused: bool,
}

impl Sprite {
    /// Create a sprite. `x_offset`/`y_offset` are the center of the sprite
    /// relative to the owner; `speed` is in frames per second.
    pub fn new(
        frames: Vec<String>,
        width: f32,
        height: f32,
        speed: f32,
        x_offset: f32,
        y_offset: f32,
    ) -> Self {
        Self {
            frames,
            width,
            height,
            frame_time: 1000.0 / speed,
            x_offset: x_offset - width / 2.0,
            y_offset: y_offset - height / 2.0,
            frame_index: 0,
            accumulator: 0.0,
            paused: false,
        }
    }

    pub fn from_def(def: &AnimationDef) -> Self {
        Self::new(
            def.frames.clone(),
            def.width,
            def.height,
            def.speed,
            def.x_offset,
            def.y_offset,
        )
    }

    /// Switch to a different animation, restarting playback.
    pub fn change_animation(&mut self, def: &AnimationDef) {
        self.frames = def.frames.clone();
        self.width = def.width;
        self.height = def.height;
        self.x_offset = def.x_offset - def.width / 2.0;
        self.y_offset = def.y_offset - def.height / 2.0;
        self.frame_time = 1000.0 / def.speed;
        self.frame_index = 0;
        self.accumulator = 0.0;
    }

    /// Retune playback speed (FPS) without restarting.
    pub fn set_speed(&mut self, speed: f32) {
        self.frame_time = 1000.0 / speed;
    }

    pub fn current_frame(&self) -> Option<&str> {
        self.frames.get(self.frame_index).map(String::as_str)
    }

    /// Advance playback and draw at the owner position.
    pub fn update(&mut self, x: f32, y: f32, dt: f32, renderer: &mut dyn Renderer) {
        if !self.paused && !self.frames.is_empty() {
            self.accumulator += dt;
            if self.accumulator > self.frame_time {
                self.frame_index = (self.frame_index + 1) % self.frames.len();
                self.accumulator = 0.0;
            }
        }

        renderer.draw_rect(
            x + self.x_offset,
            y + self.y_offset,
            self.width,
            self.height,
            self.current_frame(),
        );
    }
}
