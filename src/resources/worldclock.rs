//! Scene clock.
//!
//! Tracks elapsed and per-tick delta time in milliseconds. The raw wall-clock
//! delta is scaled by `time_scale` before anything else sees it, so slowing
//! or speeding the simulation is a single knob.

#[derive(Debug, Clone, Copy)]
pub struct WorldClock {
    /// Milliseconds since the scene started, scaled.
    pub elapsed: f32,
    /// Scaled delta of the current tick in milliseconds.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldClock {
    fn default() -> Self {
        WorldClock {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldClock {
    /// Fold a raw wall-clock delta (milliseconds) into the clock.
    pub fn advance(&mut self, raw_delta: f32) {
        self.delta = raw_delta * self.time_scale;
        self.elapsed += self.delta;
    }
}
