//! Animator component.
//!
//! Holds a table of [`AnimationDef`]s indexed by an integer state and applies
//! them to the sibling sprite. Not part of the automatic per-frame update
//! chain: gameplay behaviors (the player state machine) drive it explicitly
//! with the state they computed for the frame.

use log::warn;

use crate::components::sprite::{AnimationDef, Sprite};

#[derive(Debug, Clone, Default)]
pub struct Animator {
    state: usize,
    animations: Vec<AnimationDef>,
}

impl Animator {
    pub fn new(animations: Vec<AnimationDef>) -> Self {
        Self {
            state: 0,
            animations,
        }
    }

    pub fn state(&self) -> usize {
        self.state
    }

    /// Drive the sibling sprite: on a state change the sprite switches
    /// animation; the playback speed is always retuned to
    /// `def.speed * speed_scale` (the player scales run animations by
    /// horizontal speed).
    pub fn apply(&mut self, state: usize, speed_scale: f32, sprite: &mut Sprite) {
        let Some(def) = self.animations.get(state) else {
            warn!("animator has no state {state}");
            return;
        };

        if state != self.state {
            sprite.change_animation(def);
        }
        self.state = state;
        sprite.set_speed(def.speed * speed_scale);
    }
}
