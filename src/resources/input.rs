//! Per-scene keyboard input resource.
//!
//! Captures only the actions the runtime cares about. The embedding host
//! forwards key-down/key-up transitions through [`InputState::press`] and
//! [`InputState::release`]; behaviors read held state with
//! [`InputState::is_pressed`]. The resource lives on the scene and is dropped
//! with it, so no global listener registry exists.

/// Gameplay actions with a pressed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

/// Held state of every gameplay action.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    jump: bool,
}

impl InputState {
    pub fn press(&mut self, action: Action) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: Action) {
        self.set(action, false);
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Jump => self.jump,
        }
    }

    /// Release everything, as when the scene loses focus or stops.
    pub fn clear(&mut self) {
        *self = InputState::default();
    }

    fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Jump => self.jump = held,
        }
    }
}
