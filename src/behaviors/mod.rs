//! Gameplay behaviors shipped with the built-in prefabs.
//!
//! - [`camera`] – follow a named target
//! - [`player`] – input control, jump gating, animation state machine

pub mod camera;
pub mod player;
