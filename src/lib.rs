//! Salto Engine 2D library.
//!
//! A small real-time 2D platform-game runtime: a scene of game objects, each
//! optionally carrying a collider, physics body, sprite, animator, and
//! gameplay behaviors, advanced by a wall-clock-delta tick loop with AABB
//! collision resolution. Exposed as a library for embedding and for the
//! integration tests.

pub mod behaviors;
pub mod commands;
pub mod components;
pub mod gameobject;
pub mod level;
pub mod prefabs;
pub mod render;
pub mod resources;
pub mod scene;
