//! Shared per-scene state.
//!
//! Submodules overview:
//! - [`gameconfig`] – INI-backed runtime settings (canvas size, tick pacing)
//! - [`input`] – keyboard action state forwarded by the embedding host
//! - [`worldclock`] – elapsed/delta time in milliseconds

pub mod gameconfig;
pub mod input;
pub mod worldclock;
