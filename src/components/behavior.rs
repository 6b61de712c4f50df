//! Component capability interface.
//!
//! The four engine components live in named single slots on the game object;
//! everything else (gameplay logic like the player controller or camera
//! follow) implements [`Behavior`] and goes into the open auxiliary list.
//! Behaviors update last in the per-frame order and receive their owner
//! mutably, so they can steer the owner's body, drive its animator, and
//! queue deferred commands.

use crate::gameobject::GameObject;
use crate::scene::TickCtx;

/// Kind tag for the closed set of component variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Sprite,
    Animator,
    Collider,
    PhysicsBody,
    Custom,
}

/// Gameplay logic attached to a game object.
pub trait Behavior: std::fmt::Debug {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Custom
    }

    /// Called once per tick, after the owner's engine components updated.
    fn update(&mut self, owner: &mut GameObject, ctx: &mut TickCtx<'_>);

    /// Called exactly once when the scene stops; release any externally
    /// registered handles here.
    fn on_stop(&mut self) {}
}
