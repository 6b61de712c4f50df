//! Physics body component: integration and collision resolution.
//!
//! A [`PhysicsBody`] integrates gravity and velocity into its owner's
//! position, then tests the owner's collider against every other enabled
//! collider in the scene and resolves blocking contacts with a
//! side-dependent friction/bounce response and a position snap.
//!
//! Ordering rules that gameplay depends on:
//! - Each blocking pair runs side selection and response independently;
//!   later pairs in the same frame overwrite `colliding_side` and the
//!   friction accumulators (last write wins).
//! - After the enumeration, any bottom contact forces the reported side to
//!   `Bottom` (ground checks), and any top contact forces `in_air` back to
//!   true (ceiling hits report as airborne).
//! - Friction set by a collision is transient: it decays the velocity on the
//!   *next* frame's integration and is then reset to zero.
//!
//! Units are pixels and milliseconds; the default gravity is 0.00098 px/ms².

use log::trace;

use crate::commands::Commands;
use crate::components::boxcollider::{BoxCollider, ColliderView, Side};
use crate::gameobject::GameObject;

pub const DEFAULT_GRAVITY: f32 = 0.00098;

/// Velocity/gravity integrator with one-collision-per-pair resolution.
///
/// Only meaningful on an entity that also owns a [`BoxCollider`]; the attach
/// guard on [`GameObject`](crate::gameobject::GameObject) enforces that, so
/// the update path never has to.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    /// Downward acceleration in px/ms².
    pub gravity: f32,
    pub mass: f32,
    /// Velocity in px/ms.
    pub x_velocity: f32,
    pub y_velocity: f32,
    /// Transient per-frame friction accumulators, set by a collision response
    /// and consumed by the next frame's integration step.
    pub x_friction: f32,
    pub y_friction: f32,
    /// False only when the last frame resolved a blocking contact that was
    /// not overridden by a top hit.
    pub in_air: bool,
    /// Side reported for the last frame, after the bottom-priority override.
    pub colliding_side: Side,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsBody {
    pub fn new() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            mass: 1.0,
            x_velocity: 0.0,
            y_velocity: 0.0,
            x_friction: 0.0,
            y_friction: 0.0,
            in_air: true,
            colliding_side: Side::None,
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.x_velocity = x;
        self.y_velocity = y;
        self
    }

    /// True when the last frame ended resting on something (not airborne).
    pub fn on_ground(&self) -> bool {
        !self.in_air
    }

    pub fn colliding_side(&self) -> Side {
        self.colliding_side
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.x_velocity, self.y_velocity)
    }

    /// Advance one frame: gravity, transient friction decay, position
    /// integration, then collision detection and resolution against
    /// `others`.
    ///
    /// `collider` is the owner's own collider (passed by value-copy so the
    /// owner position stays mutable). `others` must already exclude disabled
    /// entities; colliders belonging to the owner itself are skipped here by
    /// identity.
    pub fn step(
        &mut self,
        owner: &mut GameObject,
        collider: &BoxCollider,
        others: &[ColliderView],
        dt: f32,
        commands: &mut Commands,
    ) {
        // 1. Gravity.
        self.y_velocity += self.gravity * dt;

        // 2. Transient friction, per axis, clamped at zero so it never
        //    pushes the velocity past rest. Reset afterwards: it is a
        //    single-frame effect, not persistent drag.
        if self.y_velocity > 0.0 {
            self.y_velocity -= self.y_friction * self.mass * dt;
            if self.y_velocity < 0.0 {
                self.y_velocity = 0.0;
            }
        } else {
            self.y_velocity += self.y_friction * self.mass * dt;
            if self.y_velocity > 0.0 {
                self.y_velocity = 0.0;
            }
        }

        if self.x_velocity > 0.0 {
            self.x_velocity -= self.x_friction * self.mass * dt;
            if self.x_velocity < 0.0 {
                self.x_velocity = 0.0;
            }
        } else {
            self.x_velocity += self.x_friction * self.mass * dt;
            if self.x_velocity > 0.0 {
                self.x_velocity = 0.0;
            }
        }

        self.x_friction = 0.0;
        self.y_friction = 0.0;

        // 3. Integrate position.
        owner.y += self.y_velocity * dt;
        owner.x += self.x_velocity * dt;

        // 4. Detect and resolve collisions.
        self.in_air = true;
        self.colliding_side = Side::None;
        let mut bottom_hit = false;
        let mut top_hit = false;

        for other in others {
            if other.owner == owner.id() {
                continue;
            }

            // Recapture the own collider each pair: an earlier response this
            // frame may have snapped the owner to a new position.
            let own = ColliderView::capture(owner.id(), owner.x, owner.y, collider);
            let Some(pair) = own.collide(other, commands) else {
                continue;
            };

            self.in_air = false;
            let side = pair.impact_side();
            self.colliding_side = side;
            trace!("{:?} hit {:?} on {:?}", owner.id(), other.owner, side);

            let a = pair.collider_a;
            let b = pair.collider_b;
            let k = side.coeff_index();
            match side {
                Side::Top => {
                    self.x_friction = a.friction[k] + b.friction[k];
                    self.y_velocity *= -(a.bounciness[k] + b.bounciness[k]);
                    owner.y = (b.y + b.height) - a.y_offset;
                    top_hit = true;
                }
                Side::Bottom => {
                    self.x_friction = a.friction[k] + b.friction[k];
                    self.y_velocity *= -(a.bounciness[k] + b.bounciness[k]);
                    owner.y = b.y - a.height - a.y_offset;
                    bottom_hit = true;
                }
                Side::Left => {
                    self.y_friction = a.friction[k] + b.friction[k];
                    self.x_velocity *= -(a.bounciness[k] + b.bounciness[k]);
                    owner.x = (b.x + b.width) - a.x_offset;
                }
                Side::Right => {
                    self.y_friction = a.friction[k] + b.friction[k];
                    self.x_velocity *= -(a.bounciness[k] + b.bounciness[k]);
                    owner.x = b.x - a.width - a.x_offset;
                }
                // impact_side always reports a real face.
                Side::None => {}
            }
        }

        // 5. Post-loop overrides, independent of pair order: bottom contact
        //    has priority for ground checks, top contact reports airborne.
        if bottom_hit {
            self.colliding_side = Side::Bottom;
        }
        if top_hit {
            self.in_air = true;
        }
    }
}
