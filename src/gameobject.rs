//! Game object: the entity of the scene graph.
//!
//! A [`GameObject`] owns a position, an enabled flag, an update priority,
//! at most one of each engine component (collider, physics body, sprite,
//! animator), and an open list of gameplay [`Behavior`]s. Attach dispatch
//! and the per-frame update order both live here.
//!
//! Slot policy is *last-wins*: attaching a second collider (or sprite)
//! silently replaces the previous one with no detach hook. Order-dependent
//! guards: an animator is only accepted once a sprite exists, a physics body
//! only once a collider exists; rejected attaches are dropped silently
//! (logged at debug), matching the permissive composition policy the rest of
//! the runtime assumes.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use smallvec::SmallVec;

use crate::components::AnyComponent;
use crate::components::animator::Animator;
use crate::components::behavior::Behavior;
use crate::components::boxcollider::{BoxCollider, ColliderView};
use crate::components::physicsbody::PhysicsBody;
use crate::components::sprite::Sprite;
use crate::scene::TickCtx;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a game object, unique within the process. Used for
/// self-collision exclusion and deferred commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

#[derive(Debug)]
pub struct GameObject {
    id: ObjectId,
    /// Top-left-origin world position in pixels.
    pub x: f32,
    pub y: f32,
    /// Disabled objects neither update nor collide; disabling is how objects
    /// leave the simulation mid-scene.
    pub enabled: bool,
    /// Higher priorities update first within a tick.
    pub update_priority: i32,
    /// Optional lookup name (level descriptor `name`).
    pub name: Option<String>,
    /// Prefab kind this object was built from.
    pub kind: String,
    collider: Option<BoxCollider>,
    body: Option<PhysicsBody>,
    sprite: Option<Sprite>,
    animator: Option<Animator>,
    behaviors: SmallVec<[Box<dyn Behavior>; 4]>,
}

impl GameObject {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            id: ObjectId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            x,
            y,
            enabled: true,
            update_priority: 1,
            name: None,
            kind: "GameObject".to_string(),
            collider: None,
            body: None,
            sprite: None,
            animator: None,
            behaviors: SmallVec::new(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.update_priority = priority;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Attach a component, dispatching by kind.
    ///
    /// Single slots replace silently (last-wins). An animator without a
    /// sprite and a physics body without a collider are dropped: updating
    /// them would be meaningless, so the guard sits here at composition time
    /// rather than in the per-frame path.
    pub fn add_component(&mut self, component: AnyComponent) {
        match component {
            AnyComponent::Sprite(sprite) => {
                self.sprite = Some(sprite);
            }
            AnyComponent::Animator(animator) => {
                if self.sprite.is_some() {
                    self.animator = Some(animator);
                } else {
                    debug!("{:?}: animator attached before sprite, ignored", self.id);
                }
            }
            AnyComponent::Collider(collider) => {
                self.collider = Some(collider);
            }
            AnyComponent::PhysicsBody(body) => {
                if self.collider.is_some() {
                    self.body = Some(body);
                } else {
                    debug!(
                        "{:?}: physics body attached before collider, ignored",
                        self.id
                    );
                }
            }
            AnyComponent::Custom(behavior) => {
                self.behaviors.push(behavior);
            }
        }
    }

    pub fn collider(&self) -> Option<&BoxCollider> {
        self.collider.as_ref()
    }

    pub fn collider_mut(&mut self) -> Option<&mut BoxCollider> {
        self.collider.as_mut()
    }

    pub fn body(&self) -> Option<&PhysicsBody> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut PhysicsBody> {
        self.body.as_mut()
    }

    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    pub fn sprite_mut(&mut self) -> Option<&mut Sprite> {
        self.sprite.as_mut()
    }

    pub fn animator(&self) -> Option<&Animator> {
        self.animator.as_ref()
    }

    /// World-space view of this object's collider at its current position.
    pub fn collider_view(&self) -> Option<ColliderView> {
        self.collider
            .as_ref()
            .map(|c| ColliderView::capture(self.id, self.x, self.y, c))
    }

    /// Drive the animator against the sibling sprite, if both exist.
    pub fn apply_animation(&mut self, state: usize, speed_scale: f32) {
        if let (Some(animator), Some(sprite)) = (self.animator.as_mut(), self.sprite.as_mut()) {
            animator.apply(state, speed_scale, sprite);
        }
    }

    pub(crate) fn take_body(&mut self) -> Option<PhysicsBody> {
        self.body.take()
    }

    pub(crate) fn put_body(&mut self, body: PhysicsBody) {
        self.body = Some(body);
    }

    /// Per-frame update, in the fixed order gameplay and draw layering
    /// depend on: physics body first, collider debug draw only when no
    /// sprite will draw the object, then the sprite, then the behaviors in
    /// attachment order.
    pub fn update(&mut self, ctx: &mut TickCtx<'_>) {
        if let Some(collider) = self.collider
            && let Some(mut body) = self.body.take()
        {
            let others: Vec<ColliderView> =
                ctx.peers.iter().filter_map(|p| p.collider).collect();
            body.step(self, &collider, &others, ctx.dt, ctx.commands);
            self.body = Some(body);
        }

        if self.sprite.is_none()
            && let Some(collider) = &self.collider
        {
            collider.debug_draw(self.x, self.y, ctx.renderer);
        }

        let (x, y) = (self.x, self.y);
        if let Some(sprite) = self.sprite.as_mut() {
            sprite.update(x, y, ctx.dt, ctx.renderer);
        }

        // Behaviors receive the owner mutably; take the list out for the
        // duration and keep anything they attached meanwhile.
        let mut behaviors = std::mem::take(&mut self.behaviors);
        for behavior in behaviors.iter_mut() {
            behavior.update(self, ctx);
        }
        behaviors.append(&mut self.behaviors);
        self.behaviors = behaviors;
    }

    /// Scene teardown notification: behaviors release external handles.
    pub(crate) fn notify_stop(&mut self) {
        for behavior in self.behaviors.iter_mut() {
            behavior.on_stop();
        }
    }
}
