//! Components attachable to game objects.
//!
//! Submodules overview:
//! - [`animator`] – per-state animation table applied to the sibling sprite
//! - [`behavior`] – capability interface for open-ended gameplay components
//! - [`boxcollider`] – axis-aligned collider with per-side friction/bounce
//! - [`physicsbody`] – velocity/gravity integration and collision resolution
//! - [`sprite`] – renderable slot with frame playback

pub mod animator;
pub mod behavior;
pub mod boxcollider;
pub mod physicsbody;
pub mod sprite;

use crate::components::animator::Animator;
use crate::components::behavior::Behavior;
use crate::components::boxcollider::BoxCollider;
use crate::components::physicsbody::PhysicsBody;
use crate::components::sprite::Sprite;

/// The closed set of component variants accepted by
/// [`GameObject::add_component`](crate::gameobject::GameObject::add_component).
/// Attach dispatch goes by this tag.
#[derive(Debug)]
pub enum AnyComponent {
    Sprite(Sprite),
    Animator(Animator),
    Collider(BoxCollider),
    PhysicsBody(PhysicsBody),
    Custom(Box<dyn Behavior>),
}

impl AnyComponent {
    pub fn kind(&self) -> behavior::ComponentKind {
        match self {
            AnyComponent::Sprite(_) => behavior::ComponentKind::Sprite,
            AnyComponent::Animator(_) => behavior::ComponentKind::Animator,
            AnyComponent::Collider(_) => behavior::ComponentKind::Collider,
            AnyComponent::PhysicsBody(_) => behavior::ComponentKind::PhysicsBody,
            AnyComponent::Custom(b) => b.kind(),
        }
    }
}
