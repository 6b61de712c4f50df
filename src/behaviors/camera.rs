//! Camera follow behavior.
//!
//! Copies the position of a named target each frame. Runs at priority 2 by
//! default (after the player moved, before scenery), so the copied position
//! is the current frame's.

use crate::components::behavior::Behavior;
use crate::gameobject::GameObject;
use crate::scene::TickCtx;

#[derive(Debug, Default)]
pub struct CameraBehavior {
    /// Name of the object to follow; inert when unset or unresolved.
    pub target: Option<String>,
}

impl Behavior for CameraBehavior {
    fn update(&mut self, owner: &mut GameObject, ctx: &mut TickCtx<'_>) {
        let Some(target) = self.target.as_deref() else {
            return;
        };
        if let Some(peer) = ctx.peers.iter().find(|p| p.name == Some(target)) {
            owner.x = peer.x;
            owner.y = peer.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AnyComponent;
    use crate::render::NoopRenderer;
    use crate::scene::Scene;

    #[test]
    fn test_camera_follows_named_target() {
        let mut scene = Scene::new(Box::new(NoopRenderer));
        scene.add_object(GameObject::new(120.0, 80.0).with_name("hero").with_priority(3));

        let mut cam = GameObject::new(0.0, 0.0).with_name("cam").with_priority(2);
        cam.add_component(AnyComponent::Custom(Box::new(CameraBehavior {
            target: Some("hero".into()),
        })));
        scene.add_object(cam);

        scene.advance(1.0);
        let cam = scene.object_by_name("cam").unwrap();
        assert_eq!((cam.x, cam.y), (120.0, 80.0));
    }

    #[test]
    fn test_camera_without_target_stays_put() {
        let mut scene = Scene::new(Box::new(NoopRenderer));
        let mut cam = GameObject::new(7.0, 9.0).with_name("cam");
        cam.add_component(AnyComponent::Custom(Box::new(CameraBehavior::default())));
        scene.add_object(cam);
        scene.advance(1.0);
        let cam = scene.object_by_name("cam").unwrap();
        assert_eq!((cam.x, cam.y), (7.0, 9.0));
    }
}
