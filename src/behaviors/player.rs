//! Player controller.
//!
//! Reads the scene input, steers the sibling physics body, requests a scene
//! stop when the player falls out of the world, and drives the animator with
//! a state picked from the body's contact side and horizontal velocity.

use log::debug;

use crate::components::behavior::Behavior;
use crate::components::boxcollider::Side;
use crate::gameobject::GameObject;
use crate::resources::input::Action;
use crate::scene::TickCtx;

/// Horizontal speed while a direction is held, px/ms.
pub const RUN_SPEED: f32 = 0.06;
/// Upward velocity applied on a ground-gated jump, px/ms.
pub const JUMP_SPEED: f32 = -0.3;
/// Falling past this y stops the scene (out of bounds).
const FALL_LIMIT: f32 = 700.0;

/// Animation states, in the order the player's animator table expects them.
pub mod anim {
    pub const IDLE: usize = 0;
    pub const AIRBORNE: usize = 1;
    pub const AIR_RIGHT: usize = 2;
    pub const AIR_LEFT: usize = 3;
    pub const CEILING: usize = 4;
    pub const WALL_LEFT: usize = 5;
    pub const WALL_RIGHT: usize = 6;
    pub const RUN_RIGHT: usize = 7;
    pub const RUN_LEFT: usize = 8;
}

#[derive(Debug, Default)]
pub struct PlayerBehavior;

impl Behavior for PlayerBehavior {
    fn update(&mut self, owner: &mut GameObject, ctx: &mut TickCtx<'_>) {
        if owner.y > FALL_LIMIT {
            debug!("player fell out of bounds at y={}", owner.y);
            ctx.commands.stop();
            return;
        }

        if let Some(body) = owner.body_mut() {
            if ctx.input.is_pressed(Action::Right) {
                body.x_velocity = RUN_SPEED;
            } else if ctx.input.is_pressed(Action::Left) {
                body.x_velocity = -RUN_SPEED;
            }

            if ctx.input.is_pressed(Action::Jump) && body.on_ground() {
                body.y_velocity = JUMP_SPEED;
            }
        }

        let Some(body) = owner.body() else {
            return;
        };
        let x_velocity = body.x_velocity;
        let (state, speed) = match body.colliding_side() {
            Side::None => {
                if x_velocity.abs() > 0.002 {
                    if x_velocity >= 0.0 {
                        (anim::AIR_RIGHT, 1.0)
                    } else {
                        (anim::AIR_LEFT, 1.0)
                    }
                } else {
                    (anim::AIRBORNE, 1.0)
                }
            }
            Side::Top => (anim::CEILING, 1.0),
            Side::Left => (anim::WALL_LEFT, 1.0),
            Side::Right => (anim::WALL_RIGHT, 1.0),
            Side::Bottom => {
                if x_velocity.abs() > 0.001 {
                    if x_velocity > 0.0 {
                        // Run animation speed tracks how fast the player moves.
                        (anim::RUN_RIGHT, x_velocity * 100.0)
                    } else {
                        (anim::RUN_LEFT, x_velocity * -100.0)
                    }
                } else {
                    (anim::IDLE, 1.0)
                }
            }
        };
        owner.apply_animation(state, speed);
    }

    fn on_stop(&mut self) {
        debug!("player controller released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AnyComponent;
    use crate::components::boxcollider::BoxCollider;
    use crate::components::physicsbody::PhysicsBody;
    use crate::gameobject::GameObject;
    use crate::render::NoopRenderer;
    use crate::scene::Scene;

    fn player_object(x: f32, y: f32) -> GameObject {
        let mut obj = GameObject::new(x, y).with_name("player").with_priority(3);
        obj.add_component(AnyComponent::Collider(BoxCollider::new(10.0, 10.0)));
        obj.add_component(AnyComponent::PhysicsBody(
            PhysicsBody::new().with_gravity(0.0),
        ));
        obj.add_component(AnyComponent::Custom(Box::new(PlayerBehavior)));
        obj
    }

    fn ground_object(y: f32) -> GameObject {
        let mut obj = GameObject::new(0.0, y).with_name("ground");
        obj.add_component(AnyComponent::Collider(BoxCollider::new(400.0, 10.0)));
        obj
    }

    #[test]
    fn test_held_direction_sets_velocity() {
        let mut scene = Scene::new(Box::new(NoopRenderer));
        scene.add_object(player_object(0.0, 0.0));
        scene.input_mut().press(Action::Right);
        scene.advance(1.0);
        let body = scene.object_by_name("player").unwrap().body().unwrap();
        assert_eq!(body.x_velocity, RUN_SPEED);

        scene.input_mut().release(Action::Right);
        scene.input_mut().press(Action::Left);
        scene.advance(1.0);
        let body = scene.object_by_name("player").unwrap().body().unwrap();
        assert_eq!(body.x_velocity, -RUN_SPEED);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut scene = Scene::new(Box::new(NoopRenderer));
        scene.add_object(player_object(0.0, 0.0));
        scene.input_mut().press(Action::Jump);
        scene.advance(1.0);
        // Airborne: jump ignored.
        let body = scene.object_by_name("player").unwrap().body().unwrap();
        assert_eq!(body.y_velocity, 0.0);

        let mut scene = Scene::new(Box::new(NoopRenderer));
        scene.add_object(player_object(0.0, 0.0));
        scene.add_object(ground_object(10.0));
        // First tick establishes ground contact, second tick jumps.
        scene.advance(1.0);
        scene.input_mut().press(Action::Jump);
        scene.advance(1.0);
        let body = scene.object_by_name("player").unwrap().body().unwrap();
        assert_eq!(body.y_velocity, JUMP_SPEED);
    }

    #[test]
    fn test_falling_out_stops_scene() {
        let mut scene = Scene::new(Box::new(NoopRenderer));
        scene.add_object(player_object(0.0, 800.0));
        scene.advance(1.0);
        assert!(!scene.is_running());
    }
}
