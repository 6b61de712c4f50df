//! Physics integration tests: gravity, collision resolution, and triggers
//! driven through whole-scene ticks rather than isolated body steps.

use salto::commands::Commands;
use salto::components::AnyComponent;
use salto::components::boxcollider::{BoxCollider, CollisionPair, Side};
use salto::components::physicsbody::PhysicsBody;
use salto::gameobject::GameObject;
use salto::render::NoopRenderer;
use salto::scene::Scene;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_scene() -> Scene {
    Scene::new(Box::new(NoopRenderer))
}

/// Dynamic body with a centered 10x10 collider.
fn faller(x: f32, y: f32, gravity: f32) -> GameObject {
    let mut obj = GameObject::new(x, y).with_name("faller").with_priority(3);
    obj.add_component(AnyComponent::Collider(BoxCollider::new(10.0, 10.0)));
    obj.add_component(AnyComponent::PhysicsBody(
        PhysicsBody::new().with_gravity(gravity),
    ));
    obj
}

/// Static scenery with a centered collider of the given size.
fn scenery(name: &str, x: f32, y: f32, w: f32, h: f32) -> GameObject {
    let mut obj = GameObject::new(x, y).with_name(name);
    obj.add_component(AnyComponent::Collider(BoxCollider::new(w, h)));
    obj
}

fn body_of<'a>(scene: &'a Scene, name: &str) -> &'a PhysicsBody {
    scene.object_by_name(name).unwrap().body().unwrap()
}

#[test]
fn falling_body_comes_to_rest_on_platform() {
    let mut scene = make_scene();
    scene.add_object(faller(0.0, 0.0, salto::components::physicsbody::DEFAULT_GRAVITY));
    scene.add_object(scenery("platform", 0.0, 100.0, 100.0, 10.0));

    for _ in 0..200 {
        scene.advance(10.0);
    }

    let obj = scene.object_by_name("faller").unwrap();
    let body = obj.body().unwrap();
    // Platform top is at 95; the 10-tall centered box rests with its owner
    // position snapped to 95 - 10 + 5 = 90.
    assert!(approx_eq(obj.y, 90.0));
    assert!(body.on_ground());
    assert_eq!(body.colliding_side(), Side::Bottom);
    // Default bounciness 0 stops the fall dead.
    assert_eq!(body.y_velocity, 0.0);
}

#[test]
fn bouncy_floor_reverses_fall_velocity() {
    let mut scene = make_scene();
    let mut obj = faller(0.0, 0.0, salto::components::physicsbody::DEFAULT_GRAVITY);
    obj.collider_mut().unwrap().bounciness = [0.0, 0.5, 0.0, 0.0];
    scene.add_object(obj);
    scene.add_object(scenery("platform", 0.0, 100.0, 100.0, 10.0));

    let mut rebound = None;
    for _ in 0..200 {
        scene.advance(10.0);
        let body = body_of(&scene, "faller");
        if body.colliding_side() == Side::Bottom {
            rebound = Some(body.y_velocity);
            break;
        }
    }

    let rebound = rebound.expect("body never reached the platform");
    // Impact velocity scaled by -(0.5 + 0.0): upward, half the speed.
    assert!(rebound < 0.0);
}

#[test]
fn wall_blocks_airborne_motion_and_snaps() {
    let mut scene = make_scene();
    let mut obj = faller(0.0, 0.0, 0.0);
    obj.body_mut().unwrap().x_velocity = 0.06;
    scene.add_object(obj);
    scene.add_object(scenery("wall", 50.0, 0.0, 10.0, 100.0));

    for _ in 0..100 {
        scene.advance(10.0);
        if body_of(&scene, "faller").colliding_side() == Side::Right {
            break;
        }
    }

    let obj = scene.object_by_name("faller").unwrap();
    let body = obj.body().unwrap();
    assert_eq!(body.colliding_side(), Side::Right);
    // Wall left edge at 45; owner snaps to 45 - 10 + 5 = 40.
    assert!(approx_eq(obj.x, 40.0));
    assert_eq!(body.x_velocity, 0.0);
}

#[test]
fn ground_friction_consumes_slide_on_next_frame() {
    let mut scene = make_scene();
    let mut obj = faller(0.0, 0.0, 0.0);
    obj.body_mut().unwrap().x_velocity = 0.05;
    scene.add_object(obj);
    scene.add_object(scenery("platform", 0.0, 10.0, 400.0, 10.0));

    // Frame 1: slide 0.5 px, resolve the resting contact, accumulate the
    // summed friction (1.0 + 1.0) for the next frame.
    scene.advance(10.0);
    let obj = scene.object_by_name("faller").unwrap();
    assert!(approx_eq(obj.x, 0.5));
    assert_eq!(obj.body().unwrap().x_friction, 2.0);

    // Frame 2: the accumulated friction clamps the velocity at zero before
    // integration, so the slide is over.
    scene.advance(10.0);
    let obj = scene.object_by_name("faller").unwrap();
    assert!(approx_eq(obj.x, 0.5));
    assert_eq!(obj.body().unwrap().x_velocity, 0.0);
}

#[test]
fn ceiling_bump_reports_airborne() {
    let mut scene = make_scene();
    let mut obj = faller(0.0, 0.0, 0.0);
    obj.body_mut().unwrap().y_velocity = -0.3;
    scene.add_object(obj);
    scene.add_object(scenery("ceiling", 0.0, -12.0, 100.0, 10.0));

    scene.advance(10.0);
    let obj = scene.object_by_name("faller").unwrap();
    let body = obj.body().unwrap();
    assert_eq!(body.colliding_side(), Side::Top);
    // A top contact is a hit, not a resting state.
    assert!(!body.on_ground());
    // Ceiling bottom edge at -7; owner snaps to -7 + 5 = -2.
    assert!(approx_eq(obj.y, -2.0));
}

#[test]
fn bottom_contact_wins_over_wall_in_same_frame() {
    let mut scene = make_scene();
    scene.add_object(faller(0.0, 0.0, 0.0));
    // Ground below and a wall overlapping from the right, both hit in one
    // frame; ground checks must still see Bottom.
    scene.add_object(scenery("ground", 0.0, 10.0, 100.0, 10.0));
    scene.add_object(scenery("wall", 9.0, 0.0, 10.0, 100.0));

    scene.advance(10.0);
    let body = body_of(&scene, "faller");
    assert_eq!(body.colliding_side(), Side::Bottom);
    assert!(body.on_ground());
}

fn collect(pair: &CollisionPair, commands: &mut Commands) {
    commands.disable(pair.collider_b.owner);
    commands.add_coin();
}

#[test]
fn trigger_collects_once_and_never_blocks() {
    let mut scene = make_scene();
    let mut obj = faller(0.0, 0.0, 0.0);
    obj.body_mut().unwrap().y_velocity = 0.5;
    scene.add_object(obj);

    let mut pickup = GameObject::new(0.0, 12.0).with_name("pickup");
    let mut collider = BoxCollider::new(10.0, 10.0).trigger();
    collider.on_collision(collect);
    pickup.add_component(AnyComponent::Collider(collider));
    scene.add_object(pickup);

    scene.advance(10.0);
    // Overlap fired the callback but did not correct the position.
    let obj = scene.object_by_name("faller").unwrap();
    assert!(approx_eq(obj.y, 5.0));
    assert!(!obj.body().unwrap().on_ground());
    assert_eq!(scene.coin_count(), 1);
    assert!(!scene.object_by_name("pickup").unwrap().enabled);

    // The disabled pickup is out of the simulation: no double collection.
    scene.advance(10.0);
    assert_eq!(scene.coin_count(), 1);
}

#[test]
fn earlier_mover_is_seen_at_new_position() {
    // A high-priority body moves out of the way during the tick; the
    // lower-priority body enumerating colliders afterwards must see the new
    // position and find no overlap.
    let mut scene = make_scene();
    let mut mover = faller(0.0, 0.0, 0.0);
    mover.name = Some("mover".to_string());
    mover.update_priority = 5;
    mover.body_mut().unwrap().x_velocity = 5.0;
    scene.add_object(mover);

    let mut checker = faller(0.0, 0.0, 0.0);
    checker.name = Some("checker".to_string());
    checker.update_priority = 1;
    scene.add_object(checker);

    scene.advance(10.0);
    // The mover is 50 px away by the time the checker runs.
    assert!(approx_eq(scene.object_by_name("mover").unwrap().x, 50.0));
    assert_eq!(body_of(&scene, "checker").colliding_side(), Side::None);
}
