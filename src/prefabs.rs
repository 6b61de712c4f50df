//! Built-in prefab constructors.
//!
//! Each prefab deserializes its own parameter struct (every field optional
//! with the runtime's historical defaults) and assembles a [`GameObject`].
//! Generic objects may carry a nested `components` list building sprites,
//! colliders, physics bodies, and animators in order — order matters because
//! of the attach guards.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::behaviors::camera::CameraBehavior;
use crate::behaviors::player::PlayerBehavior;
use crate::commands::Commands;
use crate::components::AnyComponent;
use crate::components::animator::Animator;
use crate::components::boxcollider::{BoxCollider, CollisionPair};
use crate::components::physicsbody::{DEFAULT_GRAVITY, PhysicsBody};
use crate::components::sprite::{AnimationDef, Sprite};
use crate::gameobject::GameObject;

fn parse<T: DeserializeOwned + Default>(params: &serde_json::Value) -> Result<T, String> {
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params.clone())
        .map_err(|e| format!("Invalid prefab params: {}", e))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ObjectParams {
    x: f32,
    y: f32,
    enabled: bool,
    update_priority: Option<i32>,
    name: Option<String>,
    components: Vec<ComponentSpec>,
}

impl Default for ObjectParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            enabled: true,
            update_priority: None,
            name: None,
            components: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ComponentSpec {
    kind: String,
    #[serde(default)]
    params: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ColliderParams {
    width: f32,
    height: f32,
    x_offset: f32,
    y_offset: f32,
    friction: [f32; 4],
    bounciness: [f32; 4],
    is_trigger: bool,
}

impl Default for ColliderParams {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            x_offset: 0.0,
            y_offset: 0.0,
            friction: [1.0; 4],
            bounciness: [0.0; 4],
            is_trigger: false,
        }
    }
}

impl ColliderParams {
    fn build(&self) -> BoxCollider {
        let mut collider = BoxCollider::new(self.width, self.height)
            .with_offset(self.x_offset, self.y_offset)
            .with_friction(self.friction)
            .with_bounciness(self.bounciness);
        if self.is_trigger {
            collider = collider.trigger();
        }
        collider
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct BodyParams {
    gravity: f32,
    mass: f32,
    x_velocity: f32,
    y_velocity: f32,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            mass: 1.0,
            x_velocity: 0.0,
            y_velocity: 0.0,
        }
    }
}

impl BodyParams {
    fn build(&self) -> PhysicsBody {
        PhysicsBody::new()
            .with_gravity(self.gravity)
            .with_mass(self.mass)
            .with_velocity(self.x_velocity, self.y_velocity)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct SpriteParams {
    frames: Vec<String>,
    width: f32,
    height: f32,
    speed: f32,
    x_offset: f32,
    y_offset: f32,
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            width: 10.0,
            height: 10.0,
            speed: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl SpriteParams {
    fn build(&self) -> Sprite {
        Sprite::new(
            self.frames.clone(),
            self.width,
            self.height,
            self.speed,
            self.x_offset,
            self.y_offset,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AnimatorParams {
    animations: Vec<AnimationDef>,
}

fn attach_components(obj: &mut GameObject, specs: &[ComponentSpec]) -> Result<(), String> {
    for spec in specs {
        match spec.kind.as_str() {
            "Sprite" => {
                let params: SpriteParams = parse(&spec.params)?;
                obj.add_component(AnyComponent::Sprite(params.build()));
            }
            "BoxCollider" => {
                let params: ColliderParams = parse(&spec.params)?;
                obj.add_component(AnyComponent::Collider(params.build()));
            }
            "PhysicsBody" => {
                let params: BodyParams = parse(&spec.params)?;
                obj.add_component(AnyComponent::PhysicsBody(params.build()));
            }
            "Animator" => {
                let params: AnimatorParams = parse(&spec.params)?;
                obj.add_component(AnyComponent::Animator(Animator::new(params.animations)));
            }
            other => return Err(format!("Unknown component kind '{}'", other)),
        }
    }
    Ok(())
}

fn base_object(params: &serde_json::Value, kind: &str) -> Result<(GameObject, ObjectParams), String> {
    let parsed: ObjectParams = parse(params)?;
    let mut obj = GameObject::new(parsed.x, parsed.y).with_kind(kind);
    obj.enabled = parsed.enabled;
    if let Some(priority) = parsed.update_priority {
        obj.update_priority = priority;
    }
    if let Some(name) = &parsed.name {
        obj.name = Some(name.clone());
    }
    attach_components(&mut obj, &parsed.components)?;
    Ok((obj, parsed))
}

/// Generic object: position, flags, and a nested component list.
pub fn game_object(params: &serde_json::Value) -> Result<GameObject, String> {
    let (obj, _) = base_object(params, "GameObject")?;
    Ok(obj)
}

/// Player: input-controlled body with the animation state machine. Defaults
/// to update priority 3 so it moves before the camera and scenery.
pub fn player(params: &serde_json::Value) -> Result<GameObject, String> {
    let (mut obj, parsed) = base_object(params, "Player")?;
    if parsed.update_priority.is_none() {
        obj.update_priority = 3;
    }
    obj.add_component(AnyComponent::Custom(Box::new(PlayerBehavior::default())));
    Ok(obj)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CameraParams {
    target: Option<String>,
}

/// Camera: follows a named target. Priority 2, between the player and
/// scenery.
pub fn camera(params: &serde_json::Value) -> Result<GameObject, String> {
    let (mut obj, parsed) = base_object(params, "Camera")?;
    if parsed.update_priority.is_none() {
        obj.update_priority = 2;
    }
    let camera_params: CameraParams = parse(params)?;
    obj.add_component(AnyComponent::Custom(Box::new(CameraBehavior {
        target: camera_params.target,
    })));
    Ok(obj)
}

fn coin_collected(pair: &CollisionPair, commands: &mut Commands) {
    // collider_b is the coin: the detecting body is always collider_a.
    commands.disable(pair.collider_b.owner);
    commands.add_coin();
}

fn goal_reached(pair: &CollisionPair, commands: &mut Commands) {
    commands.disable(pair.collider_b.owner);
    commands.set_won();
    commands.stop();
}

/// Ensure the object has a trigger collider wired to `callback`, creating a
/// default-sized one when the params declared none.
fn ensure_trigger(obj: &mut GameObject, callback: fn(&CollisionPair, &mut Commands)) {
    if obj.collider().is_none() {
        obj.add_component(AnyComponent::Collider(ColliderParams::default().build()));
    }
    if let Some(collider) = obj.collider_mut() {
        collider.is_trigger = true;
        collider.on_collision(callback);
    }
}

/// Coin: trigger that disables itself and bumps the collected counter.
pub fn coin(params: &serde_json::Value) -> Result<GameObject, String> {
    let (mut obj, _) = base_object(params, "Coin")?;
    ensure_trigger(&mut obj, coin_collected);
    Ok(obj)
}

/// Goal: trigger that raises the win flag and stops the scene.
pub fn goal(params: &serde_json::Value) -> Result<GameObject, String> {
    let (mut obj, _) = base_object(params, "Goal")?;
    ensure_trigger(&mut obj, goal_reached);
    Ok(obj)
}
