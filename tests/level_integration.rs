//! Level integration tests: JSON descriptors through the prefab registry and
//! a full scripted playthrough.

use salto::gameobject::GameObject;
use salto::level::{LevelData, PrefabRegistry};
use salto::render::NoopRenderer;
use salto::scene::Scene;

fn build(level: &LevelData) -> Result<Scene, String> {
    Scene::from_level(level, &PrefabRegistry::default(), Box::new(NoopRenderer))
}

#[test]
fn demo_level_file_builds() {
    let level = LevelData::from_file("assets/levels/demo.json").unwrap();
    assert_eq!(level.time, 60000.0);
    assert_eq!(level.objects.len(), 7);

    let scene = build(&level).unwrap();
    assert_eq!(scene.objects().len(), 7);
    // Highest priority first: the player leads the update order.
    assert_eq!(scene.objects()[0].kind, "Player");
    assert!(scene.object_by_name("ground").unwrap().collider().is_some());
    assert!(scene.object_by_name("goal").unwrap().collider().unwrap().is_trigger);
}

#[test]
fn unknown_prefab_kind_fails_scene_build() {
    let level = LevelData::from_json(
        r#"{ "objects": [ { "kind": "Dragon", "params": { "x": 1 } } ] }"#,
    )
    .unwrap();
    let err = build(&level).unwrap_err();
    assert!(err.contains("Dragon"));
}

#[test]
fn registered_prefab_overrides_builtin_in_scene() {
    fn flag_pole(_params: &serde_json::Value) -> Result<GameObject, String> {
        Ok(GameObject::new(0.0, 0.0).with_kind("FlagPole").with_name("flag"))
    }

    let level =
        LevelData::from_json(r#"{ "objects": [ { "kind": "Goal" } ] }"#).unwrap();
    let mut registry = PrefabRegistry::default();
    registry.register("Goal", flag_pole);
    let scene = Scene::from_level(&level, &registry, Box::new(NoopRenderer)).unwrap();
    assert_eq!(scene.object_by_name("flag").unwrap().kind, "FlagPole");
}

#[test]
fn falling_through_coin_onto_goal_wins_level() {
    // The player drops straight down: through a coin, onto a goal sitting on
    // the ground. No input needed; gravity does the playthrough.
    let level = LevelData::from_json(
        r#"{
            "time": 30000,
            "objects": [
                { "kind": "Player", "params": {
                    "x": 100, "y": 100, "name": "player",
                    "components": [
                        { "kind": "BoxCollider", "params": { "width": 10, "height": 10 } },
                        { "kind": "PhysicsBody" }
                    ]
                } },
                { "kind": "GameObject", "params": {
                    "x": 100, "y": 250, "name": "ground",
                    "components": [
                        { "kind": "BoxCollider", "params": { "width": 200, "height": 20 } }
                    ]
                } },
                { "kind": "Coin", "params": { "x": 100, "y": 160, "name": "coin" } },
                { "kind": "Goal", "params": { "x": 100, "y": 235, "name": "goal" } }
            ]
        }"#,
    )
    .unwrap();
    let mut scene = build(&level).unwrap();

    let mut ticks = 0;
    while scene.is_running() && ticks < 500 {
        scene.advance(10.0);
        ticks += 1;
    }

    assert!(!scene.is_running());
    assert!(scene.won());
    assert_eq!(scene.coin_count(), 1);
    assert!(!scene.object_by_name("coin").unwrap().enabled);
    assert!(!scene.object_by_name("goal").unwrap().enabled);
    // The goal ended the level well inside the time budget.
    assert!(scene.elapsed_time() < 30000.0);
}
