//! Level descriptor and prefab registry.
//!
//! A level is a JSON document with a time budget and an ordered list of
//! `{kind, params}` object specifications. Kinds resolve through the
//! [`PrefabRegistry`]; custom registrations override built-ins, and an
//! unknown kind is a hard error surfaced at scene construction.
//!
//! ```json
//! {
//!   "time": 60000,
//!   "objects": [
//!     { "kind": "Player", "params": { "x": 50, "y": 100, "components": [...] } },
//!     { "kind": "Coin", "params": { "x": 200, "y": 150 } }
//!   ]
//! }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::gameobject::GameObject;
use crate::prefabs;
use crate::scene::DEFAULT_LEVEL_TIME;

/// Parsed level descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelData {
    /// Level time budget in milliseconds.
    #[serde(default = "default_time")]
    pub time: f32,
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

fn default_time() -> f32 {
    DEFAULT_LEVEL_TIME
}

/// One entity to instantiate: a prefab kind plus free-form parameters the
/// prefab deserializes itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectSpec {
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level: {}", e))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }
}

/// Constructor resolved for a prefab kind.
pub type PrefabFn = fn(&serde_json::Value) -> Result<GameObject, String>;

/// Kind → constructor table. [`PrefabRegistry::default`] carries the
/// built-in prefabs; [`PrefabRegistry::register`] adds or overrides entries.
pub struct PrefabRegistry {
    map: FxHashMap<String, PrefabFn>,
}

impl Default for PrefabRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("GameObject", prefabs::game_object);
        registry.register("Player", prefabs::player);
        registry.register("Camera", prefabs::camera);
        registry.register("Coin", prefabs::coin);
        registry.register("Goal", prefabs::goal);
        registry
    }
}

impl PrefabRegistry {
    /// Registry with no prefabs at all.
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Add or override a prefab kind.
    pub fn register(&mut self, kind: impl Into<String>, constructor: PrefabFn) {
        self.map.insert(kind.into(), constructor);
    }

    /// Resolve and run the constructor for `kind`. Unknown kinds are a hard
    /// error.
    pub fn build(&self, kind: &str, params: &serde_json::Value) -> Result<GameObject, String> {
        let constructor = self
            .map
            .get(kind)
            .ok_or_else(|| format!("Unknown prefab kind '{}'", kind))?;
        constructor(params)
    }
}
