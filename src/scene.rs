//! Scene: entity list owner and tick driver.
//!
//! One timer-driven tick advances the whole scene: compute the wall-clock
//! delta, stop if the level's time budget has elapsed, otherwise update every
//! enabled entity once in descending update-priority order, all with the same
//! delta. Everything runs on one logical thread; ordering, not locking, is
//! the concurrency discipline.
//!
//! Entities see the rest of the scene through [`PeerView`]s built fresh for
//! each entity, so a body that was moved by a higher-priority entity earlier
//! in the same tick is seen at its new position. Cross-entity mutations
//! queued during the loop ([`Commands`]) are applied once the loop finishes.

use std::time::Instant;

use log::{debug, info};

use crate::commands::{Command, Commands};
use crate::components::boxcollider::ColliderView;
use crate::gameobject::{GameObject, ObjectId};
use crate::level::{LevelData, PrefabRegistry};
use crate::render::Renderer;
use crate::resources::input::InputState;
use crate::resources::worldclock::WorldClock;

/// Level time budget used when a level descriptor does not provide one, in
/// milliseconds.
pub const DEFAULT_LEVEL_TIME: f32 = 10_000.0;

/// Read-only view of another entity during an entity's update.
#[derive(Debug, Clone, Copy)]
pub struct PeerView<'a> {
    pub id: ObjectId,
    pub name: Option<&'a str>,
    pub x: f32,
    pub y: f32,
    /// Present when the peer owns a collider; world-space at the peer's
    /// current position.
    pub collider: Option<ColliderView>,
}

/// Everything an entity may touch during its update.
pub struct TickCtx<'a> {
    /// Milliseconds for this tick; the same value for every entity.
    pub dt: f32,
    /// Milliseconds since the scene started.
    pub elapsed: f32,
    pub input: &'a InputState,
    pub renderer: &'a mut dyn Renderer,
    pub commands: &'a mut Commands,
    /// Every *other* enabled entity, captured at its current position.
    pub peers: &'a [PeerView<'a>],
}

pub struct Scene {
    entities: Vec<GameObject>,
    clock: WorldClock,
    /// Total time budget for the level in milliseconds.
    level_time: f32,
    running: bool,
    won: bool,
    coin_count: u32,
    input: InputState,
    renderer: Box<dyn Renderer>,
    commands: Commands,
    end_fun: Option<Box<dyn FnMut(&mut Scene)>>,
    last_tick: Option<Instant>,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("entities", &self.entities.len())
            .field("level_time", &self.level_time)
            .field("running", &self.running)
            .field("won", &self.won)
            .field("coin_count", &self.coin_count)
            .finish_non_exhaustive()
    }
}

impl Scene {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            entities: Vec::new(),
            clock: WorldClock::default(),
            level_time: DEFAULT_LEVEL_TIME,
            running: true,
            won: false,
            coin_count: 0,
            input: InputState::default(),
            renderer,
            commands: Commands::default(),
            end_fun: None,
            last_tick: None,
        }
    }

    /// Build a scene from a level descriptor, resolving every object spec
    /// through the prefab registry. An unknown kind fails the whole
    /// construction.
    pub fn from_level(
        level: &LevelData,
        registry: &PrefabRegistry,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, String> {
        let mut scene = Scene::new(renderer);
        scene.level_time = level.time;
        let objects = level
            .objects
            .iter()
            .map(|spec| registry.build(&spec.kind, &spec.params))
            .collect::<Result<Vec<_>, _>>()?;
        scene.add_objects(objects);
        info!(
            "scene built: {} objects, {} ms budget",
            scene.entities.len(),
            scene.level_time
        );
        Ok(scene)
    }

    pub fn with_time_budget(mut self, time: f32) -> Self {
        self.level_time = time;
        self
    }

    /// Insert an object, keeping the list sorted by descending update
    /// priority (stable, so equal priorities keep insertion order).
    pub fn add_object(&mut self, object: GameObject) {
        self.entities.push(object);
        self.entities
            .sort_by(|a, b| b.update_priority.cmp(&a.update_priority));
    }

    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = GameObject>) {
        self.entities.extend(objects);
        self.entities
            .sort_by(|a, b| b.update_priority.cmp(&a.update_priority));
    }

    pub fn object_by_name(&self, name: &str) -> Option<&GameObject> {
        self.entities.iter().find(|o| o.name.as_deref() == Some(name))
    }

    pub fn object_by_name_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.entities
            .iter_mut()
            .find(|o| o.name.as_deref() == Some(name))
    }

    pub fn object_by_id(&self, id: ObjectId) -> Option<&GameObject> {
        self.entities.iter().find(|o| o.id() == id)
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.entities
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Host-side key wiring: forward key transitions here.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.clock.time_scale = scale;
    }

    /// Register the end-of-scene callback, invoked exactly once when the
    /// scene stops.
    pub fn on_end(&mut self, callback: impl FnMut(&mut Scene) + 'static) {
        self.end_fun = Some(Box::new(callback));
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn set_won(&mut self) {
        self.won = true;
    }

    pub fn coin_count(&self) -> u32 {
        self.coin_count
    }

    pub fn add_coin(&mut self) {
        self.coin_count += 1;
    }

    /// Milliseconds since the scene started.
    pub fn elapsed_time(&self) -> f32 {
        self.clock.elapsed
    }

    pub fn delta_time(&self) -> f32 {
        self.clock.delta
    }

    /// Advance one tick with a wall-clock delta measured since the previous
    /// call.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = match self.last_tick {
            Some(last) => now.duration_since(last).as_secs_f64() as f32 * 1000.0,
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.advance(dt);
    }

    /// Advance one tick with an explicit delta in milliseconds. The testable
    /// core of the loop.
    pub fn advance(&mut self, raw_dt: f32) {
        if !self.running {
            return;
        }

        self.clock.advance(raw_dt);
        if self.clock.elapsed >= self.level_time {
            debug!("level time budget elapsed");
            self.stop();
            return;
        }

        let dt = self.clock.delta;
        let elapsed = self.clock.elapsed;
        self.renderer.clear();

        for i in 0..self.entities.len() {
            if !self.entities[i].enabled {
                continue;
            }

            let (head, rest) = self.entities.split_at_mut(i);
            let Some((object, tail)) = rest.split_first_mut() else {
                continue;
            };
            let peers: Vec<PeerView<'_>> = head
                .iter()
                .chain(tail.iter())
                .filter(|o| o.enabled)
                .map(|o| PeerView {
                    id: o.id(),
                    name: o.name.as_deref(),
                    x: o.x,
                    y: o.y,
                    collider: o.collider_view(),
                })
                .collect();

            let mut ctx = TickCtx {
                dt,
                elapsed,
                input: &self.input,
                renderer: self.renderer.as_mut(),
                commands: &mut self.commands,
                peers: &peers,
            };
            object.update(&mut ctx);
        }

        self.apply_commands();
    }

    fn apply_commands(&mut self) {
        let queued = self.commands.drain();
        let mut stop_requested = false;
        for command in queued {
            match command {
                Command::Enable(id) => self.set_object_enabled(id, true),
                Command::Disable(id) => self.set_object_enabled(id, false),
                Command::AddCoin => self.coin_count += 1,
                Command::SetWon => self.won = true,
                Command::Stop => stop_requested = true,
            }
        }
        if stop_requested {
            self.stop();
        }
    }

    fn set_object_enabled(&mut self, id: ObjectId, enabled: bool) {
        match self.entities.iter_mut().find(|o| o.id() == id) {
            Some(object) => object.set_enabled(enabled),
            None => debug!("command for unknown object {id:?}"),
        }
    }

    /// Stop the scene. Idempotent: the tick driver is disabled, every
    /// entity's behaviors get their release hook, and the end callback fires
    /// exactly once.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.input.clear();
        for object in &mut self.entities {
            object.notify_stop();
        }
        info!(
            "scene stopped after {:.0} ms: won={}, coins={}",
            self.clock.elapsed, self.won, self.coin_count
        );
        if let Some(mut end_fun) = self.end_fun.take() {
            end_fun(self);
        }
    }
}
