//! Deferred scene mutations.
//!
//! Collision callbacks and behaviors run while the scene is iterating its
//! entity list, so they cannot touch other entities directly. Instead they
//! queue [`Command`]s here; the scene drains the queue once the entity loop
//! for the tick has finished. This keeps the single-threaded mutation
//! discipline auditable: during the loop only a physics body writes its own
//! entity, and every cross-entity effect is applied at a known point.

use smallvec::SmallVec;

use crate::gameobject::ObjectId;

/// A single deferred mutation of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-enable the entity with the given id.
    Enable(ObjectId),
    /// Disable the entity with the given id (how objects leave the
    /// simulation; nothing is deleted mid-scene).
    Disable(ObjectId),
    /// Increment the scene's collected-item counter.
    AddCoin,
    /// Raise the scene's win flag.
    SetWon,
    /// Stop the scene at the end of the current tick.
    Stop,
}

/// Queue of deferred mutations for the current tick.
#[derive(Debug, Default)]
pub struct Commands {
    queue: SmallVec<[Command; 8]>,
}

impl Commands {
    pub fn enable(&mut self, id: ObjectId) {
        self.queue.push(Command::Enable(id));
    }

    pub fn disable(&mut self, id: ObjectId) {
        self.queue.push(Command::Disable(id));
    }

    pub fn add_coin(&mut self) {
        self.queue.push(Command::AddCoin);
    }

    pub fn set_won(&mut self) {
        self.queue.push(Command::SetWon);
    }

    pub fn stop(&mut self) {
        self.queue.push(Command::Stop);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every queued command, leaving the queue empty.
    pub(crate) fn drain(&mut self) -> SmallVec<[Command; 8]> {
        std::mem::take(&mut self.queue)
    }
}
