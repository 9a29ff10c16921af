//! Name → entity registry for scene objects.
//!
//! The scripting surface addresses objects by name ("hold camera" on
//! `player`), so the scene keeps a [`StageIndex`] mapping registered names
//! to their entities. Spawning registers, despawning unregisters; lookups
//! for unknown names simply return `None` and callers no-op.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Registry of named scene objects.
#[derive(Resource, Debug, Clone, Default)]
pub struct StageIndex {
    objects: FxHashMap<String, Entity>,
}

impl StageIndex {
    /// Register `name`, replacing any previous holder of the name.
    pub fn register(&mut self, name: impl Into<String>, entity: Entity) {
        self.objects.insert(name.into(), entity);
    }

    pub fn unregister(&mut self, name: &str) -> Option<Entity> {
        self.objects.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Entity> {
        self.objects.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate registered names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }
}
