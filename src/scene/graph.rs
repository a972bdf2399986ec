use std::fmt;

use crate::{
    foundation::error::{AlephError, AlephResult, LifecycleFault},
    scene::primitive::Primitive,
};

/// Stable identifier of a scene entry; unique while live, reusable after removal.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&EntryId> for EntryId {
    fn from(value: &EntryId) -> Self {
        value.clone()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A live id bound to its current primitive state.
pub struct SceneEntry {
    /// Entry id.
    pub id: EntryId,
    /// Current state.
    pub primitive: Primitive,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered copy of the live entries at one point of playback.
pub struct Snapshot {
    /// Live entries in insertion order.
    pub entries: Vec<SceneEntry>,
}

impl Snapshot {
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Primitive> {
        self.entries
            .iter()
            .find(|e| e.id.as_str() == id)
            .map(|e| &e.primitive)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered mapping from entry id to primitive; owns everything currently visible.
///
/// Entries keep their insertion position across transforms. Re-creating an id after removal
/// appends it at the end.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    entries: Vec<SceneEntry>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id.as_str() == id)
    }

    /// Insert a new live entry; fails if `id` is already live.
    pub fn create(&mut self, id: impl Into<EntryId>, primitive: Primitive) -> AlephResult<()> {
        let id = id.into();
        if self.contains(id.as_str()) {
            return Err(AlephError::authoring(
                LifecycleFault::AlreadyLive,
                Some(id.as_str()),
            ));
        }
        self.entries.push(SceneEntry { id, primitive });
        Ok(())
    }

    /// Replace the primitive of a live entry and return the previous state.
    pub fn transform(&mut self, id: &str, primitive: Primitive) -> AlephResult<Primitive> {
        let idx = self.live_index(id, "transform")?;
        Ok(std::mem::replace(&mut self.entries[idx].primitive, primitive))
    }

    /// Remove a live entry and return its last state.
    pub fn remove(&mut self, id: &str) -> AlephResult<Primitive> {
        let idx = self.live_index(id, "remove")?;
        Ok(self.entries.remove(idx).primitive)
    }

    /// Remove every entry, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<SceneEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn get(&self, id: &str) -> Option<&Primitive> {
        self.position(id).map(|idx| &self.entries[idx].primitive)
    }

    pub(crate) fn require(&self, id: &str, op: &'static str) -> AlephResult<&Primitive> {
        let idx = self.live_index(id, op)?;
        Ok(&self.entries[idx].primitive)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.entries.clone(),
        }
    }

    fn live_index(&self, id: &str, op: &'static str) -> AlephResult<usize> {
        self.position(id)
            .ok_or_else(|| AlephError::authoring(LifecycleFault::NotLive { op }, Some(id)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
