//! The canonical memory collection.
//!
//! The host owns one `MemoryCollection` for the lifetime of a session. All
//! derived views are computed from it; it changes only through the two
//! wholesale-replace mutations below or when ingestion swaps the whole set.

use keepsake_models::{Memory, MemoryId};
use tracing::{info, warn};

use crate::error::{GalleryError, Result};
use crate::filter::{FilterEngine, MemoryFilter};

/// Ordered, id-keyed collection of memories.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    memories: Vec<Memory>,
}

impl MemoryCollection {
    /// Creates a collection from already-validated memories.
    pub fn new(memories: Vec<Memory>) -> Self {
        Self { memories }
    }

    /// Replaces the whole collection (ingestion, demo mode).
    pub fn replace_all(&mut self, memories: Vec<Memory>) {
        info!(count = memories.len(), "Replacing memory collection");
        self.memories = memories;
    }

    /// All memories in canonical order.
    pub fn as_slice(&self) -> &[Memory] {
        &self.memories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Memory> {
        self.memories.iter()
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    /// Gets a memory by ID.
    pub fn get(&self, id: &MemoryId) -> Option<&Memory> {
        self.memories.iter().find(|m| &m.id == id)
    }

    fn get_mut(&mut self, id: &MemoryId) -> Result<&mut Memory> {
        match self.memories.iter_mut().find(|m| &m.id == id) {
            Some(memory) => Ok(memory),
            None => {
                warn!(memory_id = %id, "Mutation for unknown memory ignored");
                Err(GalleryError::MemoryNotFound(id.to_string()))
            }
        }
    }

    /// Replaces the user notes of a memory.
    ///
    /// The previous notes are discarded, never merged.
    pub fn update_notes(&mut self, id: &MemoryId, notes: impl Into<String>) -> Result<()> {
        let memory = self.get_mut(id)?;
        memory.user_notes = Some(notes.into());
        info!(memory_id = %id, "Notes saved");
        Ok(())
    }

    /// Replaces the tagged people of a memory.
    pub fn update_people(&mut self, id: &MemoryId, people: Vec<String>) -> Result<()> {
        let memory = self.get_mut(id)?;
        let count = people.len();
        memory.people = Some(people);
        info!(memory_id = %id, people = count, "People updated");
        Ok(())
    }

    /// Memories matching `filter`, in canonical order.
    pub fn filtered(&self, engine: &FilterEngine, filter: &MemoryFilter) -> Vec<&Memory> {
        engine.apply(&self.memories, filter)
    }
}

impl From<Vec<Memory>> for MemoryCollection {
    fn from(memories: Vec<Memory>) -> Self {
        Self::new(memories)
    }
}
