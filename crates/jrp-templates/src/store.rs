//! Store seam for note types.

use crate::error::{Error, Result};
use crate::model::{NoteType, NoteTypeId};

/// Storage backend holding the note types of one collection.
///
/// The synchronizer only talks to this trait; the backing store decides how
/// note types are persisted. Fetches hand out owned copies, so callers edit
/// freely and commit through [`update_note_type`].
///
/// [`update_note_type`]: NoteTypeStore::update_note_type
pub trait NoteTypeStore {
    /// Fetches a note type by id, `None` when no such note type exists.
    fn note_type(&self, id: NoteTypeId) -> Result<Option<NoteType>>;

    /// Replaces the stored note type carrying the same id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoteTypeNotFound`] when the id is not in the store.
    fn update_note_type(&mut self, note_type: &NoteType) -> Result<()>;

    /// Ids of every stored note type, in storage order.
    fn note_type_ids(&self) -> Result<Vec<NoteTypeId>>;
}

/// In-memory store for tests and ephemeral collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    note_types: Vec<NoteType>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note type, replacing any existing one with the same id.
    pub fn insert(&mut self, note_type: NoteType) {
        match self
            .note_types
            .iter_mut()
            .find(|nt| nt.id == note_type.id)
        {
            Some(slot) => *slot = note_type,
            None => self.note_types.push(note_type),
        }
    }
}

impl NoteTypeStore for MemoryStore {
    fn note_type(&self, id: NoteTypeId) -> Result<Option<NoteType>> {
        Ok(self.note_types.iter().find(|nt| nt.id == id).cloned())
    }

    fn update_note_type(&mut self, note_type: &NoteType) -> Result<()> {
        let slot = self
            .note_types
            .iter_mut()
            .find(|nt| nt.id == note_type.id)
            .ok_or(Error::NoteTypeNotFound { id: note_type.id })?;
        *slot = note_type.clone();
        Ok(())
    }

    fn note_type_ids(&self) -> Result<Vec<NoteTypeId>> {
        Ok(self.note_types.iter().map(|nt| nt.id).collect())
    }
}
