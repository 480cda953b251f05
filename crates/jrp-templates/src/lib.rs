//! Note-type storage and synchronization.
//!
//! Bridges the injection protocol to a host collection. Note types are
//! fetched through the [`NoteTypeStore`] seam, every managed field is run
//! through the synchronizer, and the note type is written back only when a
//! field actually changed. Each run produces a [`NoteTypeSync`] report
//! naming the rewritten fields; an untouched note type is a normal outcome,
//! not an error.
//!
//! Two stores ship with the crate: [`MemoryStore`] for tests and ephemeral
//! use, and [`CollectionFile`] for collections persisted as a JSON file
//! with atomic saves.

pub mod collection;
pub mod error;
pub mod model;
pub mod store;
pub mod sync;

pub use collection::CollectionFile;
pub use error::{Error, Result};
pub use model::{CardTemplate, NoteType, NoteTypeId};
pub use store::{MemoryStore, NoteTypeStore};
pub use sync::{FieldChange, FieldRef, NoteTypeSync, preview_note_type, sync_note_type};
