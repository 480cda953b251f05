//! JSON-file-backed note-type store.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{NoteType, NoteTypeId};
use crate::store::NoteTypeStore;

/// Serialized shape of a collection document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CollectionDoc {
    #[serde(default)]
    note_types: Vec<NoteType>,
}

/// A collection persisted as a single JSON file.
///
/// Edits accumulate in memory through the [`NoteTypeStore`] methods and
/// nothing reaches disk until [`save`]. Saving uses the
/// write-to-temp-then-rename strategy under an advisory lock, so a crash
/// mid-write leaves the original file untouched.
///
/// [`save`]: CollectionFile::save
#[derive(Debug)]
pub struct CollectionFile {
    path: PathBuf,
    doc: CollectionDoc,
}

impl CollectionFile {
    /// Opens an existing collection file.
    ///
    /// # Errors
    ///
    /// [`Error::Storage`] when the file cannot be read, [`Error::Corrupt`]
    /// when its content is not a valid collection document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| Error::storage(&path, e))?;
        let doc = serde_json::from_str(&content).map_err(|source| Error::Corrupt {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "collection opened");
        Ok(Self { path, doc })
    }

    /// Creates an empty collection that will save to `path`.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            doc: CollectionDoc::default(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds a note type to the document, replacing any existing one with
    /// the same id.
    pub fn insert(&mut self, note_type: NoteType) {
        match self
            .doc
            .note_types
            .iter_mut()
            .find(|nt| nt.id == note_type.id)
        {
            Some(slot) => *slot = note_type,
            None => self.doc.note_types.push(note_type),
        }
    }

    /// Writes the document back to its file atomically.
    ///
    /// The temp file sits next to the target so the final rename stays on
    /// one filesystem.
    pub fn save(&self) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.doc).map_err(|source| Error::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;
            }
        }

        let temp_name = format!(
            ".{}.{}.tmp",
            self.path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
            std::process::id()
        );
        let temp_path = self.path.with_file_name(&temp_name);

        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::storage(&temp_path, e))?;

        temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: self.path.clone(),
        })?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| Error::storage(&temp_path, e))?;

        temp_file
            .sync_all()
            .map_err(|e| Error::storage(&temp_path, e))?;

        temp_file.unlock().map_err(|_| Error::LockFailed {
            path: self.path.clone(),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| Error::storage(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            note_types = self.doc.note_types.len(),
            "collection saved"
        );
        Ok(())
    }
}

impl NoteTypeStore for CollectionFile {
    fn note_type(&self, id: NoteTypeId) -> Result<Option<NoteType>> {
        Ok(self.doc.note_types.iter().find(|nt| nt.id == id).cloned())
    }

    fn update_note_type(&mut self, note_type: &NoteType) -> Result<()> {
        let slot = self
            .doc
            .note_types
            .iter_mut()
            .find(|nt| nt.id == note_type.id)
            .ok_or(Error::NoteTypeNotFound { id: note_type.id })?;
        *slot = note_type.clone();
        Ok(())
    }

    fn note_type_ids(&self) -> Result<Vec<NoteTypeId>> {
        Ok(self.doc.note_types.iter().map(|nt| nt.id).collect())
    }
}
