//! Host note-type model.
//!
//! Mirrors the shape the host application gives its note types: a shared
//! stylesheet plus a list of card layouts, each with a question and an
//! answer format. All three are free-form user-editable text; the
//! synchronizer only ever touches the managed section inside them.

use serde::{Deserialize, Serialize};

/// Host identifier of a note type.
pub type NoteTypeId = i64;

/// One card layout of a note type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Layout name, unique within its note type.
    pub name: String,
    /// Front-side format.
    pub question_format: String,
    /// Back-side format.
    pub answer_format: String,
}

impl CardTemplate {
    pub fn new(
        name: impl Into<String>,
        question_format: impl Into<String>,
        answer_format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            question_format: question_format.into(),
            answer_format: answer_format.into(),
        }
    }
}

/// One note type, the unit of synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteType {
    pub id: NoteTypeId,
    pub name: String,
    /// Stylesheet shared by all card layouts.
    #[serde(default)]
    pub stylesheet: String,
    /// Card layouts in display order.
    #[serde(default)]
    pub templates: Vec<CardTemplate>,
}
