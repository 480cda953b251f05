//! Per-note-type synchronization.
//!
//! Runs the injection protocol over every field the preferences say to
//! manage: the stylesheet under the style domain, and each card layout's
//! question and answer format under the script domain. Payloads are
//! generated once per note type and reused across fields; the report lists
//! exactly which fields were rewritten.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use jrp_assets::{SCRIPT_VERSION, STYLE_VERSION, generate_script, generate_style};
use jrp_inject::{Domain, sync_field};
use jrp_prefs::NoteTypeOptions;

use crate::error::{Error, Result};
use crate::model::{NoteType, NoteTypeId};
use crate::store::NoteTypeStore;

/// Identifies one editable field of a note type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldRef {
    /// The shared stylesheet.
    Stylesheet,
    /// Front-side format of one card layout.
    QuestionFormat { template: String },
    /// Back-side format of one card layout.
    AnswerFormat { template: String },
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Stylesheet => write!(f, "stylesheet"),
            FieldRef::QuestionFormat { template } => {
                write!(f, "{template} question format")
            }
            FieldRef::AnswerFormat { template } => {
                write!(f, "{template} answer format")
            }
        }
    }
}

/// One rewritten field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Which field changed.
    pub field: FieldRef,
    /// Field text before synchronization.
    pub old: String,
    /// Full replacement text.
    pub new: String,
}

/// Report of one note type's synchronization.
///
/// An empty change list means every managed field already carried the
/// current generation. That is the normal steady-state outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTypeSync {
    pub id: NoteTypeId,
    pub name: String,
    /// Fields that were (or, for previews, would be) rewritten.
    pub changes: Vec<FieldChange>,
}

impl NoteTypeSync {
    /// Returns `true` when at least one field was rewritten.
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Computes the field updates for one note type without touching the store.
///
/// The returned changes carry the full would-be replacement texts, so a
/// caller can diff or display them before deciding to apply.
///
/// # Errors
///
/// Returns [`Error::NoteTypeNotFound`] when `id` is not in the store.
pub fn preview_note_type<S: NoteTypeStore + ?Sized>(
    store: &S,
    id: NoteTypeId,
    options: &NoteTypeOptions,
) -> Result<NoteTypeSync> {
    let note_type = store.note_type(id)?.ok_or(Error::NoteTypeNotFound { id })?;
    let (_, report) = plan_note_type(&note_type, options);
    Ok(report)
}

/// Synchronizes one note type, committing it back to the store only when a
/// field actually changed.
///
/// # Errors
///
/// Returns [`Error::NoteTypeNotFound`] when `id` is not in the store.
pub fn sync_note_type<S: NoteTypeStore + ?Sized>(
    store: &mut S,
    id: NoteTypeId,
    options: &NoteTypeOptions,
) -> Result<NoteTypeSync> {
    let note_type = store.note_type(id)?.ok_or(Error::NoteTypeNotFound { id })?;
    let (updated, report) = plan_note_type(&note_type, options);
    if report.changed() {
        store.update_note_type(&updated)?;
        debug!(
            id,
            name = %report.name,
            fields = report.changes.len(),
            "note type synchronized"
        );
    }
    Ok(report)
}

/// Runs the protocol over every managed field, building the updated note
/// type and the change report together.
fn plan_note_type(note_type: &NoteType, options: &NoteTypeOptions) -> (NoteType, NoteTypeSync) {
    let mut updated = note_type.clone();
    let mut changes = Vec::new();
    let strip = options.remove_mia_migaku;

    if options.manage_style {
        let payload = generate_style(&options.style, options.use_diamond_indicators);
        if let Some(new) = sync_field(
            &updated.stylesheet,
            Domain::Style,
            &payload,
            STYLE_VERSION,
            strip,
        ) {
            changes.push(FieldChange {
                field: FieldRef::Stylesheet,
                old: updated.stylesheet.clone(),
                new: new.clone(),
            });
            updated.stylesheet = new;
        }
    }

    if options.manage_script {
        // The script element wrapper belongs to the note type layer; the
        // protocol core only sees opaque payload text.
        let payload = format!("<script>{}</script>", generate_script());
        for template in &mut updated.templates {
            if let Some(new) = sync_field(
                &template.question_format,
                Domain::Script,
                &payload,
                SCRIPT_VERSION,
                strip,
            ) {
                changes.push(FieldChange {
                    field: FieldRef::QuestionFormat {
                        template: template.name.clone(),
                    },
                    old: template.question_format.clone(),
                    new: new.clone(),
                });
                template.question_format = new;
            }
            if let Some(new) = sync_field(
                &template.answer_format,
                Domain::Script,
                &payload,
                SCRIPT_VERSION,
                strip,
            ) {
                changes.push(FieldChange {
                    field: FieldRef::AnswerFormat {
                        template: template.name.clone(),
                    },
                    old: template.answer_format.clone(),
                    new: new.clone(),
                });
                template.answer_format = new;
            }
        }
    }

    let report = NoteTypeSync {
        id: note_type.id,
        name: note_type.name.clone(),
        changes,
    };
    (updated, report)
}
