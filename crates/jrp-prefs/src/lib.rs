//! Preference model for JRP Template Manager.
//!
//! Holds the resolved options the synchronizer consumes: which note types
//! are under management, which of their fields to maintain, whether to strip
//! predecessor-tool markers, and the CSS variable values interpolated into
//! the generated stylesheet. Preferences are declared in a TOML document:
//!
//! ```toml
//! [[note_types]]
//! id = 1286120344
//! remove_mia_migaku = true
//!
//! [note_types.style]
//! heiban_color = "#2d6bcf"
//! ```
//!
//! Missing keys fall back to defaults, so an entry only needs its `id`.

pub mod error;
pub mod options;

pub use error::{Error, Result};
pub use options::{ManagedNoteType, NoteTypeOptions, Prefs, StyleOptions};
