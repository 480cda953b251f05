//! Generated payloads for JRP Template Manager.
//!
//! Builds the two machine-generated fragments the synchronizer injects into
//! note-type template fields: the stylesheet (a CSS variable block plus
//! static fragments, selected by preference) and the card script. Both are
//! compressed to a single line before injection, so the managed section
//! stays compact inside the user's field.
//!
//! The version constants here are the generation counters embedded in the
//! section delimiters; bump one whenever the corresponding payload format
//! changes incompatibly.

pub mod script;
pub mod style;

pub use script::{SCRIPT_VERSION, generate_script};
pub use style::{STYLE_VERSION, generate_style};

/// Collapses `text` to a single line: every line trimmed, empty lines
/// dropped, the rest joined by single spaces.
pub(crate) fn compress_spaces(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
