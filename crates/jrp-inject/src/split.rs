//! Update decision logic for one template field.
//!
//! Combines the section scan with the current payload version to pick, per
//! field, exactly one of three outcomes: leave the field alone, append a
//! brand-new section at the end, or replace the existing section's span.

use crate::domain::Domain;
use crate::locate::{Section, locate};

/// The update action selected for one field, carrying the surrounding text
/// to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePlan<'a> {
    /// The existing section already carries the current version.
    Skip,
    /// No usable section exists; the new section goes at the end, after
    /// `prefix` (the field normalized to exactly one trailing blank line).
    Insert { prefix: String },
    /// A section with a different version exists; `prefix` and `suffix` are
    /// the field text strictly before and after its span.
    Replace { prefix: &'a str, suffix: &'a str },
}

impl UpdatePlan<'_> {
    /// Returns `true` when the field needs rewriting.
    pub fn needs_update(&self) -> bool {
        !matches!(self, UpdatePlan::Skip)
    }
}

/// Decides how `text` must change to carry the current payload generation.
///
/// The decision table:
/// - no start tag: insert at end
/// - well-formed section, same version: skip
/// - well-formed section, other or unreadable version: replace its span
/// - start tag without end tag: insert at end, dangling tag left verbatim
pub fn plan_update(text: &str, domain: Domain, current_version: u32) -> UpdatePlan<'_> {
    match locate(text, domain) {
        Section::Found(info) if info.version == Some(current_version) => UpdatePlan::Skip,
        Section::Found(info) => UpdatePlan::Replace {
            prefix: &text[..info.span.start],
            suffix: &text[info.span.end..],
        },
        Section::Truncated { start, version } => {
            tracing::debug!(start, ?version, "dangling start tag, appending a new section");
            UpdatePlan::Insert {
                prefix: insertion_prefix(text),
            }
        }
        Section::Absent => UpdatePlan::Insert {
            prefix: insertion_prefix(text),
        },
    }
}

/// Normalizes a field for appending: trailing whitespace becomes exactly one
/// blank line.
fn insertion_prefix(text: &str) -> String {
    format!("{}\n\n", text.trim_end())
}
