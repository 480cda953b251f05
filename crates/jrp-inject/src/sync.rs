//! Per-field synchronization.

use crate::domain::Domain;
use crate::enclose::enclose;
use crate::legacy::strip_legacy_sections;
use crate::split::{UpdatePlan, plan_update};

/// Synchronizes one template field with the current payload generation.
///
/// Runs the optional predecessor-marker strip, decides the update action,
/// and reassembles the field. Returns `None` when the field already carries
/// the current version; the caller must not write anything back in that
/// case. `None` also discards whatever the strip pass removed, so
/// predecessor markers only disappear from a field on an invocation that
/// rewrites it anyway.
///
/// # Arguments
/// * `text` - Current field content
/// * `domain` - Comment syntax and version namespace
/// * `payload` - Freshly generated content to embed
/// * `version` - Generation counter the payload was built for
/// * `strip_legacy` - Run the predecessor-marker strip first
///
/// # Returns
/// The full replacement text, or `None` when no update is needed.
///
/// # Example
/// ```
/// use jrp_inject::{Domain, sync_field};
///
/// let first = sync_field("", Domain::Script, "<script>go()</script>", 1, false).unwrap();
/// assert!(first.contains("<script>go()</script>"));
/// assert_eq!(sync_field(&first, Domain::Script, "<script>go()</script>", 1, false), None);
/// ```
pub fn sync_field(
    text: &str,
    domain: Domain,
    payload: &str,
    version: u32,
    strip_legacy: bool,
) -> Option<String> {
    let stripped;
    let working: &str = if strip_legacy {
        stripped = strip_legacy_sections(text, domain);
        &stripped
    } else {
        text
    };

    match plan_update(working, domain, version) {
        UpdatePlan::Skip => {
            tracing::trace!(%domain, version, "section is current");
            None
        }
        UpdatePlan::Insert { prefix } => {
            Some(format!("{prefix}{}", enclose(payload, domain, version)))
        }
        UpdatePlan::Replace { prefix, suffix } => {
            Some(format!("{prefix}{}{suffix}", enclose(payload, domain, version)))
        }
    }
}
