//! Managed-section injection protocol.
//!
//! Synchronizes machine-generated CSS and script fragments into user-editable
//! note-type template fields. The generated content lives inside a
//! delimiter-comment-bounded "managed section"; everything outside that
//! section belongs to the user and is never touched.
//!
//! ```text
//! field text ──► strip_legacy_sections (optional)
//!                        │
//!                        ▼
//!                locate ──► plan_update ──► Skip / Insert / Replace
//!                                                │
//!                                                ▼
//!                               prefix + enclose(payload) + suffix
//! ```
//!
//! Every operation is a pure string computation; the crate performs no I/O
//! and holds no state between calls. Updates are version-gated: a section
//! already carrying the current version is left alone, so re-running the
//! synchronization is always safe.
//!
//! # Example
//! ```
//! use jrp_inject::{Domain, sync_field};
//!
//! let updated = sync_field("Hello\n", Domain::Style, ".card {}", 1, false).unwrap();
//! assert!(updated.starts_with("Hello\n\n/* JRP add-on managed section start [version:1] */"));
//!
//! // A second pass with the same version reports nothing to do.
//! assert_eq!(sync_field(&updated, Domain::Style, ".card {}", 1, false), None);
//! ```

pub mod domain;
pub mod enclose;
pub mod legacy;
pub mod locate;
pub mod split;
pub mod sync;

pub use domain::Domain;
pub use enclose::enclose;
pub use legacy::strip_legacy_sections;
pub use locate::{Section, SectionInfo, locate};
pub use split::{UpdatePlan, plan_update};
pub use sync::sync_field;
