//! Delimiter wrapping for freshly generated payloads.

use crate::domain::Domain;

/// Wraps a generated payload in this tool's managed-section delimiters.
///
/// The opening comment carries the version the payload was generated for,
/// two warning lines follow, then the payload verbatim, then the closing
/// comment. The warning continuation line is indented to the width of the
/// opening comment token so the text columns line up. No trailing newline
/// is appended.
///
/// # Example
/// ```
/// use jrp_inject::{Domain, enclose};
///
/// let text = enclose("BODY", Domain::Style, 1);
/// assert!(text.starts_with("/* JRP add-on managed section start [version:1] */\n"));
/// assert!(text.ends_with("\n/* JRP add-on managed section end */"));
/// ```
pub fn enclose(payload: &str, domain: Domain, version: u32) -> String {
    let (oc, cc) = domain.comment_tokens();
    let pad = " ".repeat(oc.len());
    format!(
        "{oc} JRP add-on managed section start [version:{version}] {cc}\n\
         {oc} Changing the opening and closing tags in any way will break automatic CSS/JS handling.\n\
         {pad} Any manual changes made within this section will be overwritten. {cc}\n\
         {payload}\n\
         {oc} JRP add-on managed section end {cc}"
    )
}
