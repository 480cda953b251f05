//! Managed-section recognition.
//!
//! Scans a template field for this tool's own section delimiters:
//! ```text
//! /* JRP add-on managed section start [version:1] */
//! content
//! /* JRP add-on managed section end */
//! ```
//! (HTML comment tokens in the script domain.) The scan produces a typed
//! [`Section`] value instead of raw match objects so the decision table in
//! [`crate::split`] can treat every case explicitly.

use crate::domain::Domain;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A well-formed managed section found in a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    /// Byte span from the first byte of the start tag (including the
    /// whitespace run preceding it at its line boundary) through the last
    /// byte of the end tag.
    pub span: Range<usize>,
    /// Version number embedded in the start tag, or `None` when the digits
    /// do not fit `u32`. An unreadable version never matches the current
    /// one, so such a section always gets rewritten.
    pub version: Option<u32>,
}

/// Result of scanning a field for a managed section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Start tag and matching end tag found.
    Found(SectionInfo),
    /// Start tag found but no end tag after it. The dangling tag is never
    /// trusted as a boundary; its offset and version are kept for
    /// diagnostics only.
    Truncated { start: usize, version: Option<u32> },
    /// No start tag.
    Absent,
}

static STYLE_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*/\* JRP add-on managed section start \[version:(\d+)] \*/$")
        .expect("Invalid style start tag regex")
});

static STYLE_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*/\* JRP add-on managed section end \*/$")
        .expect("Invalid style end tag regex")
});

static SCRIPT_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*<!-- JRP add-on managed section start \[version:(\d+)] -->$")
        .expect("Invalid script start tag regex")
});

static SCRIPT_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*<!-- JRP add-on managed section end -->$")
        .expect("Invalid script end tag regex")
});

/// Scans `text` for this tool's managed section in the given domain.
///
/// Only the first start tag counts. The end tag is searched strictly after
/// the start tag, with line anchors still evaluated against the whole text.
/// A start tag whose version digits do not fit `u32` still counts; its
/// version reads as `None`.
///
/// # Arguments
/// * `text` - The field content to scan
/// * `domain` - Selects the delimiter comment syntax
///
/// # Returns
/// [`Section::Found`] with span and version for a well-formed section,
/// [`Section::Truncated`] for a dangling start tag, or [`Section::Absent`].
pub fn locate(text: &str, domain: Domain) -> Section {
    let (start_re, end_re) = match domain {
        Domain::Style => (&*STYLE_START_RE, &*STYLE_END_RE),
        Domain::Script => (&*SCRIPT_START_RE, &*SCRIPT_END_RE),
    };

    let Some(caps) = start_re.captures(text) else {
        return Section::Absent;
    };
    let tag = caps.get(0).unwrap();
    // Digits that overflow u32 still mark a real tag; the unreadable
    // version compares unequal to every current one.
    let version = caps[1].parse::<u32>().ok();

    // find_at keeps `^` anchored to real line starts while beginning the
    // search after the start tag; searching a sliced copy would not.
    match end_re.find_at(text, tag.end()) {
        Some(end) => Section::Found(SectionInfo {
            span: tag.start()..end.end(),
            version,
        }),
        None => Section::Truncated {
            start: tag.start(),
            version,
        },
    }
}
