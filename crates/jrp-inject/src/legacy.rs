//! Predecessor-tool marker removal.
//!
//! Two earlier add-ons (shipped under the product names `MIA` and `MIGAKU`)
//! marked their generated regions with `###`-fenced sentinel comments:
//! ```text
//! /*###MIA JAPANESE SUPPORT CSS STARTS###
//! Do Not Edit If Using Automatic CSS and JS Management*/
//! .pitch { color: red; }
//! /*###MIA JAPANESE SUPPORT CSS ENDS###*/
//! ```
//! Script regions use HTML comments, carry a script-kind qualifier (`JS`,
//! `CONVERTER JS`, `KATAKANA CONVERTER JS`), and keep body and closing
//! sentinel on the line that ends the opening sentinel. A closing sentinel
//! must repeat the opening sentinel's product token (and script kind), so
//! the close is derived from the captured open rather than matched
//! independently.

use crate::domain::Domain;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

const LEGACY_TRAIL: &str = "Do Not Edit If Using Automatic CSS and JS Management";

/// Opening sentinel of a predecessor style region. The product token is
/// captured so the closing sentinel can be required to name the same one.
static LEGACY_STYLE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"/\*###((?:MIA|MIGAKU) JAPANESE SUPPORT) CSS STARTS###\n{LEGACY_TRAIL}\*/\n"
    ))
    .expect("Invalid legacy style open regex")
});

/// Opening sentinel of a predecessor script region; captures the product
/// token and the script-kind qualifier.
static LEGACY_SCRIPT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"<!--###((?:MIA|MIGAKU) JAPANESE SUPPORT) ((?:(?:KATAKANA )?CONVERTER )?JS) START###\n{LEGACY_TRAIL}-->"
    ))
    .expect("Invalid legacy script open regex")
});

/// Removes every predecessor-tool region from `text`, plus the newline runs
/// hugging each one. Returns the input unchanged when nothing matches.
///
/// A candidate region only counts when its closing sentinel names the same
/// product (and, for scripts, the same script kind) as its opening sentinel,
/// its body stays on a single line, and the close sits where the historical
/// grammar put it: at the start of the line after the body for style
/// regions, on the same line as the opening sentinel's tail for script
/// regions. Candidates that fail any of these checks are left untouched,
/// never partially stripped.
///
/// # Arguments
/// * `text` - The field content to clean
/// * `domain` - Selects the style or script marker grammar
pub fn strip_legacy_sections(text: &str, domain: Domain) -> Cow<'_, str> {
    let spans = match domain {
        Domain::Style => style_spans(text),
        Domain::Script => script_spans(text),
    };
    if spans.is_empty() {
        return Cow::Borrowed(text);
    }
    tracing::debug!(count = spans.len(), %domain, "removing predecessor-tool regions");

    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    for span in spans {
        result.push_str(&text[pos..span.start]);
        pos = span.end;
    }
    result.push_str(&text[pos..]);
    Cow::Owned(result)
}

fn style_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in LEGACY_STYLE_OPEN_RE.captures_iter(text) {
        let open = caps.get(0).unwrap();
        if open.start() < cursor {
            continue;
        }
        let product = caps.get(1).unwrap().as_str();

        // One body line, then the close at the start of the next line.
        let Some(body_len) = text[open.end()..].find('\n') else {
            continue;
        };
        let close_start = open.end() + body_len + 1;
        let close = format!("/*###{product} CSS ENDS###*/");
        if !text[close_start..].starts_with(&close) {
            continue;
        }

        let span = widen_over_newlines(text, open.start()..close_start + close.len(), cursor);
        cursor = span.end;
        spans.push(span);
    }

    spans
}

fn script_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in LEGACY_SCRIPT_OPEN_RE.captures_iter(text) {
        let open = caps.get(0).unwrap();
        if open.start() < cursor {
            continue;
        }
        let product = caps.get(1).unwrap().as_str();
        let kind = caps.get(2).unwrap().as_str();

        // Body and close share the line that ends the opening sentinel.
        let rest = &text[open.end()..];
        let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
        let close = format!("<!--###{product} {kind} ENDS###-->");
        let Some(rel) = line.find(&close) else {
            continue;
        };

        let span =
            widen_over_newlines(text, open.start()..open.end() + rel + close.len(), cursor);
        cursor = span.end;
        spans.push(span);
    }

    spans
}

/// Widens `span` over the newline runs directly before and after it, without
/// crossing `floor` on the left.
fn widen_over_newlines(text: &str, span: Range<usize>, floor: usize) -> Range<usize> {
    let bytes = text.as_bytes();
    let mut start = span.start;
    while start > floor && bytes[start - 1] == b'\n' {
        start -= 1;
    }
    let mut end = span.end;
    while end < bytes.len() && bytes[end] == b'\n' {
        end += 1;
    }
    start..end
}
