//! Generated card script payload.

use crate::compress_spaces;

/// Generation counter of the script payload format.
pub const SCRIPT_VERSION: u32 = 1;

static CARDS_JS: &str = include_str!("../assets/js/cards.js");

/// Builds the card script payload.
///
/// The embedded script is whitespace-compressed and wrapped in an
/// immediately-invoked function expression, keeping its identifiers out of
/// the host page's global scope. The caller wraps the result in a
/// `<script>` element before injection.
pub fn generate_script() -> String {
    format!("(function(){{ {} }})();", compress_spaces(CARDS_JS))
}
