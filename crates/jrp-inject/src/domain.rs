//! Content domains for managed sections.
//!
//! A template field belongs to one of two domains. The domain decides which
//! comment tokens delimit the managed section, which predecessor-tool marker
//! grammar applies, and which version counter the generated payload is
//! stamped with.

use std::fmt;

/// Content domain of a template field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Stylesheet field; section delimiters use CSS block comments.
    Style,
    /// Card-layout format field; section delimiters use HTML comments.
    Script,
}

impl Domain {
    /// Returns the `(open, close)` comment token pair for this domain.
    ///
    /// # Example
    /// ```
    /// use jrp_inject::Domain;
    ///
    /// assert_eq!(Domain::Style.comment_tokens(), ("/*", "*/"));
    /// assert_eq!(Domain::Script.comment_tokens(), ("<!--", "-->"));
    /// ```
    pub fn comment_tokens(&self) -> (&'static str, &'static str) {
        match self {
            Domain::Style => ("/*", "*/"),
            Domain::Script => ("<!--", "-->"),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Style => write!(f, "style"),
            Domain::Script => write!(f, "script"),
        }
    }
}
