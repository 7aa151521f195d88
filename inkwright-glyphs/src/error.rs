//! Glyph data and stroke-script errors.

use std::fmt;

/// Errors raised while parsing stroke scripts or constructing glyph data.
///
/// All of these indicate corrupt authored data, not a runtime condition:
/// they are raised at construction time so that bad coordinates can never
/// reach a transform as NaN or infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// A stroke script could not be parsed.
    Script(String),
    /// Glyph data violates a construction invariant.
    InvalidData(String),
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script(msg) => write!(f, "stroke script error: {msg}"),
            Self::InvalidData(msg) => write!(f, "invalid glyph data: {msg}"),
        }
    }
}

impl std::error::Error for GlyphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = GlyphError::Script("`m` is missing an argument".to_owned());
        let s = format!("{err}");
        assert!(s.contains("stroke script error"), "missing prefix: {s}");
        assert!(s.contains("missing an argument"), "missing message: {s}");
    }
}
