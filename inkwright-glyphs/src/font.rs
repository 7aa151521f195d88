//! Script fonts: named collections of handwritten glyphs.

use std::collections::HashMap;

use crate::command::Scalar;
use crate::data::GlyphData;
use crate::error::GlyphError;
use crate::metrics::FontMetrics;
use crate::source::GlyphSource;

/// Pen presentation style of a [`ScriptFont`].
///
/// The style does not change the glyph paths, only how a backend should
/// dress the stroke (width, nib shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// A round-nibbed, even-width pen.
    #[default]
    Plain,
    /// A broad-nibbed calligraphy pen; strokes are dressed slightly
    /// heavier.
    Calligraphy,
}

/// A font whose glyphs can be rendered stroke by stroke.
///
/// Unlike a wipe-style reveal (which works with any outline font), this
/// requires specially authored stroke data per character. The built-in
/// [`ScriptFont::primer`] face covers the Latin letters, digits, and
/// common punctuation.
#[derive(Debug, Clone)]
pub struct ScriptFont {
    name: String,
    metrics: FontMetrics,
    style: FontStyle,
    missing_glyph: Option<char>,
    glyphs: HashMap<char, GlyphData>,
}

impl ScriptFont {
    /// Create an empty font.
    #[must_use]
    pub fn new(name: impl Into<String>, metrics: FontMetrics, style: FontStyle) -> Self {
        Self {
            name: name.into(),
            metrics,
            style,
            missing_glyph: None,
            glyphs: HashMap::new(),
        }
    }

    /// The built-in Primer face: a plain skeleton hand covering
    /// `A`–`Z`, `a`–`z`, `0`–`9`, space, and common punctuation.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError`] if the embedded stroke tables fail to
    /// parse (should not happen unless the bundled data is corrupt).
    pub fn primer() -> Result<Self, GlyphError> {
        crate::embedded::load_primer()
    }

    /// The font's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The font's vertical proportions.
    #[must_use]
    pub const fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// The font's pen style.
    #[must_use]
    pub const fn style(&self) -> FontStyle {
        self.style
    }

    /// The character substituted for unsupported input, if the font
    /// nominates one. Substitution is a caller decision; lookups never
    /// perform it implicitly.
    #[must_use]
    pub const fn missing_glyph(&self) -> Option<char> {
        self.missing_glyph
    }

    /// Nominate (or clear) the missing-glyph character.
    pub fn set_missing_glyph(&mut self, ch: Option<char>) {
        self.missing_glyph = ch;
    }

    /// Assign the glyph for a character, replacing any existing one.
    pub fn set_glyph(&mut self, ch: char, data: GlyphData) {
        self.glyphs.insert(ch, data);
    }

    /// All characters with a glyph, sorted.
    #[must_use]
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }

    /// Number of defined glyphs.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The stroke width that suits this font at the given rendered
    /// glyph height: a twelfth of the height, dressed 20 % heavier for
    /// a calligraphy pen.
    #[must_use]
    pub fn recommended_stroke_width(&self, height: Scalar) -> Scalar {
        let width = height / 12.0;
        match self.style {
            FontStyle::Plain => width,
            FontStyle::Calligraphy => width * 1.2,
        }
    }
}

impl GlyphSource for ScriptFont {
    fn glyph(&self, ch: char) -> Option<&GlyphData> {
        self.glyphs.get(&ch)
    }
}
