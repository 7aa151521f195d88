//! Lazily-built, memoized store of compiled glyph definitions.

use std::collections::HashMap;
use std::sync::Arc;

use crate::keyframe::GlyphDefinition;
use crate::source::GlyphSource;

/// Memoizing cache of compiled [`GlyphDefinition`]s, keyed by character.
///
/// Compiling a definition measures every stroke of a glyph, so the
/// catalog does it once: the first lookup of a character consults the
/// source and stores the compiled definition; later lookups return the
/// stored entry unchanged. Entries are immutable once created and never
/// evicted — the supported alphabet is finite, so the catalog's size is
/// bounded for the life of the process.
///
/// Characters the source has no data for record nothing and return
/// `None`; an unsupported character stays a cheap miss and is a normal
/// outcome, not an error.
///
/// The catalog is not synchronized. A concurrent host should wrap it in
/// a lock; without one, racing first lookups of the same character
/// would merely compile the definition twice (the results are
/// value-equal, so this wastes work but corrupts nothing).
pub struct GlyphCatalog<S> {
    source: S,
    entries: HashMap<char, Arc<GlyphDefinition>>,
}

impl<S: GlyphSource> GlyphCatalog<S> {
    /// Create an empty catalog over a glyph source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    /// The underlying glyph source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Look up — and on first use, compile — the definition for a
    /// character. Returns `None` if the source has no glyph for it.
    pub fn lookup(&mut self, ch: char) -> Option<Arc<GlyphDefinition>> {
        if let Some(def) = self.entries.get(&ch) {
            return Some(Arc::clone(def));
        }
        let data = self.source.glyph(ch)?;
        let def = Arc::new(GlyphDefinition::compile(data));
        self.entries.insert(ch, Arc::clone(&def));
        Some(def)
    }

    /// Number of definitions compiled so far.
    #[must_use]
    pub fn compiled_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use crate::data::GlyphData;
    use crate::font::{FontStyle, ScriptFont};
    use crate::metrics::FontMetrics;

    fn tiny_font() -> ScriptFont {
        let mut font = ScriptFont::new("Tiny", FontMetrics::default(), FontStyle::Plain);
        font.set_glyph(
            'i',
            GlyphData::from_script(0.25, "w 0 m 0.12 0.4 l 0.12 1").expect("glyph"),
        );
        font.set_glyph(
            ' ',
            GlyphData::from_script(0.5, "w 1").expect("glyph"),
        );
        font
    }

    #[test]
    fn lookup_compiles_on_first_use() {
        let mut catalog = GlyphCatalog::new(tiny_font());
        assert_eq!(catalog.compiled_count(), 0);

        let def = catalog.lookup('i').expect("supported");
        assert_eq!(catalog.compiled_count(), 1);
        assert!(def.advance() > 0.0);
        assert_eq!(def.keyframes().len(), 4);
    }

    #[test]
    fn repeat_lookups_return_the_stored_entry() {
        let mut catalog = GlyphCatalog::new(tiny_font());
        let first = catalog.lookup('i').expect("supported");
        let second = catalog.lookup('i').expect("supported");
        assert!(
            Arc::ptr_eq(&first, &second),
            "second lookup must be a cache hit"
        );
        assert_eq!(catalog.compiled_count(), 1);
    }

    #[test]
    fn unsupported_characters_record_nothing() {
        let mut catalog = GlyphCatalog::new(tiny_font());
        assert!(catalog.lookup('\u{7}').is_none());
        assert!(catalog.lookup('Ω').is_none());
        assert_eq!(catalog.compiled_count(), 0);
        // A miss does not poison later lookups.
        assert!(catalog.lookup('i').is_some());
    }

    #[test]
    fn lookups_of_different_characters_are_independent() {
        let mut catalog = GlyphCatalog::new(tiny_font());
        let space = catalog.lookup(' ').expect("supported");
        let i = catalog.lookup('i').expect("supported");
        assert_eq!(catalog.compiled_count(), 2);
        assert!(space.keyframes().iter().all(|kf| kf.commands().is_empty()));
        assert!(!i.keyframes()[3].commands().is_empty());
    }
}
