//! The public two-operation surface: look up, then write.

use std::sync::Arc;

use inkwright_glyphs::{GlyphCatalog, GlyphDefinition, GlyphSource, Scalar};

use crate::rect::DestRect;
use crate::renderer;
use crate::sink::DrawSink;

/// Writes characters straight from a glyph source.
///
/// Bundles a [`GlyphCatalog`] with the replay logic:
/// [`lookup_glyph`](Self::lookup_glyph) resolves and memoizes compiled
/// definitions, and [`render_glyph_stroke`](Self::render_glyph_stroke)
/// draws a character into a rectangle at a completion percentage.
/// Characters the source does not cover are skipped silently — not a
/// single sink call is made for them.
pub struct GlyphWriter<S> {
    catalog: GlyphCatalog<S>,
}

impl<S: GlyphSource> GlyphWriter<S> {
    /// Create a writer over a glyph source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            catalog: GlyphCatalog::new(source),
        }
    }

    /// The writer's catalog.
    #[must_use]
    pub const fn catalog(&self) -> &GlyphCatalog<S> {
        &self.catalog
    }

    /// Look up the compiled definition for a character, or `None` if
    /// the source has no glyph for it.
    pub fn lookup_glyph(&mut self, ch: char) -> Option<Arc<GlyphDefinition>> {
        self.catalog.lookup(ch)
    }

    /// Write a character into `rect` at the given completion
    /// percentage. Does nothing for unsupported characters.
    pub fn render_glyph_stroke(
        &mut self,
        ch: char,
        rect: &DestRect,
        percent_complete: Scalar,
        sink: &mut dyn DrawSink,
    ) {
        if let Some(glyph) = self.catalog.lookup(ch) {
            renderer::render(&glyph, rect, percent_complete, sink);
        }
    }
}
