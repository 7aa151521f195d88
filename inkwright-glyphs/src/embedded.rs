//! The built-in Primer script font.
//!
//! A plain skeleton hand covering the Latin letters, digits, and common
//! punctuation, authored as stroke-script strings. Coordinates are in
//! glyph space: x in `[0, advance]`, y from 0 (top line) down to 1
//! (baseline). Lowercase bodies start at the x-height line (y = 0.4);
//! descender tails reach below the baseline and accents above the top
//! line (negative y). Strokes are ordered the way a hand would write
//! them — stems before bowls, letters before their crossbars and dots.

use crate::command::Scalar;
use crate::data::GlyphData;
use crate::error::GlyphError;
use crate::font::{FontStyle, ScriptFont};
use crate::metrics::FontMetrics;

/// An entry in the Primer glyph table.
struct GlyphEntry {
    ch: char,
    /// Advance width in glyph units.
    advance: Scalar,
    /// Stroke script (`w`/`m`/`l`/`q`/`c`/`z` instructions).
    script: &'static str,
}

const fn e(ch: char, advance: Scalar, script: &'static str) -> GlyphEntry {
    GlyphEntry {
        ch,
        advance,
        script,
    }
}

#[rustfmt::skip]
static PRIMER: &[GlyphEntry] = &[
    // -- Capitals --
    e('A', 0.8, "w 0 m 0.4 0 l 0.05 1 w 0.1 m 0.4 0 l 0.75 1 w 0.1 m 0.18 0.62 l 0.62 0.62"),
    e('B', 0.7, "w 0 m 0.12 0 l 0.12 1 w 0.1 m 0.12 0 c 0.6 0.02 0.6 0.46 0.12 0.48 c 0.66 0.5 0.66 0.98 0.12 1"),
    e('C', 0.7, "w 0 m 0.62 0.1 c 0.12 -0.06 0.1 1.06 0.62 0.9"),
    e('D', 0.75, "w 0 m 0.12 0 l 0.12 1 w 0.1 m 0.12 0 c 0.7 0.05 0.7 0.95 0.12 1"),
    e('E', 0.65, "w 0 m 0.58 0 l 0.12 0 l 0.12 1 l 0.58 1 w 0.1 m 0.12 0.5 l 0.5 0.5"),
    e('F', 0.6, "w 0 m 0.56 0 l 0.12 0 l 0.12 1 w 0.1 m 0.12 0.5 l 0.48 0.5"),
    e('G', 0.75, "w 0 m 0.64 0.1 c 0.14 -0.06 0.1 1.04 0.6 0.92 l 0.64 0.58 l 0.38 0.58"),
    e('H', 0.75, "w 0 m 0.12 0 l 0.12 1 w 0.1 m 0.66 0 l 0.66 1 w 0.1 m 0.12 0.52 l 0.66 0.52"),
    e('I', 0.35, "w 0 m 0.18 0 l 0.18 1"),
    e('J', 0.55, "w 0 m 0.42 0 l 0.42 0.78 c 0.42 1.04 0.08 1.04 0.06 0.8"),
    e('K', 0.7, "w 0 m 0.12 0 l 0.12 1 w 0.1 m 0.6 0 l 0.14 0.55 w 0.05 m 0.3 0.42 l 0.64 1"),
    e('L', 0.6, "w 0 m 0.12 0 l 0.12 1 l 0.56 1"),
    e('M', 0.95, "w 0 m 0.08 1 l 0.13 0.02 l 0.48 0.82 l 0.83 0.02 l 0.88 1"),
    e('N', 0.8, "w 0 m 0.12 1 l 0.12 0.02 l 0.68 1 l 0.68 0"),
    e('O', 0.8, "w 0 m 0.4 0 c 0.02 0 0.02 1 0.4 1 c 0.78 1 0.78 0 0.4 0 z"),
    e('P', 0.65, "w 0 m 0.12 0 l 0.12 1 w 0.1 m 0.12 0.02 c 0.62 0 0.62 0.56 0.12 0.55"),
    e('Q', 0.8, "w 0 m 0.4 0 c 0.02 0 0.02 1 0.4 1 c 0.78 1 0.78 0 0.4 0 z w 0.1 m 0.5 0.72 l 0.76 1.06"),
    e('R', 0.7, "w 0 m 0.12 0 l 0.12 1 w 0.1 m 0.12 0.02 c 0.62 0 0.62 0.56 0.12 0.55 w 0.05 m 0.32 0.55 l 0.66 1"),
    e('S', 0.6, "w 0 m 0.54 0.12 c 0.18 -0.1 0.04 0.32 0.3 0.48 c 0.58 0.66 0.5 1.1 0.1 0.9"),
    e('T', 0.7, "w 0 m 0.05 0.02 l 0.65 0.02 w 0.1 m 0.35 0.02 l 0.35 1"),
    e('U', 0.75, "w 0 m 0.1 0 l 0.1 0.66 c 0.1 1.04 0.66 1.04 0.66 0.66 l 0.66 0"),
    e('V', 0.75, "w 0 m 0.06 0 l 0.38 1 l 0.7 0"),
    e('W', 1.0, "w 0 m 0.05 0 l 0.24 1 l 0.5 0.18 l 0.76 1 l 0.95 0"),
    e('X', 0.7, "w 0 m 0.08 0 l 0.62 1 w 0.1 m 0.62 0 l 0.08 1"),
    e('Y', 0.7, "w 0 m 0.06 0 l 0.35 0.5 l 0.35 1 w 0.1 m 0.64 0 l 0.35 0.5"),
    e('Z', 0.65, "w 0 m 0.08 0.02 l 0.58 0.02 l 0.08 1 l 0.58 1"),
    // -- Lowercase --
    e('a', 0.6, "w 0 m 0.46 0.47 c 0.12 0.32 0.08 1.02 0.46 0.86 w 0.05 m 0.46 0.4 l 0.46 1"),
    e('b', 0.6, "w 0 m 0.12 0 l 0.12 1 w 0.05 m 0.12 0.54 c 0.58 0.32 0.58 1.08 0.12 0.9"),
    e('c', 0.55, "w 0 m 0.48 0.5 c 0.1 0.34 0.1 1.04 0.48 0.9"),
    e('d', 0.6, "w 0 m 0.48 0.54 c 0.08 0.32 0.08 1.06 0.48 0.88 w 0.05 m 0.48 0 l 0.48 1"),
    e('e', 0.55, "w 0 m 0.08 0.7 l 0.46 0.7 c 0.5 0.36 0.1 0.3 0.08 0.7 c 0.06 0.98 0.3 1.02 0.48 0.9"),
    e('f', 0.45, "w 0 m 0.38 0.04 c 0.2 -0.02 0.16 0.12 0.16 0.3 l 0.16 1 w 0.1 m 0.04 0.42 l 0.34 0.42"),
    e('g', 0.6, "w 0 m 0.46 0.47 c 0.12 0.32 0.08 1.0 0.46 0.86 w 0.05 m 0.46 0.4 l 0.46 1.1 c 0.46 1.32 0.14 1.32 0.1 1.14"),
    e('h', 0.6, "w 0 m 0.12 0 l 0.12 1 w 0.05 m 0.12 0.58 c 0.4 0.36 0.5 0.44 0.5 0.62 l 0.5 1"),
    e('i', 0.25, "w 0 m 0.12 0.42 l 0.12 1 w 0.15 m 0.11 0.16 l 0.13 0.19"),
    e('j', 0.3, "w 0 m 0.2 0.42 l 0.2 1.12 c 0.2 1.34 0.02 1.32 0.0 1.18 w 0.15 m 0.19 0.16 l 0.21 0.19"),
    e('k', 0.55, "w 0 m 0.1 0 l 0.1 1 w 0.1 m 0.44 0.42 l 0.12 0.68 w 0.05 m 0.22 0.6 l 0.48 1"),
    e('l', 0.25, "w 0 m 0.12 0 l 0.12 1"),
    e('m', 0.9, "w 0 m 0.1 0.42 l 0.1 1 w 0.05 m 0.1 0.56 c 0.3 0.36 0.46 0.42 0.46 0.62 l 0.46 1 w 0.05 m 0.46 0.6 c 0.64 0.4 0.8 0.46 0.8 0.64 l 0.8 1"),
    e('n', 0.6, "w 0 m 0.1 0.42 l 0.1 1 w 0.05 m 0.1 0.56 c 0.34 0.36 0.5 0.44 0.5 0.62 l 0.5 1"),
    e('o', 0.6, "w 0 m 0.3 0.4 c 0.0 0.4 0.0 1 0.3 1 c 0.6 1 0.6 0.4 0.3 0.4 z"),
    e('p', 0.6, "w 0 m 0.12 0.42 l 0.12 1.3 w 0.1 m 0.12 0.55 c 0.58 0.34 0.58 1.06 0.12 0.88"),
    e('q', 0.6, "w 0 m 0.48 0.54 c 0.08 0.32 0.08 1.02 0.48 0.86 w 0.05 m 0.48 0.42 l 0.48 1.3"),
    e('r', 0.45, "w 0 m 0.1 0.42 l 0.1 1 w 0.05 m 0.1 0.58 c 0.22 0.4 0.32 0.38 0.4 0.45"),
    e('s', 0.5, "w 0 m 0.4 0.46 c 0.12 0.36 0.08 0.6 0.24 0.68 c 0.42 0.76 0.44 1.02 0.1 0.92"),
    e('t', 0.4, "w 0 m 0.18 0.1 l 0.18 0.85 c 0.18 1.0 0.3 1.0 0.36 0.94 w 0.1 m 0.04 0.42 l 0.34 0.42"),
    e('u', 0.6, "w 0 m 0.1 0.42 l 0.1 0.82 c 0.1 1.04 0.42 1.06 0.5 0.82 w 0.02 m 0.5 0.42 l 0.5 1"),
    e('v', 0.55, "w 0 m 0.06 0.42 l 0.28 1 l 0.5 0.42"),
    e('w', 0.8, "w 0 m 0.05 0.42 l 0.2 1 l 0.4 0.52 l 0.6 1 l 0.75 0.42"),
    e('x', 0.55, "w 0 m 0.08 0.42 l 0.48 1 w 0.1 m 0.48 0.42 l 0.08 1"),
    e('y', 0.55, "w 0 m 0.08 0.42 l 0.3 0.95 w 0.05 m 0.52 0.42 l 0.2 1.28 c 0.14 1.38 0.04 1.34 0.02 1.24"),
    e('z', 0.5, "w 0 m 0.08 0.42 l 0.44 0.42 l 0.06 1 l 0.46 1"),
    // -- Digits --
    e('0', 0.7, "w 0 m 0.35 0 c 0.04 0 0.04 1 0.35 1 c 0.66 1 0.66 0 0.35 0 z"),
    e('1', 0.45, "w 0 m 0.08 0.22 l 0.27 0.02 l 0.27 1"),
    e('2', 0.65, "w 0 m 0.08 0.26 c 0.06 -0.08 0.6 -0.08 0.56 0.28 c 0.54 0.5 0.3 0.66 0.08 1 l 0.6 1"),
    e('3', 0.65, "w 0 m 0.08 0.12 c 0.52 -0.12 0.62 0.42 0.3 0.47 c 0.68 0.52 0.6 1.1 0.07 0.9"),
    e('4', 0.7, "w 0 m 0.5 0.02 l 0.08 0.66 l 0.66 0.66 w 0.1 m 0.5 0.02 l 0.5 1"),
    e('5', 0.65, "w 0 m 0.56 0.02 l 0.14 0.02 l 0.11 0.45 c 0.5 0.28 0.64 0.62 0.56 0.8 c 0.46 1.04 0.14 1.0 0.08 0.84"),
    e('6', 0.65, "w 0 m 0.52 0.04 c 0.2 0.24 0.08 0.56 0.1 0.74 c 0.13 1.08 0.58 1.02 0.58 0.72 c 0.58 0.44 0.2 0.48 0.11 0.68"),
    e('7', 0.65, "w 0 m 0.08 0.02 l 0.6 0.02 l 0.28 1"),
    e('8', 0.65, "w 0 m 0.33 0.47 c 0.05 0.4 0.1 0 0.33 0 c 0.56 0 0.61 0.4 0.33 0.47 c 0.04 0.55 0.0 1 0.33 1 c 0.66 1 0.62 0.55 0.33 0.47 z"),
    e('9', 0.65, "w 0 m 0.56 0.28 c 0.54 -0.04 0.12 -0.02 0.1 0.3 c 0.1 0.58 0.52 0.6 0.56 0.28 c 0.56 0.6 0.52 1 0.24 0.98"),
    // -- Punctuation --
    e(' ', 0.5, "w 1"),
    e('.', 0.3, "w 0 m 0.13 0.92 l 0.17 0.97"),
    e(',', 0.3, "w 0 m 0.16 0.9 c 0.2 0.96 0.18 1.08 0.08 1.16"),
    e('\'', 0.25, "w 0 m 0.13 0.0 l 0.1 0.2"),
    e('-', 0.5, "w 0 m 0.08 0.55 l 0.42 0.55"),
    e(':', 0.3, "w 0 m 0.13 0.45 l 0.17 0.5 w 0.2 m 0.13 0.92 l 0.17 0.97"),
    e(';', 0.3, "w 0 m 0.13 0.45 l 0.17 0.5 w 0.2 m 0.16 0.9 c 0.2 0.96 0.18 1.08 0.08 1.16"),
    e('!', 0.35, "w 0 m 0.17 0 l 0.17 0.62 w 0.15 m 0.15 0.92 l 0.19 0.97"),
    e('?', 0.6, "w 0 m 0.08 0.22 c 0.06 -0.1 0.56 -0.1 0.52 0.24 c 0.5 0.44 0.3 0.46 0.3 0.64 w 0.15 m 0.28 0.92 l 0.32 0.97"),
    // -- Accented forms --
    e('é', 0.55, "w 0 m 0.08 0.7 l 0.46 0.7 c 0.5 0.36 0.1 0.3 0.08 0.7 c 0.06 0.98 0.3 1.02 0.48 0.9 w 0.15 m 0.2 0.3 l 0.34 0.14"),
    e('É', 0.65, "w 0 m 0.58 0 l 0.12 0 l 0.12 1 l 0.58 1 w 0.1 m 0.12 0.5 l 0.5 0.5 w 0.15 m 0.26 -0.22 l 0.42 -0.08"),
];

/// Load the Primer font from the embedded tables.
///
/// Every script is parsed and validated here, so lookups against the
/// returned font cannot fail on corrupt data later.
///
/// # Errors
///
/// Returns [`GlyphError`] if any embedded script fails to parse
/// (should not happen unless the bundled tables are corrupt).
pub(crate) fn load_primer() -> Result<ScriptFont, GlyphError> {
    let mut font = ScriptFont::new("Primer", FontMetrics::default(), FontStyle::Plain);
    font.set_missing_glyph(Some('?'));
    for entry in PRIMER {
        let data = GlyphData::from_script(entry.advance, entry.script).map_err(|err| {
            GlyphError::InvalidData(format!("embedded glyph {:?}: {err}", entry.ch))
        })?;
        font.set_glyph(entry.ch, data);
    }
    Ok(font)
}
