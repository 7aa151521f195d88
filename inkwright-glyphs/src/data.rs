//! Authored glyph data: pen strokes and per-character records.
//!
//! This is the shape a [`GlyphSource`](crate::source::GlyphSource)
//! produces. It is validated at construction so that corrupt authoring
//! (non-finite coordinates, non-positive advances) fails loudly here
//! instead of surfacing later as NaN device coordinates.

use crate::command::{PathCommand, Scalar};
use crate::error::GlyphError;
use crate::measure;
use crate::script;

/// One pen-down path of a glyph, plus the pause taken before drawing it.
///
/// The pause is measured in "beats" — an arbitrary unit where 1 beat is
/// roughly the gap used for a space between words. A pen lift inside a
/// letter (the crossbar of a `t`, the dot of an `i`) is usually worth
/// 0.05–0.25 beats. Pauses only feed duration estimation; rendering
/// never reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStroke {
    pause_beats: Scalar,
    commands: Vec<PathCommand>,
}

impl PenStroke {
    /// Create a stroke from a pause and its path commands.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::InvalidData`] if the pause is negative or
    /// non-finite, a coordinate is non-finite, or a non-empty command
    /// list does not open with a `MoveTo`.
    pub fn new(pause_beats: Scalar, commands: Vec<PathCommand>) -> Result<Self, GlyphError> {
        if !pause_beats.is_finite() || pause_beats < 0.0 {
            return Err(GlyphError::InvalidData(format!(
                "stroke pause must be zero or greater, got {pause_beats}"
            )));
        }
        if let Some(bad) = commands.iter().find(|c| !c.is_finite()) {
            return Err(GlyphError::InvalidData(format!(
                "non-finite coordinate in {bad:?}"
            )));
        }
        if let Some(first) = commands.first() {
            if !matches!(first, PathCommand::MoveTo(_)) {
                return Err(GlyphError::InvalidData(
                    "a stroke must start with a MoveTo".to_owned(),
                ));
            }
        }
        Ok(Self {
            pause_beats,
            commands,
        })
    }

    /// The pause before this stroke, in beats.
    #[must_use]
    pub const fn pause_beats(&self) -> Scalar {
        self.pause_beats
    }

    /// The stroke's path commands. Empty for a pure pause.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Pen travel to draw this stroke, in glyph units.
    #[must_use]
    pub fn pen_travel(&self) -> Scalar {
        measure::pen_travel(&self.commands)
    }
}

/// Validated authored data for one character: its advance width and the
/// strokes that write it, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphData {
    advance: Scalar,
    strokes: Vec<PenStroke>,
}

impl GlyphData {
    /// Create glyph data from an advance width and its strokes.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::InvalidData`] if the advance is not a
    /// positive finite number.
    pub fn new(advance: Scalar, strokes: Vec<PenStroke>) -> Result<Self, GlyphError> {
        if !advance.is_finite() || advance <= 0.0 {
            return Err(GlyphError::InvalidData(format!(
                "advance must be positive and finite, got {advance}"
            )));
        }
        Ok(Self { advance, strokes })
    }

    /// Parse glyph data from a stroke script.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::Script`] for malformed scripts and
    /// [`GlyphError::InvalidData`] for invariant violations.
    pub fn from_script(advance: Scalar, script: &str) -> Result<Self, GlyphError> {
        Self::new(advance, script::parse_strokes(script)?)
    }

    /// Serialize the strokes back into a stroke script.
    #[must_use]
    pub fn to_script(&self) -> String {
        script::write_strokes(&self.strokes)
    }

    /// Advance width in glyph units.
    #[must_use]
    pub const fn advance(&self) -> Scalar {
        self.advance
    }

    /// The strokes that write this glyph, in drawing order.
    #[must_use]
    pub fn strokes(&self) -> &[PenStroke] {
        &self.strokes
    }

    /// Total pen travel across all strokes, in glyph units.
    #[must_use]
    pub fn pen_travel(&self) -> Scalar {
        self.strokes.iter().map(PenStroke::pen_travel).sum()
    }

    /// Estimated time to write this glyph, in seconds, at the given
    /// pause and travel rates.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::InvalidData`] if either rate is not a
    /// positive finite number.
    pub fn duration(
        &self,
        beats_per_second: Scalar,
        units_per_second: Scalar,
    ) -> Result<Scalar, GlyphError> {
        if !beats_per_second.is_finite() || beats_per_second <= 0.0 {
            return Err(GlyphError::InvalidData(
                "beats_per_second must be greater than zero".to_owned(),
            ));
        }
        if !units_per_second.is_finite() || units_per_second <= 0.0 {
            return Err(GlyphError::InvalidData(
                "units_per_second must be greater than zero".to_owned(),
            ));
        }
        Ok(self
            .strokes
            .iter()
            .map(|s| s.pause_beats() / beats_per_second + s.pen_travel() / units_per_second)
            .sum())
    }
}
