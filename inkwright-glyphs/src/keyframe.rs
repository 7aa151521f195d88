//! Reveal keyframes and compiled glyph definitions.
//!
//! A glyph's progressive reveal is quantized to four discrete stages.
//! Compiling a [`GlyphData`] measures its total pen travel and cuts the
//! command sequence at 25 %, 50 % and 75 % of it; the final stage is
//! the full sequence. Because cutting happens by arc length with
//! kind-preserving subdivision, each stage's command-kind sequence is a
//! literal prefix of the next one's — later stages only append
//! commands, or push the last shared segment's endpoint further along.

use crate::command::{PathCommand, Scalar};
use crate::data::GlyphData;
use crate::measure;

/// The four discrete reveal stages of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStage {
    /// Up to a quarter written.
    Quarter,
    /// Up to half written.
    Half,
    /// Up to three quarters written.
    ThreeQuarters,
    /// Fully written.
    Full,
}

impl CompletionStage {
    /// All stages, in reveal order.
    pub const ALL: [Self; 4] = [Self::Quarter, Self::Half, Self::ThreeQuarters, Self::Full];

    /// Select the stage for a completion percentage.
    ///
    /// Values below 25 select [`Quarter`](Self::Quarter) — negative
    /// values included, since they satisfy the first comparison. Values
    /// of 75 or above select [`Full`](Self::Full), as do 100 and
    /// beyond. Non-finite values fail every comparison and also land on
    /// [`Full`](Self::Full).
    #[must_use]
    pub fn for_percent(percent: Scalar) -> Self {
        if percent < 25.0 {
            Self::Quarter
        } else if percent < 50.0 {
            Self::Half
        } else if percent < 75.0 {
            Self::ThreeQuarters
        } else {
            Self::Full
        }
    }

    /// Position of this stage in keyframe order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Quarter => 0,
            Self::Half => 1,
            Self::ThreeQuarters => 2,
            Self::Full => 3,
        }
    }

    /// The fraction of total pen travel revealed at this stage.
    #[must_use]
    pub const fn fraction(self) -> Scalar {
        match self {
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
            Self::Full => 1.0,
        }
    }
}

/// The commands visible at one reveal stage.
///
/// Which stage a keyframe belongs to is given by its position in
/// [`GlyphDefinition::keyframes`], matching [`CompletionStage::ALL`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Keyframe {
    commands: Vec<PathCommand>,
}

impl Keyframe {
    /// The keyframe's commands, in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
}

/// A compiled, immutable glyph: advance width, total pen travel, and
/// the four reveal keyframes.
///
/// Definitions are compiled once per character (see
/// [`GlyphCatalog`](crate::catalog::GlyphCatalog)) and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDefinition {
    advance: Scalar,
    arc_length: Scalar,
    keyframes: [Keyframe; 4],
}

impl GlyphDefinition {
    /// Compile authored glyph data into its reveal keyframes.
    #[must_use]
    pub fn compile(data: &GlyphData) -> Self {
        let full: Vec<PathCommand> = data
            .strokes()
            .iter()
            .flat_map(|s| s.commands().iter().copied())
            .collect();
        let arc_length = measure::pen_travel(&full);

        let cut = |stage: CompletionStage| Keyframe {
            commands: measure::truncate(&full, arc_length * stage.fraction()),
        };
        let quarter = cut(CompletionStage::Quarter);
        let half = cut(CompletionStage::Half);
        let three_quarters = cut(CompletionStage::ThreeQuarters);
        let keyframes = [quarter, half, three_quarters, Keyframe { commands: full }];

        Self {
            advance: data.advance(),
            arc_length,
            keyframes,
        }
    }

    /// Advance width in glyph units.
    #[must_use]
    pub const fn advance(&self) -> Scalar {
        self.advance
    }

    /// Total pen travel in glyph units. Carried for animation timing
    /// (duration proportional to stroke length); rendering never reads
    /// it.
    #[must_use]
    pub const fn arc_length(&self) -> Scalar {
        self.arc_length
    }

    /// All four keyframes, in reveal order.
    #[must_use]
    pub const fn keyframes(&self) -> &[Keyframe; 4] {
        &self.keyframes
    }

    /// The keyframe for one reveal stage.
    #[must_use]
    pub fn keyframe(&self, stage: CompletionStage) -> &Keyframe {
        &self.keyframes[stage.index()]
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::data::GlyphData;
    use kurbo::Point;

    fn compile(script: &str) -> GlyphDefinition {
        GlyphDefinition::compile(&GlyphData::from_script(0.8, script).expect("valid glyph"))
    }

    #[test]
    fn stage_selection_matches_the_four_buckets() {
        assert_eq!(CompletionStage::for_percent(0.0), CompletionStage::Quarter);
        assert_eq!(CompletionStage::for_percent(24.9), CompletionStage::Quarter);
        assert_eq!(CompletionStage::for_percent(25.0), CompletionStage::Half);
        assert_eq!(CompletionStage::for_percent(49.9), CompletionStage::Half);
        assert_eq!(
            CompletionStage::for_percent(50.0),
            CompletionStage::ThreeQuarters
        );
        assert_eq!(
            CompletionStage::for_percent(74.9),
            CompletionStage::ThreeQuarters
        );
        assert_eq!(CompletionStage::for_percent(75.0), CompletionStage::Full);
        assert_eq!(CompletionStage::for_percent(100.0), CompletionStage::Full);
        assert_eq!(CompletionStage::for_percent(250.0), CompletionStage::Full);
    }

    #[test]
    fn negative_percent_selects_the_first_stage() {
        assert_eq!(
            CompletionStage::for_percent(-10.0),
            CompletionStage::Quarter
        );
    }

    #[test]
    fn non_finite_percent_selects_the_final_stage() {
        assert_eq!(CompletionStage::for_percent(f64::NAN), CompletionStage::Full);
        assert_eq!(
            CompletionStage::for_percent(f64::INFINITY),
            CompletionStage::Full
        );
    }

    #[test]
    fn compiles_four_growing_keyframes() {
        let def = compile("w 0 m 0 0 l 1 0 w 0.1 m 0 0.5 l 1 0.5");
        assert!((def.arc_length() - 2.0).abs() < 1e-6);
        for pair in def.keyframes().windows(2) {
            assert!(pair[1].commands().len() >= pair[0].commands().len());
        }
        // Full stage carries everything.
        assert_eq!(def.keyframe(CompletionStage::Full).commands().len(), 4);
        // Quarter stage cuts the first line in half.
        assert_eq!(
            def.keyframe(CompletionStage::Quarter).commands(),
            &[
                PathCommand::MoveTo(Point::ZERO),
                PathCommand::LineTo(Point::new(0.5, 0.0)),
            ]
        );
    }

    #[test]
    fn keyframe_kinds_are_prefixes_of_the_next_stage() {
        let def = compile(
            "w 0 m 0.3 0 c 0.0 0.0 0.0 1.0 0.3 1 c 0.6 1.0 0.6 0.0 0.3 0 z w 0.2 m 0.5 0.7 l 0.8 1.05",
        );
        for pair in def.keyframes().windows(2) {
            let earlier = pair[0].commands();
            let later = pair[1].commands();
            assert!(earlier.len() <= later.len());
            for (a, b) in earlier.iter().zip(later) {
                assert!(a.same_kind(b), "kind changed between stages: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn empty_glyph_compiles_to_empty_keyframes() {
        let def = compile("w 1");
        assert_eq!(def.arc_length(), 0.0);
        for kf in def.keyframes() {
            assert!(kf.commands().is_empty());
        }
    }

    #[test]
    fn compile_is_deterministic() {
        let script = "w 0 m 0.1 0 l 0.1 1 w 0.1 m 0 0.5 q 0.3 0.4 0.6 0.5";
        assert_eq!(compile(script), compile(script));
    }
}
