//! Keyframe replay onto a sink.

use inkwright_glyphs::{CompletionStage, GlyphDefinition, PathCommand, Scalar};
use kurbo::Point;

use crate::rect::DestRect;
use crate::sink::DrawSink;

/// Affine mapping from glyph space into a destination rectangle.
///
/// Width is scaled relative to the glyph's advance, since advance
/// widths vary per character; height is scaled directly, since glyph y
/// space is already normalized to a unit-height body. There is no
/// rotation or shear — glyphs are written upright into their frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxTransform {
    sx: Scalar,
    sy: Scalar,
    tx: Scalar,
    ty: Scalar,
}

impl BoxTransform {
    /// The transform that writes `glyph` into `rect`.
    #[must_use]
    pub fn new(glyph: &GlyphDefinition, rect: &DestRect) -> Self {
        Self {
            sx: rect.width() / glyph.advance(),
            sy: rect.height(),
            tx: rect.x(),
            ty: rect.y(),
        }
    }

    /// Map a glyph-space point into sink space.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.sx.mul_add(p.x, self.tx),
            self.sy.mul_add(p.y, self.ty),
        )
    }
}

/// Replay the keyframe matching `percent_complete` onto `sink`.
///
/// The completion percentage selects one of the four reveal stages
/// (see [`CompletionStage::for_percent`]); the stage's commands are
/// transformed through a [`BoxTransform`] and issued as one
/// `begin_path` … `stroke` bracket. The bracket is issued even when the
/// selected keyframe is empty — the space character draws nothing but
/// still begins and strokes an empty path.
///
/// Drawing is a pure function of the arguments: identical inputs replay
/// identical call sequences, and neither the glyph nor any hidden state
/// is mutated.
pub fn render(
    glyph: &GlyphDefinition,
    rect: &DestRect,
    percent_complete: Scalar,
    sink: &mut dyn DrawSink,
) {
    let stage = CompletionStage::for_percent(percent_complete);
    let transform = BoxTransform::new(glyph, rect);

    sink.begin_path();
    for command in glyph.keyframe(stage).commands() {
        match *command {
            PathCommand::MoveTo(p) => {
                let p = transform.apply(p);
                sink.move_to(p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let p = transform.apply(p);
                sink.line_to(p.x, p.y);
            }
            PathCommand::QuadTo(c, p) => {
                let c = transform.apply(c);
                let p = transform.apply(p);
                sink.quad_to(c.x, c.y, p.x, p.y);
            }
            PathCommand::CurveTo(c1, c2, p) => {
                let c1 = transform.apply(c1);
                let c2 = transform.apply(c2);
                let p = transform.apply(p);
                sink.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
            }
            PathCommand::Close => sink.close_path(),
        }
    }
    sink.stroke();
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use inkwright_glyphs::GlyphData;

    /// Sink that records every call it receives.
    #[derive(Debug, Default, PartialEq, Clone)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl DrawSink for RecordingSink {
        fn begin_path(&mut self) {
            self.calls.push("begin".to_owned());
        }
        fn move_to(&mut self, x: Scalar, y: Scalar) {
            self.calls.push(format!("move {x} {y}"));
        }
        fn line_to(&mut self, x: Scalar, y: Scalar) {
            self.calls.push(format!("line {x} {y}"));
        }
        fn quad_to(&mut self, cx: Scalar, cy: Scalar, x: Scalar, y: Scalar) {
            self.calls.push(format!("quad {cx} {cy} {x} {y}"));
        }
        fn curve_to(&mut self, c1x: Scalar, c1y: Scalar, c2x: Scalar, c2y: Scalar, x: Scalar, y: Scalar) {
            self.calls.push(format!("curve {c1x} {c1y} {c2x} {c2y} {x} {y}"));
        }
        fn close_path(&mut self) {
            self.calls.push("close".to_owned());
        }
        fn stroke(&mut self) {
            self.calls.push("stroke".to_owned());
        }
    }

    fn compile(advance: Scalar, script: &str) -> GlyphDefinition {
        GlyphDefinition::compile(&GlyphData::from_script(advance, script).expect("valid glyph"))
    }

    fn rect(x: Scalar, y: Scalar, w: Scalar, h: Scalar) -> DestRect {
        DestRect::new(x, y, w, h).expect("finite rect")
    }

    #[test]
    fn concrete_transform_case() {
        // rect {10, 20, 100x50} with advance 0.5: sx = 200, sy = 50, so
        // glyph point (0.25, 0.5) lands on (60, 45).
        let glyph = compile(0.5, "w 0 m 0.25 0.5 l 0.5 1");
        let mut sink = RecordingSink::default();
        render(&glyph, &rect(10.0, 20.0, 100.0, 50.0), 100.0, &mut sink);
        assert_eq!(sink.calls[0], "begin");
        assert_eq!(sink.calls[1], "move 60 45");
        assert_eq!(sink.calls.last().expect("calls"), "stroke");
    }

    #[test]
    fn replay_covers_every_command_kind() {
        let glyph = compile(
            1.0,
            "w 0 m 0 0 l 1 0 q 1 0.5 1 1 c 0.5 1 0.5 0 0 0 z",
        );
        let mut sink = RecordingSink::default();
        render(&glyph, &rect(0.0, 0.0, 1.0, 1.0), 100.0, &mut sink);
        let kinds: Vec<&str> = sink
            .calls
            .iter()
            .map(|c| c.split(' ').next().expect("kind"))
            .collect();
        assert_eq!(
            kinds,
            vec!["begin", "move", "line", "quad", "curve", "close", "stroke"]
        );
    }

    #[test]
    fn empty_keyframe_still_brackets() {
        let glyph = compile(0.5, "w 1");
        let mut sink = RecordingSink::default();
        render(&glyph, &rect(0.0, 0.0, 10.0, 10.0), 0.0, &mut sink);
        assert_eq!(sink.calls, vec!["begin", "stroke"]);
    }

    #[test]
    fn degenerate_rect_collapses_without_failing() {
        let glyph = compile(0.5, "w 0 m 0.1 0 l 0.1 1");
        let mut sink = RecordingSink::default();
        render(&glyph, &rect(5.0, 5.0, 0.0, 0.0), 100.0, &mut sink);
        assert_eq!(sink.calls, vec!["begin", "move 5 5", "line 5 5", "stroke"]);
    }

    #[test]
    fn same_bucket_same_calls() {
        let glyph = compile(0.8, "w 0 m 0 0 l 0.8 1 w 0.1 m 0 1 l 0.8 0");
        let r = rect(0.0, 0.0, 80.0, 100.0);
        for (p1, p2) in [(80.0, 99.0), (0.0, 24.9), (-40.0, 10.0), (100.0, 400.0)] {
            let mut a = RecordingSink::default();
            let mut b = RecordingSink::default();
            render(&glyph, &r, p1, &mut a);
            render(&glyph, &r, p2, &mut b);
            assert_eq!(a, b, "{p1} and {p2} share a bucket");
        }
    }

    #[test]
    fn buckets_differ_across_stages() {
        let glyph = compile(0.8, "w 0 m 0 0 l 0.8 1 w 0.1 m 0 1 l 0.8 0");
        let r = rect(0.0, 0.0, 80.0, 100.0);
        let mut quarter = RecordingSink::default();
        let mut full = RecordingSink::default();
        render(&glyph, &r, 10.0, &mut quarter);
        render(&glyph, &r, 90.0, &mut full);
        assert!(quarter.calls.len() < full.calls.len());
    }

    #[test]
    fn render_is_idempotent() {
        let glyph = compile(0.7, "w 0 m 0.62 0.1 c 0.12 -0.06 0.1 1.06 0.62 0.9");
        let r = rect(3.0, 4.0, 70.0, 100.0);
        let mut first = RecordingSink::default();
        render(&glyph, &r, 60.0, &mut first);
        let mut second = RecordingSink::default();
        render(&glyph, &r, 60.0, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn render_does_not_mutate_the_glyph() {
        let glyph = compile(0.7, "w 0 m 0.1 0 l 0.1 1");
        let before = glyph.clone();
        let mut sink = RecordingSink::default();
        render(&glyph, &rect(0.0, 0.0, 7.0, 10.0), 50.0, &mut sink);
        assert_eq!(glyph, before);
    }
}
