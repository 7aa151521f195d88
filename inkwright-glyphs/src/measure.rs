//! Arc-length measurement and truncation of command lists.
//!
//! Keyframe compilation needs two things from a command list: how far
//! the pen travels to draw it, and the list cut off after a given
//! travel allowance. Segment math is delegated to `kurbo` — each
//! drawable command becomes a [`PathSeg`] measured with
//! [`ParamCurveArclen`] and cut with [`ParamCurve::subsegment`], so a
//! partially-drawn segment keeps its command kind (a cut line is still
//! a line, a cut cubic still a cubic).

use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, PathSeg, Point, QuadBez};

use crate::command::{PathCommand, Scalar};

/// Accuracy for arc-length queries, in glyph units. Glyph bodies are
/// unit-height, so this is far below anything visible.
const ARCLEN_ACCURACY: Scalar = 1e-6;

/// Pen state while walking a command list: the current point and the
/// start of the current subpath (the target of a `Close`).
struct SegmentWalker {
    current: Point,
    subpath_start: Point,
}

impl SegmentWalker {
    const fn new() -> Self {
        Self {
            current: Point::ZERO,
            subpath_start: Point::ZERO,
        }
    }

    /// Advance over one command, returning the drawable segment it
    /// produces (`MoveTo` produces none).
    fn step(&mut self, cmd: &PathCommand) -> Option<PathSeg> {
        match *cmd {
            PathCommand::MoveTo(p) => {
                self.current = p;
                self.subpath_start = p;
                None
            }
            PathCommand::LineTo(p) => {
                let seg = PathSeg::Line(Line::new(self.current, p));
                self.current = p;
                Some(seg)
            }
            PathCommand::QuadTo(c, p) => {
                let seg = PathSeg::Quad(QuadBez::new(self.current, c, p));
                self.current = p;
                Some(seg)
            }
            PathCommand::CurveTo(c1, c2, p) => {
                let seg = PathSeg::Cubic(CubicBez::new(self.current, c1, c2, p));
                self.current = p;
                Some(seg)
            }
            PathCommand::Close => {
                let seg = PathSeg::Line(Line::new(self.current, self.subpath_start));
                self.current = self.subpath_start;
                Some(seg)
            }
        }
    }
}

/// Total pen travel to draw a command list, in glyph units.
///
/// `Close` contributes its implicit closing segment; `MoveTo` is a pen
/// lift and contributes nothing.
pub(crate) fn pen_travel(commands: &[PathCommand]) -> Scalar {
    let mut walker = SegmentWalker::new();
    commands
        .iter()
        .filter_map(|cmd| walker.step(cmd))
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum()
}

/// Cut a command list after `allowance` units of pen travel.
///
/// Whole segments within the allowance are emitted verbatim; the
/// segment crossing the boundary is subdivided by arc length and
/// emitted as a shortened command of the same kind. Two exceptions keep
/// the output a well-formed, kind-stable prefix of the input:
///
/// - a `MoveTo` is held back until some of the ink that follows it is
///   emitted (no trailing pen lifts);
/// - a `Close` is atomic — its closing segment is either fully within
///   the allowance or not emitted at all (a partial close would have to
///   change kind to a line).
pub(crate) fn truncate(commands: &[PathCommand], allowance: Scalar) -> Vec<PathCommand> {
    let mut remaining = allowance;
    let mut out = Vec::new();
    let mut pending_moves: Vec<PathCommand> = Vec::new();
    let mut walker = SegmentWalker::new();

    for cmd in commands {
        let Some(seg) = walker.step(cmd) else {
            pending_moves.push(*cmd);
            continue;
        };
        let len = seg.arclen(ARCLEN_ACCURACY);
        if len <= remaining {
            out.append(&mut pending_moves);
            out.push(*cmd);
            remaining -= len;
        } else {
            if remaining <= 0.0 || matches!(cmd, PathCommand::Close) {
                break;
            }
            out.append(&mut pending_moves);
            let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY);
            out.push(seg_to_command(seg.subsegment(0.0..t)));
            break;
        }
    }
    out
}

fn seg_to_command(seg: PathSeg) -> PathCommand {
    match seg {
        PathSeg::Line(l) => PathCommand::LineTo(l.p1),
        PathSeg::Quad(q) => PathCommand::QuadTo(q.p1, q.p2),
        PathSeg::Cubic(c) => PathCommand::CurveTo(c.p1, c.p2, c.p3),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const TOL: Scalar = 1e-4;

    fn line_path() -> Vec<PathCommand> {
        // Two strokes: a 1-unit vertical line and a 0.5-unit horizontal bar.
        vec![
            PathCommand::MoveTo(Point::new(0.1, 0.0)),
            PathCommand::LineTo(Point::new(0.1, 1.0)),
            PathCommand::MoveTo(Point::new(0.0, 0.5)),
            PathCommand::LineTo(Point::new(0.5, 0.5)),
        ]
    }

    #[test]
    fn travel_sums_segments_and_ignores_moves() {
        assert!((pen_travel(&line_path()) - 1.5).abs() < TOL);
        assert_eq!(pen_travel(&[]), 0.0);
        assert_eq!(pen_travel(&[PathCommand::MoveTo(Point::new(3.0, 4.0))]), 0.0);
    }

    #[test]
    fn travel_includes_closing_segment() {
        // Unit right triangle, closed: 1 + 1 + sqrt(2).
        let commands = vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
            PathCommand::Close,
        ];
        assert!((pen_travel(&commands) - (2.0 + std::f64::consts::SQRT_2)).abs() < TOL);
    }

    #[test]
    fn truncate_cuts_a_line_mid_segment() {
        let cut = truncate(&line_path(), 0.5);
        assert_eq!(
            cut,
            vec![
                PathCommand::MoveTo(Point::new(0.1, 0.0)),
                PathCommand::LineTo(Point::new(0.1, 0.5)),
            ]
        );
    }

    #[test]
    fn truncate_spans_strokes() {
        // 1.25 units: the whole first stroke plus half of the bar.
        let cut = truncate(&line_path(), 1.25);
        assert_eq!(cut.len(), 4);
        let PathCommand::LineTo(end) = cut[3] else {
            panic!("expected a line, got {:?}", cut[3]);
        };
        assert!((end.x - 0.25).abs() < TOL);
        assert_eq!(end.y, 0.5);
    }

    #[test]
    fn truncate_holds_back_trailing_move() {
        // Allowance exhausts exactly at the end of the first stroke: the
        // second stroke's MoveTo must not dangle at the tail.
        let cut = truncate(&line_path(), 1.0);
        assert_eq!(
            cut,
            vec![
                PathCommand::MoveTo(Point::new(0.1, 0.0)),
                PathCommand::LineTo(Point::new(0.1, 1.0)),
            ]
        );
    }

    #[test]
    fn truncate_keeps_segment_kinds() {
        let commands = vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::CurveTo(
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0),
            ),
        ];
        let total = pen_travel(&commands);
        let cut = truncate(&commands, total / 2.0);
        assert_eq!(cut.len(), 2);
        assert!(
            cut[1].same_kind(&commands[1]),
            "a cut cubic must stay a cubic: {:?}",
            cut[1]
        );
    }

    #[test]
    fn truncate_quad_keeps_kind() {
        let commands = vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::QuadTo(Point::new(0.5, 1.0), Point::new(1.0, 0.0)),
        ];
        let cut = truncate(&commands, pen_travel(&commands) * 0.4);
        assert_eq!(cut.len(), 2);
        assert!(matches!(cut[1], PathCommand::QuadTo(..)));
    }

    #[test]
    fn truncate_close_is_atomic() {
        let commands = vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
            PathCommand::Close,
        ];
        // Allowance reaches halfway into the closing segment: no partial
        // close may appear.
        let cut = truncate(&commands, 2.0 + std::f64::consts::SQRT_2 / 2.0);
        assert_eq!(cut.len(), 3);
        assert!(!cut.iter().any(|c| matches!(c, PathCommand::Close)));

        // The full allowance emits it.
        let full = truncate(&commands, 2.0 + std::f64::consts::SQRT_2 + TOL);
        assert_eq!(full.last(), Some(&PathCommand::Close));
    }

    #[test]
    fn truncate_zero_length_close_rides_along() {
        // A loop that ends where it started: the closing segment has
        // zero length and fits any allowance that reaches it.
        let commands = vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::LineTo(Point::new(1.0, 0.0)),
            PathCommand::LineTo(Point::ZERO),
            PathCommand::Close,
        ];
        let cut = truncate(&commands, 2.0);
        assert_eq!(cut.last(), Some(&PathCommand::Close));
    }

    #[test]
    fn truncate_with_zero_allowance_is_empty() {
        assert!(truncate(&line_path(), 0.0).is_empty());
    }

    #[test]
    fn truncate_with_excess_allowance_is_identity() {
        let commands = line_path();
        assert_eq!(truncate(&commands, 10.0), commands);
    }
}
