//! Normalized glyph path commands.
//!
//! A glyph is authored in its own coordinate space: x spans
//! `[0, advance]` and y spans the nominal body `[0, 1]`, measured
//! downward from the top line to the baseline. Flourishes may step
//! outside the body — ascender marks sit above it (y < 0) and
//! descender tails below it (y > 1).

use kurbo::Point;

/// Coordinate scalar. Glyph space and sink space both use `f64`.
pub type Scalar = f64;

/// One drawing instruction in glyph space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and start a new subpath at the given point.
    MoveTo(Point),
    /// Draw a straight line to the given point.
    LineTo(Point),
    /// Draw a quadratic Bezier curve; the second point is the
    /// destination.
    QuadTo(Point, Point),
    /// Draw a cubic Bezier curve; the third point is the destination.
    CurveTo(Point, Point, Point),
    /// Close the current subpath back to its starting point.
    Close,
}

impl PathCommand {
    /// The point the pen rests on after this command, if the command
    /// carries one (`Close` returns the pen to the subpath start, which
    /// the command itself does not know).
    #[must_use]
    pub const fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo(_, p) | Self::CurveTo(_, _, p) => {
                Some(p)
            }
            Self::Close => None,
        }
    }

    /// Whether two commands are the same kind of instruction,
    /// regardless of their coordinates.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Whether every coordinate in this command is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points().iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// All control and destination points of this command, in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => vec![p],
            Self::QuadTo(c, p) => vec![c, p],
            Self::CurveTo(c1, c2, p) => vec![c1, c2, p],
            Self::Close => Vec::new(),
        }
    }
}
