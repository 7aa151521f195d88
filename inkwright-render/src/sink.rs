//! The drawing-surface contract.

use inkwright_glyphs::Scalar;

/// Receiver for transformed glyph drawing calls.
///
/// This is the full capability a glyph replay needs from a drawing
/// surface: path assembly plus a single stroke operation. Any 2D path
/// target can satisfy it — an SVG path builder, a canvas bridge, a
/// plotting backend, a test recorder.
///
/// Coordinates are in the sink's own space, already transformed; y
/// grows downward, matching the glyph data's top-to-baseline layout.
///
/// A replay always arrives as one `begin_path` … `stroke` bracket, with
/// zero or more path commands between them. `stroke` outlines the
/// assembled path; nothing is ever filled, even after a `close_path`.
pub trait DrawSink {
    /// Discard any assembled path and start a new one.
    fn begin_path(&mut self);
    /// Start a new subpath at the given point.
    fn move_to(&mut self, x: Scalar, y: Scalar);
    /// Draw a straight line to the given point.
    fn line_to(&mut self, x: Scalar, y: Scalar);
    /// Draw a quadratic Bezier curve to `(x, y)` with control `(cx, cy)`.
    fn quad_to(&mut self, cx: Scalar, cy: Scalar, x: Scalar, y: Scalar);
    /// Draw a cubic Bezier curve to `(x, y)` with controls
    /// `(c1x, c1y)` and `(c2x, c2y)`.
    fn curve_to(&mut self, c1x: Scalar, c1y: Scalar, c2x: Scalar, c2y: Scalar, x: Scalar, y: Scalar);
    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);
    /// Outline the assembled path.
    fn stroke(&mut self);
}
