//! SVG output for glyph strokes.
//!
//! [`SvgSink`] implements [`DrawSink`] by assembling raw SVG path data;
//! [`document`] wraps the collected paths in a standalone SVG
//! [`Document`] with handwriting-appropriate stroke attributes.
//!
//! Key design points:
//! - Glyph space is already y-down like SVG, so coordinates pass
//!   through untouched — no flip, no global transform.
//! - Path data is built as raw `d` strings to preserve `f64` precision
//!   (the `svg` crate's `Data` builder uses `f32`).
//! - Every `stroke()` call finishes one `<path>`; a glyph written in
//!   several passes accumulates several paths in the same sink.

use inkwright_glyphs::Scalar;
use inkwright_render::{DestRect, DrawSink};
use svg::node::element::Path as SvgPath;
use svg::Document;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options controlling SVG output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Extra margin around the destination rectangle, in sink units.
    /// Also gives descender tails and accents room. Default: 8.0.
    pub margin: Scalar,
    /// Number of decimal places for coordinates. Default: 2.
    pub precision: usize,
    /// Stroke width in sink units. Pick
    /// `ScriptFont::recommended_stroke_width(height)` for good
    /// proportions. Default: 8.0.
    pub stroke_width: Scalar,
    /// Stroke color. Default: `"black"`.
    pub stroke_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 8.0,
            precision: 2,
            stroke_width: 8.0,
            stroke_color: "black".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// The sink
// ---------------------------------------------------------------------------

/// A [`DrawSink`] that assembles SVG path data strings.
///
/// Between `begin_path` and `stroke`, commands append to an in-progress
/// `d` string; `stroke` finishes it. Stroking an empty path finishes
/// nothing, matching how an empty path is invisible on any surface.
#[derive(Debug, Clone, Default)]
pub struct SvgSink {
    precision: usize,
    current: String,
    paths: Vec<String>,
}

impl SvgSink {
    /// Create a sink emitting coordinates at the given precision.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            current: String::new(),
            paths: Vec::new(),
        }
    }

    /// The finished path data strings, one per non-empty stroke.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Consume the sink, returning its finished path data strings.
    #[must_use]
    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }

    fn push_point(&mut self, x: Scalar, y: Scalar) {
        write_point(&mut self.current, x, y, self.precision);
    }
}

impl DrawSink for SvgSink {
    fn begin_path(&mut self) {
        self.current.clear();
    }

    fn move_to(&mut self, x: Scalar, y: Scalar) {
        self.current.push('M');
        self.push_point(x, y);
    }

    fn line_to(&mut self, x: Scalar, y: Scalar) {
        self.current.push('L');
        self.push_point(x, y);
    }

    fn quad_to(&mut self, cx: Scalar, cy: Scalar, x: Scalar, y: Scalar) {
        self.current.push('Q');
        self.push_point(cx, cy);
        self.current.push(' ');
        self.push_point(x, y);
    }

    fn curve_to(&mut self, c1x: Scalar, c1y: Scalar, c2x: Scalar, c2y: Scalar, x: Scalar, y: Scalar) {
        self.current.push('C');
        self.push_point(c1x, c1y);
        self.current.push(' ');
        self.push_point(c2x, c2y);
        self.current.push(' ');
        self.push_point(x, y);
    }

    fn close_path(&mut self) {
        self.current.push('Z');
    }

    fn stroke(&mut self) {
        if !self.current.is_empty() {
            self.paths.push(std::mem::take(&mut self.current));
        }
    }
}

// ---------------------------------------------------------------------------
// Document assembly
// ---------------------------------------------------------------------------

/// Wrap a sink's finished paths in a standalone SVG [`Document`].
///
/// The `viewBox` spans the destination rectangle plus the margin; width
/// and height match it, in pixels. Paths are stroked with round caps
/// and joins and never filled.
#[must_use]
pub fn document(sink: &SvgSink, rect: &DestRect, opts: &RenderOptions) -> Document {
    let m = opts.margin;
    let vb_w = 2.0f64.mul_add(m, rect.width());
    let vb_h = 2.0f64.mul_add(m, rect.height());

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_scalar(rect.x() - m, opts.precision),
                fmt_scalar(rect.y() - m, opts.precision),
                fmt_scalar(vb_w, opts.precision),
                fmt_scalar(vb_h, opts.precision),
            ),
        )
        .set("width", fmt_scalar(vb_w, opts.precision))
        .set("height", fmt_scalar(vb_h, opts.precision));

    for d in sink.paths() {
        doc = doc.add(stroked_path(d, opts));
    }
    doc
}

/// Build one stroked `<path>` element from path data.
fn stroked_path(d: &str, opts: &RenderOptions) -> SvgPath {
    SvgPath::new()
        .set("d", d)
        .set("fill", "none")
        .set("stroke", opts.stroke_color.as_str())
        .set("stroke-width", fmt_scalar(opts.stroke_width, opts.precision))
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Write "x,y" to the string with the given precision.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, x: Scalar, y: Scalar, precision: usize) {
    use std::fmt::Write;
    let x = if x == 0.0 { 0.0 } else { x };
    let y = if y == 0.0 { 0.0 } else { y };
    let _ = write!(d, "{x:.precision$},{y:.precision$}");
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
