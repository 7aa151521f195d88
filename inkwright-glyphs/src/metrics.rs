//! Font metric types.

use crate::command::Scalar;

/// Vertical proportions of a script font, as fractions of the em height.
///
/// Multiply by the rendered glyph height to get device units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance from the top line down to the median (x-height) line.
    pub median: Scalar,
    /// Distance from the baseline down to the descender line.
    pub descent: Scalar,
    /// Recommended gap between the descender line and the next line's top.
    pub leading: Scalar,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            median: 0.6,
            descent: 0.3,
            leading: 0.1,
        }
    }
}
