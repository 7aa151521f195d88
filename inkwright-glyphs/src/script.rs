//! The stroke-script authoring format.
//!
//! Glyphs are authored as compact whitespace-separated instruction
//! strings. Every stroke opens with `w <beats>` — the pause taken before
//! the pen touches down — followed by path instructions:
//!
//! ```text
//! w 0 m 0.4 0 l 0.05 1 w 0.1 m 0.18 0.62 l 0.62 0.62
//! ```
//!
//! | instruction | arguments | meaning |
//! |---|---|---|
//! | `w` | beats | begin a stroke after a pause |
//! | `m` | x y | move the pen to a point |
//! | `l` | x y | line to a point |
//! | `q` | cx cy x y | quadratic curve to a point |
//! | `c` | c1x c1y c2x c2y x y | cubic curve to a point |
//! | `z` | — | close the current subpath |
//!
//! A stroke with no path instructions is a pure pause (the space
//! character is `w 1`). Parsing is strict: unknown instructions,
//! malformed or non-finite numbers, drawing before a `m`, and path
//! instructions outside any stroke are all fatal.

use kurbo::Point;

use crate::command::{PathCommand, Scalar};
use crate::data::PenStroke;
use crate::error::GlyphError;

/// Parse a stroke script into its pen strokes.
///
/// # Errors
///
/// Returns [`GlyphError::Script`] for malformed input, or
/// [`GlyphError::InvalidData`] if a parsed stroke violates a stroke
/// invariant (e.g. a negative pause).
pub fn parse_strokes(script: &str) -> Result<Vec<PenStroke>, GlyphError> {
    let mut tokens = script.split_whitespace();
    let mut strokes = Vec::new();
    // (pause, commands, pen is down) for the stroke being assembled.
    let mut current: Option<(Scalar, Vec<PathCommand>, bool)> = None;

    while let Some(tok) = tokens.next() {
        if tok == "w" {
            if let Some((pause, commands, _)) = current.take() {
                strokes.push(PenStroke::new(pause, commands)?);
            }
            current = Some((next_scalar(&mut tokens, "w")?, Vec::new(), false));
            continue;
        }

        let Some((_, commands, pen_down)) = current.as_mut() else {
            return Err(GlyphError::Script(format!(
                "`{tok}` appears before any `w` stroke header"
            )));
        };

        match tok {
            "m" => {
                commands.push(PathCommand::MoveTo(next_point(&mut tokens, "m")?));
                *pen_down = true;
            }
            "l" => {
                require_pen_down(*pen_down, "l")?;
                commands.push(PathCommand::LineTo(next_point(&mut tokens, "l")?));
            }
            "q" => {
                require_pen_down(*pen_down, "q")?;
                let c = next_point(&mut tokens, "q")?;
                let p = next_point(&mut tokens, "q")?;
                commands.push(PathCommand::QuadTo(c, p));
            }
            "c" => {
                require_pen_down(*pen_down, "c")?;
                let c1 = next_point(&mut tokens, "c")?;
                let c2 = next_point(&mut tokens, "c")?;
                let p = next_point(&mut tokens, "c")?;
                commands.push(PathCommand::CurveTo(c1, c2, p));
            }
            "z" => {
                require_pen_down(*pen_down, "z")?;
                commands.push(PathCommand::Close);
            }
            other => {
                return Err(GlyphError::Script(format!(
                    "unrecognized instruction: `{other}`"
                )));
            }
        }
    }

    if let Some((pause, commands, _)) = current.take() {
        strokes.push(PenStroke::new(pause, commands)?);
    }
    Ok(strokes)
}

/// Serialize pen strokes back into a stroke script.
///
/// Round-trips with [`parse_strokes`]: parsing the output reproduces the
/// input strokes.
#[must_use]
pub fn write_strokes(strokes: &[PenStroke]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for stroke in strokes {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "w {}", stroke.pause_beats());
        for cmd in stroke.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, " m {} {}", p.x, p.y);
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, " l {} {}", p.x, p.y);
                }
                PathCommand::QuadTo(c, p) => {
                    let _ = write!(out, " q {} {} {} {}", c.x, c.y, p.x, p.y);
                }
                PathCommand::CurveTo(c1, c2, p) => {
                    let _ = write!(out, " c {} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                }
                PathCommand::Close => out.push_str(" z"),
            }
        }
    }
    out
}

fn require_pen_down(pen_down: bool, instruction: &str) -> Result<(), GlyphError> {
    if pen_down {
        Ok(())
    } else {
        Err(GlyphError::Script(format!(
            "`{instruction}` before the stroke's first `m`"
        )))
    }
}

fn next_scalar<'a, I>(tokens: &mut I, instruction: &str) -> Result<Scalar, GlyphError>
where
    I: Iterator<Item = &'a str>,
{
    let tok = tokens.next().ok_or_else(|| {
        GlyphError::Script(format!("`{instruction}` is missing an argument"))
    })?;
    let value: Scalar = tok.parse().map_err(|_| {
        GlyphError::Script(format!("`{instruction}` has a malformed number: `{tok}`"))
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GlyphError::Script(format!(
            "`{instruction}` has a non-finite value: `{tok}`"
        )))
    }
}

fn next_point<'a, I>(tokens: &mut I, instruction: &str) -> Result<Point, GlyphError>
where
    I: Iterator<Item = &'a str>,
{
    let x = next_scalar(tokens, instruction)?;
    let y = next_scalar(tokens, instruction)?;
    Ok(Point::new(x, y))
}
