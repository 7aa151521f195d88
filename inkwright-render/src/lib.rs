//! Stroke replay for progressively-drawn glyphs.
//!
//! Bridges `inkwright-glyphs` data to any drawing surface: select the
//! keyframe for a completion percentage, map glyph coordinates into a
//! destination rectangle, and replay the commands onto a [`DrawSink`].
//!
//! Key design points:
//! - Replay is stateless and pure with respect to what it draws:
//!   identical inputs produce identical sink call sequences.
//! - Glyphs are only ever stroked. A `Close` in the data closes the
//!   subpath; nothing is filled.
//! - Unsupported characters are a silent no-op at the
//!   [`GlyphWriter`] level — not a single sink call is made for them.

pub mod error;
pub mod rect;
pub mod renderer;
pub mod sink;
pub mod writer;

pub use error::RenderError;
pub use rect::DestRect;
pub use renderer::{render, BoxTransform};
pub use sink::DrawSink;
pub use writer::GlyphWriter;
