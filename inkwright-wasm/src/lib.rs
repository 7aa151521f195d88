use inkwright_glyphs::ScriptFont;
use inkwright_render::{DestRect, GlyphWriter};
use inkwright_svg::{document, RenderOptions, SvgSink};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct RenderOutput {
    svg: String,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl RenderOutput {
    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Render one character at a completion percentage, returning a
/// standalone SVG string sized to the given pixel height.
#[wasm_bindgen]
pub fn render_glyph(text: &str, percent: f64, size: f64) -> RenderOutput {
    render_first_char(text, percent, size)
}

fn render_first_char(text: &str, percent: f64, size: f64) -> RenderOutput {
    let Some(ch) = text.chars().next() else {
        return failure("no character given");
    };
    if !size.is_finite() || size <= 0.0 {
        return failure(&format!("size must be positive and finite, got {size}"));
    }

    let font = match ScriptFont::primer() {
        Ok(font) => font,
        Err(e) => return failure(&format!("cannot load the built-in font: {e}")),
    };
    let opts = RenderOptions {
        margin: size / 12.0,
        stroke_width: font.recommended_stroke_width(size),
        ..RenderOptions::default()
    };

    let mut writer = GlyphWriter::new(font);
    let Some(glyph) = writer.lookup_glyph(ch) else {
        return failure(&format!("no glyph for {ch:?}"));
    };
    let rect = match DestRect::new(0.0, 0.0, glyph.advance() * size, size) {
        Ok(rect) => rect,
        Err(e) => return failure(&format!("{e}")),
    };

    let mut sink = SvgSink::new(opts.precision);
    writer.render_glyph_stroke(ch, &rect, percent, &mut sink);

    RenderOutput {
        svg: document(&sink, &rect, &opts).to_string(),
        diagnostics: String::new(),
        has_error: false,
    }
}

fn failure(message: &str) -> RenderOutput {
    RenderOutput {
        svg: String::new(),
        diagnostics: message.to_owned(),
        has_error: true,
    }
}

#[cfg(test)]
mod tests {
    use super::render_first_char;

    #[test]
    fn renders_a_capital_to_svg() {
        let output = render_first_char("A", 100.0, 96.0);
        assert!(
            !output.has_error,
            "unexpected diagnostics: {}",
            output.diagnostics
        );
        assert!(output.svg.contains("<svg"), "missing SVG root");
        assert!(output.svg.contains("<path"), "missing rendered path");
    }

    #[test]
    fn partial_reveal_renders_less_than_full() {
        let quarter = render_first_char("W", 10.0, 96.0);
        let full = render_first_char("W", 100.0, 96.0);
        assert!(!quarter.has_error && !full.has_error);
        assert!(
            quarter.svg.len() < full.svg.len(),
            "a quarter reveal should carry less path data"
        );
    }

    #[test]
    fn reports_unsupported_characters() {
        let output = render_first_char("\u{7}", 50.0, 96.0);
        assert!(output.has_error, "expected an error");
        assert!(
            output.diagnostics.contains("no glyph"),
            "unexpected diagnostics: {}",
            output.diagnostics
        );
    }

    #[test]
    fn reports_empty_input() {
        let output = render_first_char("", 50.0, 96.0);
        assert!(output.has_error, "expected an error");
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(render_first_char("A", 50.0, 0.0).has_error);
        assert!(render_first_char("A", 50.0, f64::NAN).has_error);
    }
}
