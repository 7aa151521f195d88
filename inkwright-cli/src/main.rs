//! Inkwright CLI — render handwritten characters to SVG files.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;

use inkwright_glyphs::{CompletionStage, ScriptFont};
use inkwright_render::{DestRect, GlyphWriter};
use inkwright_svg::{document, RenderOptions, SvgSink};

#[derive(Parser)]
#[command(version, about = "Inkwright \u{2014} handwriting-reveal glyph renderer")]
struct Cli {
    /// Characters to render (one SVG file per character)
    text: Option<String>,

    /// Completion percentage of the reveal (0-100; values outside the
    /// range degrade to the nearest stage)
    #[arg(short, long, default_value_t = 100.0)]
    percent: f64,

    /// Rendered glyph height in pixels
    #[arg(long, default_value_t = 96.0)]
    size: f64,

    /// Output directory for SVG files
    #[arg(short, long, default_value = ".")]
    output: String,

    /// Render all four reveal stages per character (name.1.svg through
    /// name.4.svg) instead of a single percentage
    #[arg(long)]
    stages: bool,

    /// Override the stroke width (defaults to the font's recommendation
    /// for the chosen size)
    #[arg(long)]
    stroke_width: Option<f64>,

    /// List the characters the built-in font supports and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    let font = match ScriptFont::primer() {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error: cannot load the built-in font: {e}");
            process::exit(1);
        }
    };

    if cli.list {
        print_supported(&font);
        return;
    }

    let Some(ref text) = cli.text else {
        eprintln!("No characters specified (try --list to see what the font supports)");
        process::exit(1);
    };

    let opts = RenderOptions {
        margin: cli.size / 12.0,
        stroke_width: cli
            .stroke_width
            .unwrap_or_else(|| font.recommended_stroke_width(cli.size)),
        ..RenderOptions::default()
    };
    let missing = font.missing_glyph();
    let mut writer = GlyphWriter::new(font);

    for ch in text.chars() {
        // Substitute the font's missing-glyph character for unsupported
        // input; skip entirely if even that is undefined.
        let ch = if writer.lookup_glyph(ch).is_some() {
            ch
        } else {
            match missing.filter(|m| writer.lookup_glyph(*m).is_some()) {
                Some(m) => {
                    eprintln!("Warning: no glyph for {ch:?}, substituting {m:?}");
                    m
                }
                None => {
                    eprintln!("Warning: no glyph for {ch:?}, skipping");
                    continue;
                }
            }
        };
        render_character(&mut writer, ch, &cli, &opts);
    }
}

fn render_character(writer: &mut GlyphWriter<ScriptFont>, ch: char, cli: &Cli, opts: &RenderOptions) {
    let Some(glyph) = writer.lookup_glyph(ch) else {
        return;
    };
    let rect = match DestRect::new(0.0, 0.0, glyph.advance() * cli.size, cli.size) {
        Ok(rect) => rect,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if cli.stages {
        for stage in CompletionStage::ALL {
            let mut sink = SvgSink::new(opts.precision);
            let percent = stage.fraction() * 100.0;
            // Render just below the threshold so each file shows its
            // own stage (100.0 itself still lands on the final stage).
            writer.render_glyph_stroke(ch, &rect, percent - 0.5, &mut sink);
            let svg = document(&sink, &rect, opts).to_string();
            let filename = format!("{}.{}.svg", file_stem(ch), stage.index() + 1);
            write_svg(&cli.output, &filename, &svg);
        }
    } else {
        let mut sink = SvgSink::new(opts.precision);
        writer.render_glyph_stroke(ch, &rect, cli.percent, &mut sink);
        let svg = document(&sink, &rect, opts).to_string();
        let filename = format!("{}.svg", file_stem(ch));
        write_svg(&cli.output, &filename, &svg);
    }
}

fn print_supported(font: &ScriptFont) {
    let chars = font.chars();
    println!(
        "{} supports {} glyphs:",
        font.name(),
        font.glyph_count()
    );
    for ch in chars {
        if ch == ' ' {
            println!("U+0020 (space)");
        } else {
            println!("{ch}");
        }
    }
}

/// A filesystem-safe file stem for a character.
///
/// ASCII letters and digits name their own file; everything else (and
/// lowercase letters, which would collide with capitals on
/// case-insensitive filesystems) uses the code point.
fn file_stem(ch: char) -> String {
    if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
        ch.to_string()
    } else {
        format!("U+{:04X}", u32::from(ch))
    }
}

fn write_svg(output_dir: &str, filename: &str, content: &str) {
    let path = Path::new(output_dir).join(filename);
    match fs::write(&path, content) {
        Ok(()) => {
            eprintln!("Wrote {}", path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", path.display());
        }
    }
}
