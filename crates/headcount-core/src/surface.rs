// File: crates/headcount-core/src/surface.rs
// Summary: Drawing surface contract and the SVG document writer.

use std::fmt::Write as _;

use crate::error::{ChartError, Result};
use crate::layout::{RectShape, TextShape};
use crate::theme::hex;

/// Sink for painted scenes. A surface holds at most one chart: `clear` drops
/// prior content, `begin` opens a frame of the given size translated by
/// `origin`, and `finish` seals it.
pub trait Surface {
    fn clear(&mut self);
    fn begin(&mut self, width: i32, height: i32, origin: (f32, f32), title: Option<&str>) -> Result<()>;
    fn draw_rect(&mut self, rect: &RectShape);
    fn draw_text(&mut self, text: &TextShape);
    fn finish(&mut self) -> Result<()>;
}

/// Builds a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    svg: String,
    open: bool,
}

impl SvgSurface {
    pub fn new() -> Self { Self::default() }

    /// The document so far; complete once `finish` has run.
    pub fn as_str(&self) -> &str { &self.svg }

    pub fn into_string(self) -> String { self.svg }

    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.svg.as_bytes())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.svg.clear();
        self.open = false;
    }

    fn begin(&mut self, width: i32, height: i32, origin: (f32, f32), title: Option<&str>) -> Result<()> {
        self.svg.clear();
        let _ = write!(
            self.svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        if let Some(title) = title {
            let _ = write!(self.svg, "<title>{}</title>", escape_xml(title));
        }
        let _ = write!(self.svg, "<g transform=\"translate({},{})\">", fmt_num(origin.0), fmt_num(origin.1));
        self.open = true;
        Ok(())
    }

    fn draw_rect(&mut self, r: &RectShape) {
        if !self.open { return; }
        let fill = r.fill.map(hex).unwrap_or_else(|| "none".to_string());
        let _ = write!(
            self.svg,
            "<rect class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"",
            r.class, r.rect.left, r.rect.top, r.rect.width, r.rect.height, fill
        );
        if let Some(stroke) = r.stroke {
            let _ = write!(self.svg, " stroke=\"{}\"", hex(stroke));
        }
        self.svg.push_str("/>");
    }

    fn draw_text(&mut self, t: &TextShape) {
        if !self.open { return; }
        let _ = write!(
            self.svg,
            "<text class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}px\" text-anchor=\"{}\" fill=\"{}\"",
            t.class, t.x, t.y, fmt_num(t.size), t.anchor.as_svg(), hex(t.color)
        );
        if t.bold {
            self.svg.push_str(" font-weight=\"bold\"");
        }
        if t.dy_em != 0.0 {
            let _ = write!(self.svg, " dy=\"{}em\"", t.dy_em);
        }
        let _ = write!(self.svg, ">{}</text>", escape_xml(&t.text));
    }

    fn finish(&mut self) -> Result<()> {
        if !self.open { return Err(ChartError::NotStarted); }
        self.svg.push_str("</g></svg>");
        self.open = false;
        Ok(())
    }
}

/// Integral values print without a fraction (`120`, not `120.00`).
fn fmt_num(v: f32) -> String {
    if v.fract() == 0.0 { format!("{}", v as i64) } else { format!("{:.2}", v) }
}

/// Escape markup and replace characters XML 1.0 cannot carry with U+FFFD.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if c.is_control() || c == '\u{fffe}' || c == '\u{ffff}' => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(ch),
        }
    }
    out
}
