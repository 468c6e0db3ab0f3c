// File: crates/headcount-core/src/raster.rs
// Summary: Skia CPU raster surface; paints scenes and encodes PNG / RGBA8.

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::layout::{RectShape, TextShape};
use crate::surface::Surface;
use crate::text::TextShaper;

pub struct RasterSurface {
    surface: Option<skia::Surface>,
    size: (i32, i32),
    background: skia::Color,
    shaper: TextShaper,
}

impl RasterSurface {
    pub fn new(background: skia::Color) -> Self {
        Self { surface: None, size: (0, 0), background, shaper: TextShaper::new() }
    }

    fn ensure(&mut self, width: i32, height: i32) -> Result<&mut skia::Surface> {
        if self.surface.is_none() || self.size != (width, height) {
            let surface = skia::surfaces::raster_n32_premul((width, height))
                .ok_or(ChartError::Surface { width, height })?;
            self.surface = Some(surface);
            self.size = (width, height);
        }
        self.surface.as_mut().ok_or(ChartError::NotStarted)
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let surface = self.surface.as_mut().ok_or(ChartError::NotStarted)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.size;
        let surface = self.surface.as_mut().ok_or(ChartError::NotStarted)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::Encode("RGBA8"));
        }
        Ok((px, w, h, stride))
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        let bg = self.background;
        if let Some(surface) = self.surface.as_mut() {
            let canvas = surface.canvas();
            canvas.reset_matrix();
            canvas.clear(bg);
        }
    }

    fn begin(&mut self, width: i32, height: i32, origin: (f32, f32), _title: Option<&str>) -> Result<()> {
        let bg = self.background;
        let surface = self.ensure(width, height)?;
        let canvas = surface.canvas();
        canvas.reset_matrix();
        canvas.clear(bg);
        canvas.translate(origin);
        Ok(())
    }

    fn draw_rect(&mut self, r: &RectShape) {
        let Some(surface) = self.surface.as_mut() else { return };
        let canvas = surface.canvas();
        let rect = skia::Rect::from_xywh(r.rect.left, r.rect.top, r.rect.width, r.rect.height);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        if let Some(fill) = r.fill {
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(fill);
            canvas.draw_rect(rect, &paint);
        }
        if let Some(stroke) = r.stroke {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(1.0);
            paint.set_color(stroke);
            canvas.draw_rect(rect, &paint);
        }
    }

    fn draw_text(&mut self, t: &TextShape) {
        let Some(surface) = self.surface.as_mut() else { return };
        let canvas = surface.canvas();
        let y = t.y + t.dy_em * t.size;
        self.shaper.draw_anchored(canvas, &t.text, t.x, y, t.anchor, t.size, t.color, t.bold);
    }

    fn finish(&mut self) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(ChartError::NotStarted)?;
        surface.canvas().reset_matrix();
        Ok(())
    }
}
