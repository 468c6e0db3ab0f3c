// File: crates/headcount-core/src/chart.rs
// Summary: HeadcountChart and the render pipeline (aggregate -> layout -> paint) onto SVG/PNG surfaces.

use crate::aggregate::{aggregate, CategorySummary, InputRecord};
use crate::error::Result;
use crate::layout::{layout, RenderOptions, Scene};
use crate::raster::RasterSurface;
use crate::surface::{Surface, SvgSurface};

/// Replace whatever `surface` shows with the chart for `summaries`.
/// With no summaries the surface is only cleared.
pub fn render(summaries: &[CategorySummary], opts: &RenderOptions, surface: &mut dyn Surface) -> Result<Scene> {
    surface.clear();
    let scene = layout(summaries, opts);
    if scene.is_blank() {
        return Ok(scene);
    }
    scene.paint(surface)?;
    log::info!("rendered {} job levels ({} shapes)", summaries.len(), scene.shapes.len());
    Ok(scene)
}

#[derive(Clone, Debug, Default)]
pub struct HeadcountChart {
    pub summaries: Vec<CategorySummary>,
}

impl HeadcountChart {
    pub fn new() -> Self { Self::default() }

    pub fn from_records(records: &[InputRecord]) -> Self {
        Self { summaries: aggregate(records) }
    }

    pub fn render(&self, opts: &RenderOptions, surface: &mut dyn Surface) -> Result<Scene> {
        render(&self.summaries, opts, surface)
    }

    /// Render to an SVG document string.
    pub fn render_to_svg(&self, opts: &RenderOptions) -> Result<String> {
        let mut svg = SvgSurface::new();
        self.render(opts, &mut svg)?;
        Ok(svg.into_string())
    }

    /// Render to an SVG file at `path`, creating parent directories.
    pub fn render_to_svg_file(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let mut svg = SvgSurface::new();
        self.render(opts, &mut svg)?;
        svg.write_to(path)
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut raster = self.rasterize(opts)?;
        raster.png_bytes()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let mut raster = self.rasterize(opts)?;
        raster.write_png(output_png_path)
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut raster = self.rasterize(opts)?;
        raster.rgba8()
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<RasterSurface> {
        let mut raster = RasterSurface::new(opts.theme.background);
        // paint even an empty chart so the raster has the requested size
        let scene = self.render(opts, &mut raster)?;
        if scene.is_blank() {
            scene.paint(&mut raster)?;
        }
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeadcountChart {
        HeadcountChart::from_records(&[
            InputRecord::new("L1", "existing"),
            InputRecord::new("L1", "new_hire"),
            InputRecord::new("L2", "leaver"),
        ])
    }

    #[test]
    fn svg_contains_all_passes() {
        let svg = sample().render_to_svg(&RenderOptions::default()).unwrap();
        assert_eq!(svg.matches("class=\"new-hires-bar\"").count(), 2);
        assert_eq!(svg.matches("class=\"headcount-bar\"").count(), 2);
        assert_eq!(svg.matches("class=\"leavers-bar\"").count(), 2);
        assert_eq!(svg.matches("class=\"category-rect\"").count(), 2);
        assert_eq!(svg.matches(">33.3%<").count(), 3);
        assert!(svg.contains(">Headcount</text>"));
    }

    #[test]
    fn rendering_twice_replaces_content() {
        let chart = sample();
        let opts = RenderOptions::default();
        let mut svg = SvgSurface::new();
        let a = chart.render(&opts, &mut svg).unwrap();
        let first = svg.as_str().to_string();
        let b = chart.render(&opts, &mut svg).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, svg.as_str());
        assert_eq!(svg.as_str().matches("<svg").count(), 1);
    }

    #[test]
    fn empty_chart_clears_surface() {
        let opts = RenderOptions::default();
        let mut svg = SvgSurface::new();
        sample().render(&opts, &mut svg).unwrap();
        let scene = HeadcountChart::new().render(&opts, &mut svg).unwrap();
        assert!(scene.is_blank());
        assert!(svg.as_str().is_empty());
    }

    #[test]
    fn title_lands_in_document() {
        let mut opts = RenderOptions::default();
        opts.title = Some("Employee Data".into());
        let svg = sample().render_to_svg(&opts).unwrap();
        assert!(svg.contains("<title>Employee Data</title>"));
    }
}
