// File: crates/headcount-core/src/layout.rs
// Summary: Proportional butterfly layout; turns summaries into a backend-neutral Scene.
// Notes:
// - X is a proportion of the global total mapped onto the plot width. New hires
//   grow from the left edge, headcount is centred, leavers grow from the right.
// - Shapes are in plot-local coordinates; `Scene::origin` carries the margin
//   translation so backends can apply it once.

use skia_safe as skia;

use crate::aggregate::{layout_total, CategorySummary};
use crate::error::Result;
use crate::geometry::RectF;
use crate::scale::{BandScale, LinearScale};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{Insets, BAND_PADDING, GUTTER_GAP, GUTTER_WIDTH, HEIGHT, WIDTH};

const VALUE_FONT_PX: f32 = 12.0;
const HEADER_FONT_PX: f32 = 18.0;
const GUTTER_FONT_PX: f32 = 14.0;
const HEADER_BASELINE: f32 = -15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// The three value bands drawn per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    NewHires,
    Headcount,
    Leavers,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::NewHires, Segment::Headcount, Segment::Leavers];

    pub fn count(&self, s: &CategorySummary) -> u64 {
        match self {
            Segment::NewHires => s.new_hires,
            Segment::Headcount => s.headcount,
            Segment::Leavers => s.leavers,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Segment::NewHires => "New Hires",
            Segment::Headcount => "Headcount",
            Segment::Leavers => "Leavers",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            Segment::NewHires => "new-hires-bar",
            Segment::Headcount => "headcount-bar",
            Segment::Leavers => "leavers-bar",
        }
    }

    pub fn label_class(&self) -> &'static str {
        match self {
            Segment::NewHires => "new-hires-label",
            Segment::Headcount => "headcount-label",
            Segment::Leavers => "leavers-label",
        }
    }

    fn color(&self, theme: &Theme) -> skia::Color {
        match self {
            Segment::NewHires => theme.new_hires,
            Segment::Headcount => theme.headcount,
            Segment::Leavers => theme.leavers,
        }
    }

    /// `(start, width)` in the unit domain for a proportion `p` of the total.
    pub fn extent(&self, p: f64) -> (f64, f64) {
        match self {
            Segment::NewHires => (0.0, p),
            Segment::Headcount => (0.5 - p / 2.0, p),
            Segment::Leavers => (1.0 - p, p),
        }
    }
}

/// Where the column headers sit horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderPlacement {
    /// Fixed column titles: start of the plot, centre, end.
    #[default]
    Columns,
    /// Positions derived from the first row's proportions, matching the
    /// legacy dashboard. Misaligns when rows differ.
    FirstRow,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub headers: HeaderPlacement,
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            headers: HeaderPlacement::default(),
            title: None,
        }
    }
}

impl RenderOptions {
    pub fn plot_width(&self) -> f64 {
        (self.width as f64 - self.insets.hsum() as f64).max(1.0)
    }
    pub fn plot_height(&self) -> f64 {
        (self.height as f64 - self.insets.vsum() as f64).max(1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    pub rect: RectF,
    pub fill: Option<skia::Color>,
    pub stroke: Option<skia::Color>,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub anchor: Anchor,
    /// Baseline shift in ems (SVG `dy`).
    pub dy_em: f32,
    pub color: skia::Color,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Text(TextShape),
}

/// Everything one render draws, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub origin: (f32, f32),
    pub title: Option<String>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn empty(opts: &RenderOptions) -> Self {
        Self {
            width: opts.width,
            height: opts.height,
            origin: (opts.insets.left as f32, opts.insets.top as f32),
            title: opts.title.clone(),
            shapes: Vec::new(),
        }
    }

    /// Single status line, used before the first data arrives.
    pub fn placeholder(message: &str, opts: &RenderOptions) -> Self {
        let mut scene = Self::empty(opts);
        scene.origin = (0.0, 0.0);
        scene.shapes.push(Shape::Text(TextShape {
            x: 16.0,
            y: 40.0,
            text: message.to_string(),
            size: 24.0,
            bold: true,
            anchor: Anchor::Start,
            dy_em: 0.0,
            color: opts.theme.header,
            class: "placeholder",
        }));
        scene
    }

    pub fn is_blank(&self) -> bool { self.shapes.is_empty() }

    pub fn rects(&self) -> impl Iterator<Item = &RectShape> {
        self.shapes.iter().filter_map(|s| match s { Shape::Rect(r) => Some(r), _ => None })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextShape> {
        self.shapes.iter().filter_map(|s| match s { Shape::Text(t) => Some(t), _ => None })
    }

    pub fn rects_of(&self, class: &'static str) -> Vec<&RectShape> {
        self.rects().filter(|r| r.class == class).collect()
    }

    pub fn texts_of(&self, class: &'static str) -> Vec<&TextShape> {
        self.texts().filter(|t| t.class == class).collect()
    }

    /// Paint every shape onto `surface`, bracketed by begin/finish.
    pub fn paint(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.begin(self.width, self.height, self.origin, self.title.as_deref())?;
        for shape in &self.shapes {
            match shape {
                Shape::Rect(r) => surface.draw_rect(r),
                Shape::Text(t) => surface.draw_text(t),
            }
        }
        surface.finish()
    }
}

/// Percentage text with one decimal, e.g. `33.3%`.
pub fn percent_label(count: u64, total: u64) -> String {
    format!("{:.1}%", proportion(count, total) * 100.0)
}

/// `count / total`, defined as 0 when the total is 0.
pub fn proportion(count: u64, total: u64) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 }
}

/// Lay out one chart. The total is computed once and shared by every pass.
pub fn layout(summaries: &[CategorySummary], opts: &RenderOptions) -> Scene {
    let mut scene = Scene::empty(opts);
    if summaries.is_empty() {
        return scene;
    }

    let total = layout_total(summaries);
    let x = LinearScale::unit(opts.plot_width());
    let y = BandScale::new(summaries.len(), (opts.plot_height(), 0.0), BAND_PADDING);
    let bands: Vec<f64> = (0..summaries.len()).filter_map(|i| y.band_start(i)).collect();
    let bw = y.bandwidth();

    if total == 0 {
        log::warn!("all {} job levels have zero counts; drawing gutters and headers only", summaries.len());
    } else {
        draw_bars(&mut scene, summaries, &bands, bw, &x, total, &opts.theme);
        draw_value_labels(&mut scene, summaries, &bands, bw, &x, total, &opts.theme);
    }
    draw_gutters(&mut scene, summaries, &bands, bw, &opts.theme);
    draw_headers(&mut scene, summaries, &x, total, opts);
    scene
}

fn draw_bars(scene: &mut Scene, data: &[CategorySummary], bands: &[f64], bw: f64, x: &LinearScale, total: u64, theme: &Theme) {
    for seg in Segment::ALL {
        for (d, &top) in data.iter().zip(bands) {
            let (start, width) = seg.extent(proportion(seg.count(d), total));
            scene.shapes.push(Shape::Rect(RectShape {
                rect: RectF::from_xywh(x.map(start) as f32, top as f32, x.span(width) as f32, (bw / 2.0) as f32),
                fill: Some(seg.color(theme)),
                stroke: None,
                class: seg.bar_class(),
            }));
        }
    }
}

fn draw_value_labels(scene: &mut Scene, data: &[CategorySummary], bands: &[f64], bw: f64, x: &LinearScale, total: u64, theme: &Theme) {
    for seg in Segment::ALL {
        for (d, &top) in data.iter().zip(bands) {
            let count = seg.count(d);
            let (start, width) = seg.extent(proportion(count, total));
            scene.shapes.push(Shape::Text(TextShape {
                x: (x.map(start) + x.span(width) / 2.0) as f32,
                y: (top + bw / 4.0) as f32,
                text: percent_label(count, total),
                size: VALUE_FONT_PX,
                bold: false,
                anchor: Anchor::Middle,
                dy_em: 0.0,
                color: theme.value_label,
                class: seg.label_class(),
            }));
        }
    }
}

fn draw_gutters(scene: &mut Scene, data: &[CategorySummary], bands: &[f64], bw: f64, theme: &Theme) {
    for &top in bands {
        scene.shapes.push(Shape::Rect(RectShape {
            rect: RectF::from_xywh(-GUTTER_WIDTH + GUTTER_GAP, top as f32, GUTTER_WIDTH - 2.0 * GUTTER_GAP, (bw / 2.0) as f32),
            fill: None,
            stroke: Some(theme.gutter_stroke),
            class: "category-rect",
        }));
    }
    for (d, &top) in data.iter().zip(bands) {
        scene.shapes.push(Shape::Text(TextShape {
            x: -GUTTER_WIDTH / 2.0,
            y: (top + bw / 4.0) as f32,
            text: d.job_level.clone(),
            size: GUTTER_FONT_PX,
            bold: false,
            anchor: Anchor::Middle,
            dy_em: 0.35,
            color: theme.gutter_label,
            class: "category-label",
        }));
    }
}

fn draw_headers(scene: &mut Scene, data: &[CategorySummary], x: &LinearScale, total: u64, opts: &RenderOptions) {
    let placed: [(Segment, f64, Anchor); 3] = match opts.headers {
        HeaderPlacement::Columns => [
            (Segment::NewHires, x.map(0.0), Anchor::Start),
            (Segment::Headcount, x.map(0.5), Anchor::Middle),
            (Segment::Leavers, x.map(1.0), Anchor::End),
        ],
        HeaderPlacement::FirstRow => {
            let first = &data[0];
            let hc = proportion(first.headcount, total);
            let lv = proportion(first.leavers, total);
            [
                (Segment::NewHires, x.map(0.0) + x.span(0.0) / 2.0, Anchor::Middle),
                (Segment::Headcount, x.map(0.5 - hc / 2.0) + x.span(hc) / 2.0, Anchor::Middle),
                (Segment::Leavers, x.map(1.0 - lv) + x.span(0.0) / 2.0, Anchor::Middle),
            ]
        }
    };
    for (seg, px, anchor) in placed {
        scene.shapes.push(Shape::Text(TextShape {
            x: px as f32,
            y: HEADER_BASELINE,
            text: seg.title().to_string(),
            size: HEADER_FONT_PX,
            bold: true,
            anchor,
            dy_em: 0.0,
            color: opts.theme.header,
            class: "category-header",
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, InputRecord};

    fn summary(level: &str, headcount: u64, new_hires: u64, leavers: u64) -> CategorySummary {
        CategorySummary { job_level: level.into(), headcount, new_hires, leavers, other: 0 }
    }

    fn label_texts(scene: &Scene, seg: Segment) -> Vec<String> {
        scene.texts_of(seg.label_class()).into_iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn percent_label_formatting() {
        assert_eq!(percent_label(1, 3), "33.3%");
        assert_eq!(percent_label(2, 3), "66.7%");
        assert_eq!(percent_label(0, 3), "0.0%");
        assert_eq!(percent_label(5, 5), "100.0%");
        assert_eq!(percent_label(1, 0), "0.0%");
    }

    #[test]
    fn reference_example_labels() {
        let data = aggregate(&[
            InputRecord::new("L1", "existing"),
            InputRecord::new("L1", "new_hire"),
            InputRecord::new("L2", "leaver"),
        ]);
        let scene = layout(&data, &RenderOptions::default());
        assert_eq!(label_texts(&scene, Segment::Headcount), ["33.3%", "0.0%"]);
        assert_eq!(label_texts(&scene, Segment::NewHires), ["33.3%", "0.0%"]);
        assert_eq!(label_texts(&scene, Segment::Leavers), ["0.0%", "33.3%"]);
    }

    #[test]
    fn segments_are_anchored_left_centre_right() {
        let opts = RenderOptions::default();
        let w = opts.plot_width() as f32;
        let data = vec![summary("L1", 4, 2, 2)];
        let scene = layout(&data, &opts);

        let nh = scene.rects_of("new-hires-bar")[0].rect;
        let hc = scene.rects_of("headcount-bar")[0].rect;
        let lv = scene.rects_of("leavers-bar")[0].rect;

        assert!(nh.left.abs() < 1e-3);
        assert!((nh.width - w * 0.25).abs() < 1e-3);
        assert!((hc.center_x() - w * 0.5).abs() < 1e-3);
        assert!((hc.width - w * 0.5).abs() < 1e-3);
        assert!((lv.right() - w).abs() < 1e-3);
        assert!((lv.width - w * 0.25).abs() < 1e-3);

        // a single row summing to the total tiles the plot without overlap
        assert!(!nh.overlaps_x(&hc));
        assert!(!hc.overlaps_x(&lv));
    }

    #[test]
    fn bars_occupy_top_half_of_band() {
        let opts = RenderOptions::default();
        let y = BandScale::new(2, (opts.plot_height(), 0.0), BAND_PADDING);
        let scene = layout(&[summary("A", 1, 1, 1), summary("B", 1, 1, 1)], &opts);
        for seg in Segment::ALL {
            let bars = scene.rects_of(seg.bar_class());
            assert_eq!(bars.len(), 2);
            for (i, bar) in bars.iter().enumerate() {
                let top = y.band_start(i).unwrap() as f32;
                assert!((bar.rect.top - top).abs() < 1e-3);
                assert!((bar.rect.height - (y.bandwidth() / 2.0) as f32).abs() < 1e-3);
            }
        }
        // first summary sits in the lower band
        let a = scene.rects_of("category-rect")[0].rect.top;
        let b = scene.rects_of("category-rect")[1].rect.top;
        assert!(a > b);
    }

    #[test]
    fn value_labels_sit_at_segment_midpoints() {
        let opts = RenderOptions::default();
        let scene = layout(&[summary("L1", 3, 1, 2)], &opts);
        for seg in Segment::ALL {
            let bar = scene.rects_of(seg.bar_class())[0].rect;
            let label = scene.texts_of(seg.label_class())[0];
            assert!((label.x - bar.center_x()).abs() < 1e-3);
            assert!((label.y - (bar.top + bar.height / 2.0)).abs() < 1e-3);
            assert_eq!(label.anchor, Anchor::Middle);
        }
    }

    #[test]
    fn row_proportions_sum_to_row_share() {
        let data = vec![summary("A", 5, 2, 1), summary("B", 3, 0, 4), summary("C", 0, 1, 0)];
        let total = layout_total(&data);
        for d in &data {
            let sum: f64 = Segment::ALL.iter().map(|s| proportion(s.count(d), total)).sum();
            assert!((sum - d.row_total() as f64 / total as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn labels_grow_with_counts() {
        let mut prev = -1.0f64;
        for hc in 0..20u64 {
            let data = vec![summary("A", hc, 3, 2), summary("B", 4, 1, 1)];
            let scene = layout(&data, &RenderOptions::default());
            let text = &scene.texts_of("headcount-label")[0].text;
            let value: f64 = text.trim_end_matches('%').parse().unwrap();
            assert!(value > prev, "{} should exceed {}", value, prev);
            prev = value;
        }
    }

    #[test]
    fn gutters_are_independent_of_values() {
        let scene = layout(&[summary("Senior", 9, 0, 0), summary("Junior", 0, 0, 1)], &RenderOptions::default());
        let rects = scene.rects_of("category-rect");
        assert_eq!(rects.len(), 2);
        for r in rects {
            assert_eq!(r.rect.left, -110.0);
            assert_eq!(r.rect.width, 100.0);
            assert!(r.fill.is_none());
            assert!(r.stroke.is_some());
        }
        let names: Vec<&str> = scene.texts_of("category-label").into_iter().map(|t| t.text.as_str()).collect();
        assert_eq!(names, ["Senior", "Junior"]);
        assert!(scene.texts_of("category-label").iter().all(|t| t.x == -60.0 && t.dy_em == 0.35));
    }

    #[test]
    fn column_headers_ignore_row_data() {
        let opts = RenderOptions::default();
        let a = layout(&[summary("A", 1, 1, 8)], &opts);
        let b = layout(&[summary("A", 8, 1, 1), summary("B", 2, 2, 2)], &opts);
        assert_eq!(a.texts_of("category-header"), b.texts_of("category-header"));
        let titles: Vec<&str> = a.texts_of("category-header").into_iter().map(|t| t.text.as_str()).collect();
        assert_eq!(titles, ["New Hires", "Headcount", "Leavers"]);
    }

    #[test]
    fn first_row_headers_follow_first_summary() {
        let mut opts = RenderOptions::default();
        opts.headers = HeaderPlacement::FirstRow;
        let w = opts.plot_width() as f32;
        let scene = layout(&[summary("A", 2, 1, 1), summary("B", 0, 0, 4)], &opts);
        let headers = scene.texts_of("category-header");
        assert_eq!(headers[0].x, 0.0);
        assert!((headers[1].x - w * 0.5).abs() < 1e-3);
        // leavers header at the left edge of row 0's leavers bar: 1 - 1/8
        assert!((headers[2].x - w * 0.875).abs() < 1e-3);
        assert!(headers.iter().all(|h| h.anchor == Anchor::Middle));
    }

    #[test]
    fn zero_total_draws_only_frame() {
        let data = aggregate(&[InputRecord::new("L1", "contractor"), InputRecord::new("L2", "intern")]);
        let scene = layout(&data, &RenderOptions::default());
        for seg in Segment::ALL {
            assert!(scene.rects_of(seg.bar_class()).is_empty());
            assert!(scene.texts_of(seg.label_class()).is_empty());
        }
        assert_eq!(scene.rects_of("category-rect").len(), 2);
        assert_eq!(scene.texts_of("category-header").len(), 3);
        assert!(scene.rects().all(|r| r.rect.left.is_finite() && r.rect.width.is_finite()));
        assert!(scene.texts().all(|t| t.x.is_finite() && t.y.is_finite()));
    }

    #[test]
    fn empty_summaries_give_blank_scene() {
        let scene = layout(&[], &RenderOptions::default());
        assert!(scene.is_blank());
    }

    #[test]
    fn layout_is_idempotent() {
        let data = vec![summary("A", 3, 1, 2), summary("B", 1, 4, 0)];
        let opts = RenderOptions::default();
        assert_eq!(layout(&data, &opts), layout(&data, &opts));
    }
}
