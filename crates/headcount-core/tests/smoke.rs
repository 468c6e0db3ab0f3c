// File: crates/headcount-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG and an SVG.

use headcount_core::{HeadcountChart, InputRecord, RenderOptions};

fn chart() -> HeadcountChart {
    HeadcountChart::from_records(&[
        InputRecord::new("L1", "existing"),
        InputRecord::new("L1", "existing"),
        InputRecord::new("L1", "new_hire"),
        InputRecord::new("L2", "existing"),
        InputRecord::new("L2", "leaver"),
        InputRecord::new("L3", "new_hire"),
    ])
}

#[test]
fn render_smoke_png() {
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart().render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart().render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (960, 500));
}

#[test]
fn render_smoke_svg_file() {
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart().render_to_svg_file(&RenderOptions::default(), &out).expect("render svg");
    let text = std::fs::read_to_string(&out).expect("read svg");
    assert!(text.starts_with("<svg"));
    assert!(text.ends_with("</svg>"));
    assert_eq!(text.matches("class=\"category-label\"").count(), 3);
}
