// File: crates/raster-render/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG (requires `png` feature).
#![cfg(feature = "png")]

use raster_core::{Coordinator, Mode, Segment};
use raster_render::{LineChart, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut c = Coordinator::new(LineChart::new());
    c.calculate(&Segment::new(0.0, 0.0, 8.0, 3.0).unwrap(), Mode::Dda).expect("dda");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    c.presenter().render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = c.presenter().render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_chart_still_renders() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = LineChart::new().render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
}
