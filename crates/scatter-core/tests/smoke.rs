// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG from the bundled data.

use scatter_core::{data, ChartBuilder, ChartConfig, RenderOptions};

#[test]
fn render_smoke_png() {
    let cfg = ChartConfig::default();
    let points = data::bundled().expect("bundled data");
    let chart = ChartBuilder::new(cfg).expect("scales").build(&points);

    let opts = RenderOptions::for_config(&cfg);
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_after_pan_and_zoom() {
    let cfg = ChartConfig::default();
    let mut chart = ChartBuilder::new(cfg).unwrap().build(&data::bundled().unwrap());
    let opts = RenderOptions::for_config(&cfg);

    chart.controls.pan(-40.0, 25.0, &chart.camera, opts.size);
    chart.controls.wheel(-1.0, &mut chart.camera);
    for _ in 0..5 {
        chart.update();
        chart.render_to_rgba8(&opts).expect("frame renders");
    }
    assert!(chart.camera.zoom > 1.0);
}
