// File: crates/demo/src/main.rs
// Summary: Headless demo: builds the scatter scene from bundled (or CSV) points and writes one PNG per theme.
// Usage: scatter-demo [points.csv|-] [out.png]

use anyhow::{Context, Result};
use scatter_core::types::DEFAULT_VIEWPORT;
use scatter_core::{data, theme, ChartBuilder, ChartConfig, DataPoint, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scatter_core=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/scatter.png"));

    let points = load_points(input.as_deref())?;
    info!(points = points.len(), source = input.as_deref().unwrap_or("bundled"), "loaded points");

    // No window here, so the viewport is a fixed stand-in.
    let config = ChartConfig::from_viewport(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1);
    let builder = ChartBuilder::new(config).context("configuring scales")?;
    let chart = builder.build(&points);

    let x_ticks = builder.x_axis_geometry().len() / 3;
    let y_ticks = builder.y_axis_geometry().len() / 3;
    info!(x_ticks, y_ticks, height = config.height(), "axes");

    for t in theme::presets() {
        let mut opts = RenderOptions::for_config(&config);
        opts.theme = t;
        let path = out_name_with(&out, t.name);
        chart
            .render_to_png(&opts, &path)
            .with_context(|| format!("rendering {}", path.display()))?;
        info!(path = %path.display(), theme = t.name, "wrote png");
    }
    Ok(())
}

fn load_points(input: Option<&str>) -> Result<Vec<DataPoint>> {
    match input {
        Some(path) => data::load_csv(path).with_context(|| format!("failed to load CSV '{path}'")),
        None => data::bundled().context("bundled point data is malformed"),
    }
}

/// `target/out/scatter.png` + "light" -> `target/out/scatter_light.png`
fn out_name_with(base: &Path, suffix: &str) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("scatter");
    let ext = base.extension().and_then(|s| s.to_str()).unwrap_or("png");
    base.with_file_name(format!("{stem}_{suffix}.{ext}"))
}
