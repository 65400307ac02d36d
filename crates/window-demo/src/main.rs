// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that renders the scatter scene every frame via RGBA blit (CPU) using winit + softbuffer.
// Usage: scatter-window-demo [theme]
// Controls: left drag pans, middle drag or wheel zooms; right drag (orbit) is disabled.

use anyhow::{anyhow, Context, Result};
use scatter_core::types::DEFAULT_VIEWPORT;
use scatter_core::{data, theme, Chart, ChartBuilder, ChartConfig, PointerButton, RenderOptions};
use std::num::NonZeroU32;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scatter_core=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "dark".to_string());

    let event_loop = EventLoop::new();

    // Viewport is read once; later monitor or window changes are not tracked.
    let (vw, vh) = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .map(|m| (m.size().width, m.size().height))
        .unwrap_or(DEFAULT_VIEWPORT);
    let config = ChartConfig::from_viewport(vw, vh);
    info!(viewport_width = vw, viewport_height = vh, height = config.height(), "viewport");

    let points = data::bundled().context("bundled point data is malformed")?;
    let mut chart = ChartBuilder::new(config).context("configuring scales")?.build(&points);

    let mut opts = RenderOptions::for_config(&config);
    opts.theme = theme::find(&theme_name);
    let size = opts.size;

    let window = WindowBuilder::new()
        .with_title("Scatter - log2 / linear")
        .with_inner_size(winit::dpi::PhysicalSize::new(size.width, size.height))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let (w, h) = (
        NonZeroU32::new(size.width).context("zero surface width")?,
        NonZeroU32::new(size.height).context("zero surface height")?,
    );
    surface.resize(w, h).map_err(|e| anyhow!("softbuffer resize: {e}"))?;

    let mut cursor = (0.0f64, 0.0f64);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x, position.y);
                    chart.controls.pointer_move(position.x, position.y, &mut chart.camera, size);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let Some(button) = pointer_button(button) else { return };
                    match state {
                        ElementState::Pressed => chart.controls.pointer_down(button, cursor.0, cursor.1),
                        ElementState::Released => chart.controls.pointer_up(),
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports scrolling up as positive; the controls expect the opposite
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -(y as f64),
                        MouseScrollDelta::PixelDelta(p) => -p.y,
                    };
                    chart.controls.wheel(dy, &mut chart.camera);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if chart.update() {
                    debug!(x = chart.camera.position.x, y = chart.camera.position.y, zoom = chart.camera.zoom, "camera moved");
                }
                if let Err(e) = present_frame(&chart, &opts, &mut surface) {
                    error!(error = %e, "frame failed");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            _ => {}
        }
    });
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Other(_) => None,
    }
}

/// Render one frame and copy it into the window's buffer as 0RGB pixels.
fn present_frame(chart: &Chart, opts: &RenderOptions, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, _, _, _) = chart.render_to_rgba8(opts)?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
