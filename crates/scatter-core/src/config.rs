// File: crates/scatter-core/src/config.rs
// Summary: Chart configuration: viewport dimensions read once at startup plus primitive sizes.

use crate::types::{
    SurfaceSize, CAMERA_MARGIN, DEFAULT_VIEWPORT, DISC_RADIUS, DISC_SEGMENTS, TICK_COUNT,
    TICK_HEIGHT, WIDTH,
};

/// How a data point's Y value is turned into a scene position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointMapping {
    /// Y goes through the *inverse* of the Y scale while X uses the forward mapping.
    /// This asymmetry is kept as the default but is most likely a defect.
    #[default]
    InvertY,
    /// Both coordinates use the forward mapping of their scale.
    ForwardY,
}

/// Everything the chart builder needs that used to be ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Viewport width in pixels, read once.
    pub viewport_width: u32,
    /// Viewport height in pixels, read once.
    pub viewport_height: u32,
    pub tick_count: usize,
    pub tick_height: f64,
    pub disc_radius: f64,
    pub disc_segments: usize,
    /// Space left around the plot by the camera frustum.
    pub margin: f64,
    pub point_mapping: PointMapping,
}

impl ChartConfig {
    pub fn from_viewport(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width: viewport_width.max(1),
            viewport_height: viewport_height.max(1),
            tick_count: TICK_COUNT,
            tick_height: TICK_HEIGHT,
            disc_radius: DISC_RADIUS,
            disc_segments: DISC_SEGMENTS,
            margin: CAMERA_MARGIN,
            point_mapping: PointMapping::default(),
        }
    }

    /// Viewport height over width.
    pub fn ratio(&self) -> f64 {
        self.viewport_height as f64 / self.viewport_width as f64
    }

    /// World width of the plot.
    pub fn width(&self) -> f64 { WIDTH }

    /// World height of the plot, `ratio * 100`.
    pub fn height(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Rendering surface size: half the viewport in each dimension.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new((self.viewport_width / 2).max(1), (self.viewport_height / 2).max(1))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::from_viewport(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1)
    }
}
