// File: crates/scatter-core/src/camera.rs
// Summary: Axis-aligned orthographic camera looking down -Z, with zoom and NDC/pixel projection.

use nalgebra::Vector3;

use crate::config::ChartConfig;
use crate::types::{SurfaceSize, Vertex, CAMERA_DISTANCE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicCamera {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
    /// Frustum shrink factor about its centre; 1 shows the frustum as configured.
    pub zoom: f64,
    pub position: Vertex,
}

impl OrthographicCamera {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> Self {
        Self { left, right, top, bottom, near, far, zoom: 1.0, position: Vector3::zeros() }
    }

    /// Frustum covering the plot with a margin, placed on +Z looking at the origin.
    pub fn for_chart(config: &ChartConfig) -> Self {
        let m = config.margin;
        let mut cam = Self::new(-m, config.width() - m, config.height() - m, -m, 1.0, 100.0);
        cam.position = Vector3::new(0.0, 0.0, CAMERA_DISTANCE);
        cam
    }

    /// Visible `(left, right, top, bottom)` in view space after applying zoom.
    pub fn view_bounds(&self) -> (f64, f64, f64, f64) {
        let dx = (self.right - self.left) / (2.0 * self.zoom);
        let dy = (self.top - self.bottom) / (2.0 * self.zoom);
        let cx = (self.right + self.left) / 2.0;
        let cy = (self.top + self.bottom) / 2.0;
        (cx - dx, cx + dx, cy + dy, cy - dy)
    }

    /// Normalised device coordinates of a world point, or `None` outside `[near, far]`.
    pub fn project(&self, world: &Vertex) -> Option<(f64, f64)> {
        let view = world - self.position;
        let depth = -view.z;
        if depth < self.near || depth > self.far { return None; }
        let (l, r, t, b) = self.view_bounds();
        let ndc_x = 2.0 * (view.x - l) / (r - l) - 1.0;
        let ndc_y = 2.0 * (view.y - b) / (t - b) - 1.0;
        Some((ndc_x, ndc_y))
    }

    /// Surface pixel for an NDC point; y grows downwards.
    #[inline]
    pub fn to_pixel(ndc: (f64, f64), size: SurfaceSize) -> (f32, f32) {
        let px = (ndc.0 + 1.0) * 0.5 * size.width as f64;
        let py = (1.0 - ndc.1) * 0.5 * size.height as f64;
        (px as f32, py as f32)
    }

    /// Project straight to pixels.
    pub fn project_to_pixel(&self, world: &Vertex, size: SurfaceSize) -> Option<(f32, f32)> {
        self.project(world).map(|ndc| Self::to_pixel(ndc, size))
    }
}
