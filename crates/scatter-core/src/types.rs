// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (world extents, primitive sizes, vertices).

use nalgebra::Vector3;

/// A vertex in world units.
pub type Vertex = Vector3<f64>;

/// World width of the plot, in scene units.
pub const WIDTH: f64 = 100.0;

/// Upper bound of the X scale's domain.
pub const X_DOMAIN_MAX: f64 = 100.0;

/// Range of the Y scale, in scene units.
pub const Y_RANGE: [f64; 2] = [1.0, 300.0];

/// Base of the Y scale's logarithm.
pub const Y_LOG_BASE: f64 = 2.0;

/// Requested tick count for both axes.
pub const TICK_COUNT: usize = 100;

/// Length of a tick stroke, in scene units.
pub const TICK_HEIGHT: f64 = 1.0;

/// Radius of a data point disc.
pub const DISC_RADIUS: f64 = 0.5;

/// Segment count approximating a data point disc.
pub const DISC_SEGMENTS: usize = 100;

/// Space kept around the plot by the camera frustum.
pub const CAMERA_MARGIN: f64 = 2.0;

/// Z distance of the camera from the plot plane.
pub const CAMERA_DISTANCE: f64 = 10.0;

/// Offset applied to the Y axis after rotation so it clears the X baseline.
pub const Y_AXIS_OFFSET: [f64; 3] = [0.0, 1.0, 0.0];

/// Fallback viewport used when no real window is available (headless runs, tests).
pub const DEFAULT_VIEWPORT: (u32, u32) = (1600, 900);

/// Pixel size of a rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub const fn rgba_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}
