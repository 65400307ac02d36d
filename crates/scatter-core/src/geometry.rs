// File: crates/scatter-core/src/geometry.rs
// Summary: Filled disc primitive used for data points.

use std::f64::consts::TAU;

use nalgebra::Vector3;

use crate::types::Vertex;

/// A flat circle in the XY plane, approximated by `segments` wedges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscGeometry {
    pub center: Vertex,
    pub radius: f64,
    pub segments: usize,
}

impl DiscGeometry {
    /// Disc centred on the origin. At least three segments are kept.
    pub fn new(radius: f64, segments: usize) -> Self {
        Self { center: Vector3::zeros(), radius, segments: segments.max(3) }
    }

    pub fn translate(mut self, dx: f64, dy: f64, dz: f64) -> Self {
        self.center += Vector3::new(dx, dy, dz);
        self
    }

    /// Rim vertices in counter-clockwise order; the first is repeated at the end.
    pub fn outline(&self) -> Vec<Vertex> {
        let n = self.segments;
        (0..=n)
            .map(|i| {
                let theta = TAU * (i % n) as f64 / n as f64;
                self.center + Vector3::new(self.radius * theta.cos(), self.radius * theta.sin(), 0.0)
            })
            .collect()
    }
}
