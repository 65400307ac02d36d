// File: crates/scatter-core/src/axis.rs
// Summary: Axis orientations and tick-mark line geometry built from a scale's ticks.

use std::f64::consts::PI;

use nalgebra::{Rotation3, Vector3};

use crate::scale::Scale;
use crate::types::Vertex;

/// Where an axis sits relative to the plot; decides how its ticks are rotated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    Top,
    Right,
    Bottom,
    Left,
}

impl AxisOrientation {
    /// Rotation about the world origin applied to every tick vertex.
    pub fn rotation(self) -> Rotation3<f64> {
        match self {
            AxisOrientation::Top => Rotation3::from_axis_angle(&Vector3::x_axis(), PI / 2.0),
            AxisOrientation::Right => Rotation3::from_axis_angle(&Vector3::z_axis(), -PI * 3.0 / 2.0),
            AxisOrientation::Bottom => Rotation3::identity(),
            AxisOrientation::Left => Rotation3::from_axis_angle(&Vector3::z_axis(), PI / 2.0),
        }
    }

    /// Rotate one vertex into this orientation. Bottom is the unrotated layout.
    pub fn apply(self, v: Vertex) -> Vertex {
        match self {
            AxisOrientation::Bottom => v,
            _ => self.rotation() * v,
        }
    }
}

/// Inputs for one axis line.
pub struct AxisSpec<'a> {
    pub orientation: AxisOrientation,
    pub tick_count: usize,
    pub tick_height: f64,
    pub scale: &'a dyn Scale,
}

/// Vertices of an axis drawn as one polyline: per tick a base, tip, base stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisGeometry {
    vertices: Vec<Vertex>,
}

impl AxisGeometry {
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    pub fn len(&self) -> usize { self.vertices.len() }

    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Move every vertex by `(dx, dy, dz)`.
    pub fn translate(mut self, dx: f64, dy: f64, dz: f64) -> Self {
        let offset = Vector3::new(dx, dy, dz);
        for v in &mut self.vertices {
            *v += offset;
        }
        self
    }

    pub fn into_vertices(self) -> Vec<Vertex> { self.vertices }
}

/// Build the tick strokes for `spec`, already rotated into its orientation.
///
/// Ticks sit at z = 1. A count that yields no ticks gives an empty geometry.
pub fn create_axis_geometry(spec: &AxisSpec<'_>) -> AxisGeometry {
    let ticks = spec.scale.ticks(spec.tick_count);
    let mut vertices = Vec::with_capacity(ticks.len() * 3);
    for &value in &ticks {
        let base = Vector3::new(value, 0.0, 1.0);
        let tip = Vector3::new(value, spec.tick_height, 1.0);
        vertices.extend([base, tip, base].map(|v| spec.orientation.apply(v)));
    }
    tracing::debug!(orientation = ?spec.orientation, ticks = ticks.len(), "axis geometry built");
    AxisGeometry { vertices }
}
