// File: crates/scatter-core/src/scene.rs
// Summary: Minimal scene graph: axis polylines and point discs in insertion order.

use crate::axis::AxisGeometry;
use crate::geometry::DiscGeometry;
use crate::types::Vertex;

/// Which theme colour a mesh is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    AxisLine,
    Point,
}

/// Vertices drawn as one connected polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct LineMesh {
    pub vertices: Vec<Vertex>,
    pub material: Material,
}

impl LineMesh {
    pub fn from_axis(geometry: AxisGeometry) -> Self {
        Self { vertices: geometry.into_vertices(), material: Material::AxisLine }
    }
}

/// A filled disc.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscMesh {
    pub geometry: DiscGeometry,
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mesh {
    Line(LineMesh),
    Disc(DiscMesh),
}

impl Mesh {
    pub fn material(&self) -> Material {
        match self {
            Mesh::Line(l) => l.material,
            Mesh::Disc(d) => d.material,
        }
    }
}

/// Ordered collection of meshes; built once and then only read.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Mesh] { &self.meshes }

    pub fn len(&self) -> usize { self.meshes.len() }

    pub fn is_empty(&self) -> bool { self.meshes.is_empty() }

    pub fn lines(&self) -> impl Iterator<Item = &LineMesh> {
        self.meshes.iter().filter_map(|m| match m { Mesh::Line(l) => Some(l), _ => None })
    }

    pub fn discs(&self) -> impl Iterator<Item = &DiscMesh> {
        self.meshes.iter().filter_map(|m| match m { Mesh::Disc(d) => Some(d), _ => None })
    }
}
