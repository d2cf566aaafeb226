//! Mesh.

use cgmath::Vector3;

/// Triangle as read from an STL file, already in Y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTriangle {
    /// Face normal.
    pub normal: Vector3<f32>,
    /// Vertices, in winding order.
    pub vertices: [Vector3<f32>; 3],
}

impl RawTriangle {
    /// Creates a new `RawTriangle`.
    pub fn new(normal: Vector3<f32>, vertices: [Vector3<f32>; 3]) -> Self {
        Self { normal, vertices }
    }
}

/// Indexed mesh with deduplicated vertices.
///
/// `normals[i]` is the normal of the face which first referred to
/// `vertices[i]`, and every index in `triangles` is less than
/// `vertices.len()`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    /// Positions.
    pub(crate) vertices: Vec<[f32; 3]>,
    /// Normals.
    pub(crate) normals: Vec<[f32; 3]>,
    /// Triangles.
    pub(crate) triangles: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Returns the unique vertex positions.
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Returns the per-vertex normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Returns the index triples.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }
}
