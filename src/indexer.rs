//! Vertex deduplication.

use std::{collections::HashMap, convert::TryFrom};

use cgmath::Vector3;
use log::debug;

use crate::{
    data::{IndexedMesh, RawTriangle},
    Error, Result,
};

/// `10^6`: vertices are compared at 6 decimal digits.
const KEY_SCALE: f64 = 1e6;

/// Vertex position rounded to 6 decimal digits.
///
/// Each component is scaled by `10^6` in `f64`, which is exact for any `f32`,
/// and rounded half to even. Two vertices are the same iff their keys are
/// equal, so coincident vertices on both sides of a rounding boundary stay
/// distinct. Infinities and huge values keep distinct keys, `-0.0` and `0.0`
/// share one, and a vertex with a NaN component has no key at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey([u64; 3]);

impl VertexKey {
    /// Creates the key of the given position, or `None` if it has a NaN
    /// component.
    pub fn new(v: Vector3<f32>) -> Option<Self> {
        if v.x.is_nan() || v.y.is_nan() || v.z.is_nan() {
            return None;
        }
        // Adding `0.0` turns `-0.0` into `0.0`.
        let round = |c: f32| ((f64::from(c) * KEY_SCALE).round_ties_even() + 0.0).to_bits();
        Some(VertexKey([round(v.x), round(v.y), round(v.z)]))
    }
}

/// Builds an [`IndexedMesh`] from triangles.
///
/// Indices are assigned in order of first appearance, and a vertex keeps the
/// normal of the first face referring to it. A vertex with a NaN component
/// never matches another one.
#[derive(Default, Debug, Clone)]
pub struct MeshIndexer {
    /// Index of each known vertex.
    indices: HashMap<VertexKey, u32>,
    /// Mesh being built.
    mesh: IndexedMesh,
}

impl MeshIndexer {
    /// Creates a new `MeshIndexer`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triangle, keeping its winding order.
    pub fn push(&mut self, triangle: &RawTriangle) -> Result<()> {
        let [v0, v1, v2] = triangle.vertices;
        let indices = [
            self.vertex_index(v0, triangle.normal)?,
            self.vertex_index(v1, triangle.normal)?,
            self.vertex_index(v2, triangle.normal)?,
        ];
        self.mesh.triangles.push(indices);
        Ok(())
    }

    /// Returns the index of the vertex, inserting it if it is new.
    fn vertex_index(&mut self, vertex: Vector3<f32>, normal: Vector3<f32>) -> Result<u32> {
        let key = match VertexKey::new(vertex) {
            Some(key) => key,
            None => return self.insert(vertex, normal),
        };
        if let Some(&index) = self.indices.get(&key) {
            return Ok(index);
        }
        let index = self.insert(vertex, normal)?;
        self.indices.insert(key, index);
        Ok(index)
    }

    /// Appends a new vertex.
    fn insert(&mut self, vertex: Vector3<f32>, normal: Vector3<f32>) -> Result<u32> {
        let index = next_index(self.mesh.vertices.len())?;
        self.mesh.vertices.push(vertex.into());
        self.mesh.normals.push(normal.into());
        Ok(index)
    }

    /// Returns the built mesh.
    pub fn finish(self) -> IndexedMesh {
        debug!(
            "Indexed mesh: vertices={}, triangles={}",
            self.mesh.vertices.len(),
            self.mesh.triangles.len()
        );
        self.mesh
    }
}

/// Returns the index the next vertex gets.
fn next_index(num_vertices: usize) -> Result<u32> {
    u32::try_from(num_vertices).map_err(|_| Error::TooManyVertices {
        limit: u64::from(u32::MAX) + 1,
    })
}

/// Deduplicates the vertices of the triangles.
pub fn index(triangles: &[RawTriangle]) -> Result<IndexedMesh> {
    let mut indexer = MeshIndexer::new();
    for tri in triangles {
        indexer.push(tri)?;
    }
    Ok(indexer.finish())
}
