//! Mesh document.

use serde::Serialize;

use crate::data::{IndexedMesh, Material};

/// Output unit handed to the JSON serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshDocument {
    /// Material.
    pub material: Material,
    /// Positions.
    pub vertices: Vec<[f32; 3]>,
    /// Normals.
    pub normals: Vec<[f32; 3]>,
    /// Triangles.
    pub triangles: Vec<[u32; 3]>,
}

impl MeshDocument {
    /// Creates a new `MeshDocument`.
    pub fn new(material: Material, mesh: IndexedMesh) -> Self {
        Self {
            material,
            vertices: mesh.vertices,
            normals: mesh.normals,
            triangles: mesh.triangles,
        }
    }

    /// Serializes the document as the renderer expects it: a one-element
    /// array, pretty-printed with 2-space indentation.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut json = serde_json::to_vec_pretty(&[self])?;
        json.push(b'\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_layout() {
        let mesh = IndexedMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
            normals: vec![[0.0, 1.0, 0.0]; 3],
            triangles: vec![[0, 1, 2]],
        };
        let json = MeshDocument::new(Material::default(), mesh).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

        let doc = &value.as_array().unwrap()[0];
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(doc["material"]["n"], 11.0);
        assert_eq!(doc["material"]["diffuse"][0], 0.6);
        assert_eq!(doc["vertices"][2], serde_json::json!([0.0, 0.0, -1.0]));
        assert_eq!(doc["triangles"], serde_json::json!([[0, 1, 2]]));
        assert!(std::str::from_utf8(&json).unwrap().starts_with("[\n  {\n    \"material\""));
    }
}
