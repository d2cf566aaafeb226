//! Mesh data.

pub use self::{
    document::MeshDocument,
    material::Material,
    mesh::{IndexedMesh, RawTriangle},
};

mod document;
mod material;
mod mesh;
