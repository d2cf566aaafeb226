//! STL to JSON conversion.

use std::{io::Write, path::Path};

use cgmath::Point3;
use log::{debug, info, trace};
use tempfile::NamedTempFile;

use crate::{
    data::{Material, MeshDocument, RawTriangle},
    indexer,
    stl::{self, StlFormat},
    util::BoundingBox3d,
    Error, Result,
};

/// Statistics of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Detected input format.
    pub format: StlFormat,
    /// Number of triangles.
    pub triangles: usize,
    /// Number of unique vertices.
    pub vertices: usize,
    /// Bounding box of the vertices, in Y-up coordinates.
    pub bounds: Option<BoundingBox3d<f32>>,
}

/// Converts the STL file into a JSON mesh file.
///
/// The document is written to a temporary file next to `output` and renamed
/// into place, so `output` is left untouched if any step fails.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    material: &Material,
) -> Result<Summary> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let (format, triangles) = stl::load(input)?;
    let (json, summary) = build(format, &triangles, material).map_err(|e| e.in_file(input))?;

    info!("Writing {}...", output.display());
    write_replacing(output, &json)?;

    info!("Conversion complete!");
    info!("Total vertices: {}", summary.vertices);
    info!("Total triangles: {}", summary.triangles);
    if let Some(bounds) = summary.bounds {
        info!("Bounds: {}", bounds);
    }
    info!("Coordinate system: WebGL (Y-up, right-handed)");

    Ok(summary)
}

/// Converts the content of an STL file into the JSON document.
pub fn convert_bytes(bytes: &[u8], material: &Material) -> Result<(Vec<u8>, Summary)> {
    let (format, triangles) = stl::parse(bytes)?;
    build(format, &triangles, material)
}

/// Indexes the triangles and serializes the document.
fn build(
    format: StlFormat,
    triangles: &[RawTriangle],
    material: &Material,
) -> Result<(Vec<u8>, Summary)> {
    info!("Converting from Blender (Z-up) to WebGL (Y-up) coordinate system...");

    let mesh = indexer::index(triangles)?;
    let summary = Summary {
        format,
        triangles: mesh.triangles().len(),
        vertices: mesh.vertices().len(),
        bounds: BoundingBox3d::from_points(mesh.vertices().iter().map(|&p| Point3::from(p))),
    };

    let json = MeshDocument::new(*material, mesh).to_json()?;
    debug!("Serialized the mesh document: {} bytes", json.len());

    Ok((json, summary))
}

/// Writes the whole content to a sibling temporary file, then renames it to
/// `path`.
fn write_replacing(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    trace!("Writing to temporary file {}", file.path().display());
    file.write_all(content)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| Error::io(file.path(), e))?;
    file.persist(path).map_err(|e| Error::io(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_scenario() {
        let text = b"solid t\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid t\n";
        let (json, summary) = convert_bytes(text, &Material::default()).unwrap();
        assert_eq!(summary.format, StlFormat::Ascii);
        assert_eq!(summary.triangles, 1);
        assert_eq!(summary.vertices, 3);

        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        let doc = &value[0];
        assert_eq!(
            doc["vertices"],
            serde_json::json!([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]])
        );
        assert_eq!(
            doc["normals"],
            serde_json::json!([[0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0]])
        );
        assert_eq!(doc["triangles"], serde_json::json!([[0, 1, 2]]));
    }

    #[test]
    fn bounds_are_in_y_up() {
        let text = b"solid t\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 2 0 0\nvertex 0 3 5\nendfacet\nendsolid t\n";
        let (_, summary) = convert_bytes(text, &Material::default()).unwrap();
        let bounds = summary.bounds.unwrap();
        assert_eq!(bounds.min(), Point3::new(0.0, 0.0, -3.0));
        assert_eq!(bounds.max(), Point3::new(2.0, 5.0, 0.0));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let (_, summary) = convert_bytes(b"solid e\nendsolid e\n", &Material::default()).unwrap();
        assert_eq!(summary.bounds, None);
        assert_eq!(summary.vertices, 0);
    }

    #[test]
    fn write_replacing_overwrites_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "a much longer previous content").unwrap();

        write_replacing(&path, b"[]\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"[]\n");
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_replacing_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(matches!(write_replacing(&path, b"[]"), Err(Error::Io { .. })));
        assert!(!path.exists());
    }
}
