//! ASCII STL.
//!
//! Only `facet normal`, `vertex` and `endfacet` lines carry data. Other lines
//! (`solid`, `outer loop`, `endloop`, `endsolid`, ...) are skipped and the
//! nesting is not checked.

use cgmath::Vector3;
use log::trace;

use crate::{data::RawTriangle, stl::transform::z_up_to_y_up, Error, Result};

/// Facet being read.
#[derive(Default, Debug)]
struct PendingFacet {
    /// Normal, if a `facet normal` line was seen.
    normal: Option<Vector3<f32>>,
    /// Vertices read so far.
    vertices: Vec<Vector3<f32>>,
}

impl PendingFacet {
    /// Seals the facet.
    fn seal(self, line: usize) -> Result<RawTriangle> {
        let normal = self.normal.ok_or_else(|| Error::MalformedFacet {
            line,
            reason: "`endfacet` without a preceding `facet normal`".into(),
        })?;
        match *self.vertices.as_slice() {
            [v0, v1, v2] => Ok(RawTriangle::new(normal, [v0, v1, v2])),
            ref vertices => Err(Error::MalformedFacet {
                line,
                reason: format!("expected 3 vertices, got {}", vertices.len()),
            }),
        }
    }
}

/// Parses the triangles of an ASCII STL file.
pub fn parse(text: &str) -> Result<Vec<RawTriangle>> {
    let mut triangles = Vec::new();
    let mut pending = PendingFacet::default();

    for (index, line) in text.lines().enumerate() {
        let line_num = index + 1;
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("facet normal") {
            let normal = parse_vec3(rest, line_num)?
                .ok_or(Error::MalformedNormalLine { line: line_num })?;
            pending = PendingFacet {
                normal: Some(z_up_to_y_up(normal)),
                vertices: Vec::with_capacity(3),
            };
        } else if let Some(rest) = line.strip_prefix("vertex") {
            let vertex = parse_vec3(rest, line_num)?
                .ok_or(Error::MalformedVertexLine { line: line_num })?;
            pending.vertices.push(z_up_to_y_up(vertex));
        } else if line.starts_with("endfacet") {
            let facet = std::mem::take(&mut pending);
            triangles.push(facet.seal(line_num)?);
        }
    }
    if !pending.vertices.is_empty() || pending.normal.is_some() {
        trace!("Discarding a facet without `endfacet`: {:?}", pending);
    }

    Ok(triangles)
}

/// Parses the first 3 whitespace separated numbers.
///
/// Returns `Ok(None)` if there are less than 3 tokens.
fn parse_vec3(s: &str, line: usize) -> Result<Option<Vector3<f32>>> {
    let mut tokens = s.split_whitespace();
    let mut next = || -> Result<Option<f32>> {
        tokens
            .next()
            .map(|token| {
                token.parse::<f32>().map_err(|_| Error::MalformedNumber {
                    line,
                    token: token.to_owned(),
                })
            })
            .transpose()
    };

    match (next()?, next()?, next()?) {
        (Some(x), Some(y), Some(z)) => Ok(Some(Vector3::new(x, y, z))),
        _ => Ok(None),
    }
}
