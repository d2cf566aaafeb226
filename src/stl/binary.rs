//! Binary STL.

use cgmath::Vector3;
use log::trace;

use crate::{data::RawTriangle, stl::transform::z_up_to_y_up, Error, Result};

/// Offset of the triangle count.
const COUNT_OFFSET: usize = 80;
/// Offset of the first triangle record.
const RECORDS_OFFSET: usize = COUNT_OFFSET + 4;
/// Size of a triangle record: normal, 3 vertices, attribute byte count.
const RECORD_LEN: usize = 12 + 3 * 12 + 2;

/// Parses the triangles of a binary STL file.
///
/// The header and the attribute bytes are ignored.
pub fn parse(bytes: &[u8]) -> Result<Vec<RawTriangle>> {
    let count_bytes = bytes
        .get(COUNT_OFFSET..RECORDS_OFFSET)
        .ok_or_else(|| Error::TruncatedInput {
            triangles: 0,
            expected: RECORDS_OFFSET as u64,
            actual: bytes.len() as u64,
        })?;
    let count = u32::from_le_bytes([
        count_bytes[0],
        count_bytes[1],
        count_bytes[2],
        count_bytes[3],
    ]);
    trace!("Binary STL declares {} triangles", count);

    let expected = RECORDS_OFFSET as u64 + RECORD_LEN as u64 * u64::from(count);
    if (bytes.len() as u64) < expected {
        return Err(Error::TruncatedInput {
            triangles: count,
            expected,
            actual: bytes.len() as u64,
        });
    }

    let records = &bytes[RECORDS_OFFSET..];
    Ok(records
        .chunks_exact(RECORD_LEN)
        .take(count as usize)
        .map(read_triangle)
        .collect())
}

/// Reads a triangle record.
fn read_triangle(record: &[u8]) -> RawTriangle {
    let vec = |i: usize| z_up_to_y_up(read_vec3(&record[i * 12..(i + 1) * 12]));
    RawTriangle::new(vec(0), [vec(1), vec(2), vec(3)])
}

/// Reads 3 little endian `f32`s.
fn read_vec3(bytes: &[u8]) -> Vector3<f32> {
    let f = |i: usize| f32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
    Vector3::new(f(0), f(4), f(8))
}
