//! STL.

use std::{io::Cursor, path::Path};

use log::{debug, info};

use crate::{data::RawTriangle, Error, Result};

pub use self::sniff::{detect_format, StlFormat};

pub mod ascii;
pub mod binary;
mod sniff;
pub mod transform;

/// Loads the triangles of an STL file.
pub fn load(path: impl AsRef<Path>) -> Result<(StlFormat, Vec<RawTriangle>)> {
    load_impl(path.as_ref())
}

/// Loads the triangles of an STL file.
fn load_impl(path: &Path) -> Result<(StlFormat, Vec<RawTriangle>)> {
    info!("Reading {}...", path.display());
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    parse(&bytes).map_err(|e| e.in_file(path))
}

/// Parses the triangles from the whole content of an STL file.
pub fn parse(bytes: &[u8]) -> Result<(StlFormat, Vec<RawTriangle>)> {
    // Reading from memory cannot fail.
    let format = detect_format(&mut Cursor::new(bytes)).unwrap_or(StlFormat::Binary);
    info!("Detected {} STL format", format);

    let triangles = match format {
        StlFormat::Binary => binary::parse(bytes)?,
        StlFormat::Ascii => {
            let text = std::str::from_utf8(bytes).map_err(|e| Error::InvalidEncoding {
                offset: e.valid_up_to(),
            })?;
            ascii::parse(text)?
        }
    };
    debug!("Parsed {} triangles: format={}", triangles.len(), format);
    info!("Found {} triangles", triangles.len());

    Ok((format, triangles))
}
