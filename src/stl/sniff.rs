//! Binary / ASCII detection.

use std::{
    fmt,
    io::{self, Read, Seek, SeekFrom},
};

/// Size of the binary STL header.
const HEADER_LEN: u64 = 80;
/// Number of leading bytes checked for the `solid` keyword.
const LEADING_TEXT_LEN: u64 = 100;

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlFormat {
    /// Fixed size little endian records.
    Binary,
    /// Keyword based text.
    Ascii,
}

impl fmt::Display for StlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StlFormat::Binary => f.write_str("binary"),
            StlFormat::Ascii => f.write_str("ASCII"),
        }
    }
}

/// Detects whether the STL data is binary or ASCII.
///
/// A binary header which is ASCII text starting with `solid` is reported as
/// [`StlFormat::Ascii`].
pub fn detect_format<R: Read + Seek>(reader: &mut R) -> io::Result<StlFormat> {
    let header = read_prefix(reader, HEADER_LEN)?;
    if !header.is_ascii() {
        return Ok(StlFormat::Binary);
    }
    if !header.to_ascii_lowercase().windows(5).any(|w| w == b"solid") {
        return Ok(StlFormat::Binary);
    }

    // The word may appear anywhere in a binary header, so the file must
    // actually start with it.
    let starts_with_solid = reader
        .seek(SeekFrom::Start(0))
        .and_then(|_| read_prefix(reader, LEADING_TEXT_LEN))
        .ok()
        .filter(|leading| leading.is_ascii())
        .map_or(false, |leading| {
            String::from_utf8_lossy(&leading).trim().starts_with("solid")
        });

    Ok(if starts_with_solid {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    })
}

/// Reads at most `len` bytes.
fn read_prefix<R: Read>(reader: &mut R, len: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len as usize);
    reader.take(len).read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn detect(bytes: &[u8]) -> StlFormat {
        detect_format(&mut Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn ascii_solid() {
        assert_eq!(detect(b"solid cube\n  facet normal 0 0 1\n"), StlFormat::Ascii);
    }

    #[test]
    fn ascii_with_leading_whitespace() {
        assert_eq!(detect(b"\n   solid cube\nendsolid cube\n"), StlFormat::Ascii);
    }

    #[test]
    fn non_text_header_is_binary() {
        let mut bytes = vec![0x80u8, 0x01, 0xfe];
        bytes.resize(80, 0xaa);
        bytes.extend_from_slice(&12u32.to_le_bytes());
        assert_eq!(detect(&bytes), StlFormat::Binary);
    }

    #[test]
    fn text_header_without_solid_is_binary() {
        let mut bytes = b"Exported by some tool".to_vec();
        bytes.resize(80, b' ');
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(detect(&bytes), StlFormat::Binary);
    }

    #[test]
    fn solid_inside_header_is_binary() {
        let mut bytes = b"binary export of SOLID body".to_vec();
        bytes.resize(80, 0);
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(detect(&bytes), StlFormat::Binary);
    }

    #[test]
    fn non_ascii_after_header_is_binary() {
        let mut bytes = b"solid".to_vec();
        bytes.resize(80, b' ');
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x80]);
        bytes.resize(120, 0);
        assert_eq!(detect(&bytes), StlFormat::Binary);
    }

    #[test]
    fn short_input() {
        assert_eq!(detect(b""), StlFormat::Binary);
        assert_eq!(detect(b"solid"), StlFormat::Ascii);
    }
}
