//! Errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type of the conversion.
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion error.
#[derive(Debug, Error)]
pub enum Error {
    /// File could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Binary STL shorter than its triangle count implies.
    #[error(
        "truncated binary STL: {triangles} triangles need {expected} bytes, got {actual}"
    )]
    TruncatedInput {
        /// Declared triangle count.
        triangles: u32,
        /// Required byte length.
        expected: u64,
        /// Actual byte length.
        actual: u64,
    },

    /// Numeric token that is not a float.
    #[error("line {line}: malformed number {token:?}")]
    MalformedNumber {
        /// Line number (1-based).
        line: usize,
        /// Offending token.
        token: String,
    },

    /// `facet normal` line with less than 3 components.
    #[error("line {line}: `facet normal` needs 3 components")]
    MalformedNormalLine {
        /// Line number (1-based).
        line: usize,
    },

    /// `vertex` line with less than 3 components.
    #[error("line {line}: `vertex` needs 3 components")]
    MalformedVertexLine {
        /// Line number (1-based).
        line: usize,
    },

    /// `endfacet` sealing an incomplete facet.
    #[error("line {line}: malformed facet: {reason}")]
    MalformedFacet {
        /// Line number (1-based) of the `endfacet`.
        line: usize,
        /// What is wrong with the facet.
        reason: String,
    },

    /// Text STL that is not valid UTF-8.
    #[error("text STL is not valid UTF-8 at byte offset {offset}")]
    InvalidEncoding {
        /// Offset of the first invalid byte.
        offset: usize,
    },

    /// Material missing a field or with an ill-typed field.
    #[error("invalid material: {reason}")]
    InvalidMaterial {
        /// Description of the problem.
        reason: String,
    },

    /// More unique vertices than `u32` indices can address.
    #[error("too many unique vertices: at most {limit} are supported")]
    TooManyVertices {
        /// Number of addressable vertices.
        limit: u64,
    },

    /// Output document could not be serialized.
    #[error("failed to serialize the mesh document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Parse error in a specific file.
    #[error("failed to parse {}: {source}", .path.display())]
    InFile {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying error.
        source: Box<Error>,
    },
}

impl Error {
    /// Creates an I/O error for the given path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches the input file name.
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            e @ Error::Io { .. } | e @ Error::InFile { .. } => e,
            e => Error::InFile {
                path: path.into(),
                source: Box::new(e),
            },
        }
    }
}
