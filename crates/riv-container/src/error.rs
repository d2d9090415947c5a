//! Error types for container decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a Rive container.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The buffer does not start with the Rive fingerprint.
    #[error("not a Rive container: expected fingerprint \"RIVE\", found {found:02x?}")]
    BadFingerprint { found: Vec<u8> },

    /// The major version is not the one this reader understands.
    #[error("unsupported major version {major} (supported major version is {supported})")]
    UnsupportedVersion { major: u64, supported: u64 },

    /// A varuint did not terminate within the allowed number of bytes.
    #[error("invalid varuint at offset {offset}")]
    InvalidVarUint { offset: usize },

    /// The buffer ended before a value was complete.
    #[error("unexpected end of data at offset {offset}: needed {needed} byte(s)")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A property key has no declared backing kind.
    #[error("property {key} at offset {offset} is not declared in the table of contents")]
    UnknownProperty { key: u64, offset: usize },

    /// A declared length cannot be addressed on this platform.
    #[error("length {length} at offset {offset} is too large")]
    LengthOverflow { length: u64, offset: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

impl ContainerError {
    /// Create an UnexpectedEof error.
    pub fn unexpected_eof(offset: usize, needed: usize) -> Self {
        Self::UnexpectedEof { offset, needed }
    }

    /// Create an UnknownProperty error.
    pub fn unknown_property(key: u64, offset: usize) -> Self {
        Self::UnknownProperty { key, offset }
    }

    /// Whether the error describes malformed container bytes rather than
    /// a problem reaching the file.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::FileNotFound { .. } | Self::Io(_))
    }
}
