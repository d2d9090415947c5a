//! Error types for artifact generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when generating artifacts.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Nothing to generate.
    #[error("at least one artboard name is required")]
    NoArtboards,

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stale artifact could not be removed.
    #[error("failed to remove stale {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for generation.
pub type Result<T> = std::result::Result<T, CodegenError>;
