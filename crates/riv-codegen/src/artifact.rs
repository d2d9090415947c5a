//! Rendered artifact types.

use riv_model::Diagnostic;

/// Artboard union, list and predicate.
pub const ARTBOARDS_FILE: &str = "artboards.ts";
/// Per-artboard constants.
pub const ARTBOARD_CONSTANTS_FILE: &str = "artboard-constants.ts";
/// State-machine union, list, predicate and per-artboard mapping.
pub const STATE_MACHINES_FILE: &str = "state-machines.ts";
/// Re-exports of the other modules.
pub const INDEX_FILE: &str = "index.ts";

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
}

/// Two distinct names that sanitize to the same identifier.
///
/// The constant keeps the value of `kept`, the later name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCollision {
    pub identifier: String,
    pub replaced: String,
    pub kept: String,
}

/// Everything produced by one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifactSet {
    pub files: Vec<GeneratedFile>,
    /// Deduplicated, sorted state-machine names.
    pub state_machine_names: Vec<String>,
    pub collisions: Vec<IdentifierCollision>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedArtifactSet {
    /// File names in generation order.
    #[must_use]
    pub fn file_names(&self) -> Vec<&'static str> {
        self.files.iter().map(|file| file.name).collect()
    }

    /// Contents of a file by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.contents.as_str())
    }

    #[must_use]
    pub fn has_state_machines(&self) -> bool {
        !self.state_machine_names.is_empty()
    }
}
