//! The strategy seam.

use std::path::Path;

use riv_model::{ExtractionResult, StrategyKind};

use crate::error::StrategyError;

/// Names recovered by one strategy, with any non-fatal notes it raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyOutput {
    pub result: ExtractionResult,
    pub notes: Vec<String>,
}

impl StrategyOutput {
    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl From<ExtractionResult> for StrategyOutput {
    fn from(result: ExtractionResult) -> Self {
        Self {
            result,
            notes: Vec::new(),
        }
    }
}

/// One way of recovering names from a container file.
///
/// Implementations report environments they cannot run in with
/// [`StrategyError::Unavailable`]. Any other error or a panic makes the
/// resolver move on to the next strategy.
pub trait ExtractionStrategy {
    fn kind(&self) -> StrategyKind;

    fn extract(&self, path: &Path) -> Result<StrategyOutput, StrategyError>;
}
