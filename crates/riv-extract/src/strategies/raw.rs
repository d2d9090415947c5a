use std::path::Path;

use riv_container::read_riv;
use riv_model::{ExtractionResult, StrategyKind};
use tracing::warn;

use crate::error::StrategyError;
use crate::strategy::{ExtractionStrategy, StrategyOutput};

/// Decodes the container directly. Recovers artboard names only.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawParserStrategy;

impl ExtractionStrategy for RawParserStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RawParser
    }

    fn extract(&self, path: &Path) -> Result<StrategyOutput, StrategyError> {
        let parsed = read_riv(path)?;
        let names = parsed.artboard_names();
        let recovered = names.len();
        let output = StrategyOutput::from(ExtractionResult::new(names));
        match &parsed.interrupted {
            Some(error) => {
                warn!(
                    %error,
                    recovered,
                    "decoding stopped early; keeping names read so far"
                );
                Ok(output.with_note(format!(
                    "decoding stopped early ({error}); kept {recovered} artboard name(s) read before it"
                )))
            }
            None => Ok(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use riv_container::{ContainerError, RivWriter, write_riv};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_names_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hero.riv");
        let mut writer = RivWriter::new();
        writer.artboard("Main").artboard("OrderButton");
        write_riv(&path, &writer).unwrap();

        let output = RawParserStrategy.extract(&path).unwrap();
        assert_eq!(output.result.artboards, vec!["Main", "OrderButton"]);
        assert!(output.result.state_machines.is_empty());
        assert!(output.notes.is_empty());
    }

    #[test]
    fn truncated_stream_keeps_partial_names_with_a_note() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cut.riv");
        let mut writer = RivWriter::new();
        writer
            .anonymous_artboard()
            .anonymous_artboard()
            .artboard("Main")
            .artboard("Second");
        let mut bytes = writer.to_bytes();
        bytes.truncate(bytes.len() - 3);
        std::fs::write(&path, bytes).unwrap();

        let output = RawParserStrategy.extract(&path).unwrap();
        assert_eq!(output.result.artboards, vec!["Main"]);
        assert_eq!(output.notes.len(), 1);
        assert!(
            output.notes[0].ends_with("kept 1 artboard name(s) read before it"),
            "{}",
            output.notes[0]
        );
    }

    #[test]
    fn missing_file_is_a_container_error() {
        let err = RawParserStrategy
            .extract(Path::new("/nonexistent/hero.riv"))
            .unwrap_err();
        assert!(matches!(
            err,
            StrategyError::Container(ContainerError::FileNotFound { .. })
        ));
    }
}
