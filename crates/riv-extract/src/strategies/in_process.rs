use std::fmt;
use std::fs;
use std::path::Path;

use riv_model::StrategyKind;
use tracing::debug;

use crate::engine::{RiveEngine, enumerate_file};
use crate::error::StrategyError;
use crate::strategy::{ExtractionStrategy, StrategyOutput};

/// Enumerates names with an engine linked into this process.
#[derive(Default)]
pub struct InProcessStrategy {
    engine: Option<Box<dyn RiveEngine>>,
}

impl InProcessStrategy {
    /// A strategy with no engine; always unavailable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: Box<dyn RiveEngine>) -> Self {
        Self {
            engine: Some(engine),
        }
    }
}

impl fmt::Debug for InProcessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InProcessStrategy")
            .field("engine", &self.engine.is_some())
            .finish()
    }
}

impl ExtractionStrategy for InProcessStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::InProcessEngine
    }

    fn extract(&self, path: &Path) -> Result<StrategyOutput, StrategyError> {
        let engine = self
            .engine
            .as_deref()
            .ok_or_else(|| StrategyError::unavailable("no animation engine is linked"))?;
        if !engine.context_available() {
            return Err(StrategyError::unavailable(
                "animation engine has no rendering context",
            ));
        }

        let bytes = fs::read(path).map_err(|source| StrategyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = engine.load(&bytes)?;
        let result = enumerate_file(file.as_ref())?;
        debug!(artboards = result.artboards.len(), "engine enumeration finished");
        Ok(result.into())
    }
}
