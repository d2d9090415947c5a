use std::path::Path;

use riv_model::StrategyKind;

use crate::config::SandboxConfig;
use crate::error::StrategyError;
use crate::sandbox::SandboxSession;
use crate::strategy::{ExtractionStrategy, StrategyOutput};

/// Runs the engine enumeration in a helper process.
///
/// There is no timeout: a runner that never exits blocks resolution.
#[derive(Debug, Clone, Default)]
pub struct SandboxStrategy {
    config: Option<SandboxConfig>,
}

impl SandboxStrategy {
    pub fn new(config: Option<SandboxConfig>) -> Self {
        Self { config }
    }
}

impl ExtractionStrategy for SandboxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Sandbox
    }

    fn extract(&self, path: &Path) -> Result<StrategyOutput, StrategyError> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| StrategyError::unavailable("no sandbox runner is configured"))?;
        let mut session = SandboxSession::launch(config, path)?;
        let report = session.collect()?;
        Ok(report.into_result().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_sandbox_is_unavailable() {
        let err = SandboxStrategy::default()
            .extract(Path::new("hero.riv"))
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn missing_runner_is_a_launch_failure() {
        let strategy = SandboxStrategy::new(Some(SandboxConfig::new(
            "riv-extract-test-runner-that-does-not-exist",
        )));
        let err = strategy.extract(Path::new("hero.riv")).unwrap_err();
        assert!(matches!(
            err,
            StrategyError::Sandbox(crate::sandbox::SandboxError::Launch { .. })
        ));
    }
}
