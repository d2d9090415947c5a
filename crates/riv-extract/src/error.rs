//! Error types for extraction.

use std::path::PathBuf;

use riv_container::ContainerError;
use riv_model::Diagnostic;
use thiserror::Error;

use crate::engine::EngineError;
use crate::sandbox::SandboxError;

/// Why a single strategy produced nothing.
///
/// These never leave the resolver; they are converted to diagnostics at the
/// strategy boundary.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// The strategy cannot run in this environment.
    #[error("unavailable: {reason}")]
    Unavailable { reason: String },

    /// The container file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The raw parser rejected the container.
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// The animation engine reported an error.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// The sandboxed runner failed.
    #[error("sandbox error: {0}")]
    Sandbox(#[from] SandboxError),

    /// The strategy panicked.
    #[error("strategy panicked: {message}")]
    Panicked { message: String },
}

impl StrategyError {
    /// Create an Unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Resolution failed as a whole.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Every strategy ran and none produced an artboard name.
    #[error("no artboard names could be extracted from {path}; pass the names explicitly")]
    NoNames {
        path: PathBuf,
        diagnostics: Vec<Diagnostic>,
    },

    /// An explicit name list was supplied but it is empty.
    #[error("the explicit artboard name list is empty")]
    EmptyOverride,
}

impl ResolveError {
    /// Diagnostics collected before the failure.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::NoNames { diagnostics, .. } => diagnostics,
            Self::EmptyOverride => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StrategyError::unavailable("no engine");
        assert_eq!(err.to_string(), "unavailable: no engine");
        assert!(err.is_unavailable());

        let err = ResolveError::NoNames {
            path: PathBuf::from("hero.riv"),
            diagnostics: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            "no artboard names could be extracted from hero.riv; pass the names explicitly"
        );
    }

    #[test]
    fn test_container_error_conversion() {
        let err: StrategyError = ContainerError::unexpected_eof(4, 1).into();
        assert!(matches!(err, StrategyError::Container(_)));
        assert!(!err.is_unavailable());
    }
}
