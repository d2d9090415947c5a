//! Structured diagnostics returned alongside results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extraction::StrategyKind;

/// How serious a diagnostic is. None of these abort a run by themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Component that emitted a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "strategy")]
pub enum DiagnosticSource {
    Strategy(StrategyKind),
    Resolver,
    Codegen,
}

impl fmt::Display for DiagnosticSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategy(kind) => write!(f, "{kind}"),
            Self::Resolver => f.write_str("resolver"),
            Self::Codegen => f.write_str("codegen"),
        }
    }
}

/// A single reportable event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub source: DiagnosticSource,
    pub message: String,
}

impl Diagnostic {
    /// Create an informational diagnostic.
    pub fn info(source: DiagnosticSource, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            source,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(source: DiagnosticSource, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            source,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity.label(), self.source, self.message)
    }
}
