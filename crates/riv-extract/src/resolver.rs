//! Ordered strategy resolution.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use riv_model::{Diagnostic, DiagnosticSource, ExtractionResult, StrategyKind};
use tracing::{debug, info, info_span, warn};

use crate::config::ResolverConfig;
use crate::engine::RiveEngine;
use crate::error::{ResolveError, StrategyError};
use crate::strategies::{InProcessStrategy, RawParserStrategy, SandboxStrategy};
use crate::strategy::{ExtractionStrategy, StrategyOutput};

/// Where the names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// Extract from a container file.
    File(PathBuf),
    /// Use these names verbatim; no extraction runs.
    Override(Vec<String>),
}

/// What produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOrigin {
    Override,
    Strategy(StrategyKind),
}

impl fmt::Display for ResolutionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => f.write_str("override"),
            Self::Strategy(kind) => write!(f, "{kind}"),
        }
    }
}

/// Successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub result: ExtractionResult,
    pub origin: ResolutionOrigin,
    /// Everything the attempted strategies reported, in attempt order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Tries strategies in order and keeps the first result with names.
pub struct Resolver {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Resolver {
    /// Resolver over an explicit strategy order.
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    #[must_use]
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Kinds in attempt order.
    #[must_use]
    pub fn strategy_kinds(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|strategy| strategy.kind()).collect()
    }

    pub fn resolve(&self, source: NameSource) -> Result<Resolution, ResolveError> {
        match source {
            NameSource::Override(names) => resolve_override(names),
            NameSource::File(path) => self.resolve_file(&path),
        }
    }

    fn resolve_file(&self, path: &Path) -> Result<Resolution, ResolveError> {
        let span = info_span!("resolve", path = %path.display());
        let _guard = span.enter();

        let mut diagnostics = Vec::new();
        for strategy in &self.strategies {
            let kind = strategy.kind();
            let source = DiagnosticSource::Strategy(kind);
            match run_isolated(strategy.as_ref(), path) {
                Ok(output) => {
                    diagnostics.extend(
                        output
                            .notes
                            .into_iter()
                            .map(|note| Diagnostic::warning(source, note)),
                    );
                    let result = output.result.without_empty_names();
                    if result.has_names() {
                        info!(
                            strategy = %kind,
                            artboards = result.artboards.len(),
                            "extracted artboard names"
                        );
                        diagnostics.push(Diagnostic::info(
                            source,
                            format!("recovered {} artboard name(s)", result.artboards.len()),
                        ));
                        return Ok(Resolution {
                            result,
                            origin: ResolutionOrigin::Strategy(kind),
                            diagnostics,
                        });
                    }
                    warn!(strategy = %kind, "strategy found no artboard names");
                    diagnostics.push(Diagnostic::warning(source, "no artboard names found"));
                }
                Err(StrategyError::Unavailable { reason }) => {
                    debug!(strategy = %kind, %reason, "strategy skipped");
                    diagnostics.push(Diagnostic::info(source, format!("skipped: {reason}")));
                }
                Err(error) => {
                    warn!(strategy = %kind, %error, "strategy failed");
                    diagnostics.push(Diagnostic::warning(source, error.to_string()));
                }
            }
        }

        Err(ResolveError::NoNames {
            path: path.to_path_buf(),
            diagnostics,
        })
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("strategies", &self.strategy_kinds())
            .finish()
    }
}

fn resolve_override(names: Vec<String>) -> Result<Resolution, ResolveError> {
    if names.is_empty() {
        return Err(ResolveError::EmptyOverride);
    }
    info!(count = names.len(), "using explicit artboard names");
    let diagnostics = vec![Diagnostic::info(
        DiagnosticSource::Resolver,
        format!("using {} explicit artboard name(s); extraction skipped", names.len()),
    )];
    Ok(Resolution {
        result: ExtractionResult::new(names),
        origin: ResolutionOrigin::Override,
        diagnostics,
    })
}

/// Run one strategy, turning a panic into an error.
fn run_isolated(
    strategy: &dyn ExtractionStrategy,
    path: &Path,
) -> Result<StrategyOutput, StrategyError> {
    panic::catch_unwind(AssertUnwindSafe(|| strategy.extract(path))).unwrap_or_else(|payload| {
        Err(StrategyError::Panicked {
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Builds the default chain: in-process engine, sandbox, raw parser.
#[derive(Default)]
pub struct ResolverBuilder {
    engine: Option<Box<dyn RiveEngine>>,
    config: ResolverConfig,
}

impl ResolverBuilder {
    /// Link an in-process engine.
    #[must_use]
    pub fn engine(mut self, engine: Box<dyn RiveEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn build(self) -> Resolver {
        let mut strategies: Vec<Box<dyn ExtractionStrategy>> = Vec::with_capacity(3);
        strategies.push(Box::new(match self.engine {
            Some(engine) => InProcessStrategy::with_engine(engine),
            None => InProcessStrategy::new(),
        }));
        if self.config.use_sandbox {
            strategies.push(Box::new(SandboxStrategy::new(self.config.sandbox)));
        }
        if self.config.use_raw_parser {
            strategies.push(Box::new(RawParserStrategy));
        }
        Resolver::new(strategies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_order() {
        let resolver = Resolver::builder().build();
        assert_eq!(
            resolver.strategy_kinds(),
            vec![
                StrategyKind::InProcessEngine,
                StrategyKind::Sandbox,
                StrategyKind::RawParser
            ]
        );

        let resolver = Resolver::builder()
            .config(ResolverConfig::default().without_sandbox())
            .build();
        assert_eq!(
            resolver.strategy_kinds(),
            vec![StrategyKind::InProcessEngine, StrategyKind::RawParser]
        );
    }

    #[test]
    fn override_is_used_verbatim() {
        let resolver = Resolver::builder().build();
        let resolution = resolver
            .resolve(NameSource::Override(vec!["B".into(), "A".into(), "B".into()]))
            .unwrap();
        assert_eq!(resolution.origin, ResolutionOrigin::Override);
        assert_eq!(resolution.result.artboards, vec!["B", "A", "B"]);
    }

    #[test]
    fn empty_override_is_rejected() {
        let resolver = Resolver::builder().build();
        let err = resolver.resolve(NameSource::Override(Vec::new())).unwrap_err();
        assert!(matches!(err, ResolveError::EmptyOverride));
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }
}
