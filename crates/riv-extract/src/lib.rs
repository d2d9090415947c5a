//! Name extraction for Rive containers.
//!
//! A [`Resolver`] tries an ordered list of [`ExtractionStrategy`]
//! implementations and keeps the first result that contains at least one
//! artboard name. The default chain is:
//!
//! 1. [`InProcessStrategy`]: an animation engine linked into this process
//! 2. [`SandboxStrategy`]: the same enumeration in an isolated helper process
//! 3. [`RawParserStrategy`]: direct decoding with `riv-container`
//!    (artboard names only)
//!
//! Strategy failures never escape the resolver. They become [`Diagnostic`]
//! values on the returned [`Resolution`] (or on [`ResolveError::NoNames`]).
//!
//! [`Diagnostic`]: riv_model::Diagnostic

pub mod config;
pub mod engine;
mod error;
mod resolver;
pub mod sandbox;
mod strategies;
mod strategy;

pub use config::{ResolverConfig, SANDBOX_COMMAND_ENV_VAR, SandboxConfig};
pub use engine::{
    ArtboardCatalog, EngineCapabilities, EngineError, EngineFile, RiveEngine,
    StateMachineCatalog, enumerate_file,
};
pub use error::{ResolveError, StrategyError};
pub use resolver::{NameSource, Resolution, ResolutionOrigin, Resolver, ResolverBuilder};
pub use sandbox::{SandboxError, SandboxReport};
pub use strategies::{InProcessStrategy, RawParserStrategy, SandboxStrategy};
pub use strategy::{ExtractionStrategy, StrategyOutput};

pub use riv_model::{Diagnostic, DiagnosticSource, ExtractionResult, Severity, StrategyKind};
