//! Shared types for riv-typegen.
//!
//! The extraction crates produce an [`ExtractionResult`] and the code generator
//! consumes it. Both sides report non-fatal conditions as [`Diagnostic`] values
//! instead of printing them, so the caller decides how they are presented.

pub mod diagnostic;
pub mod extraction;

pub use diagnostic::{Diagnostic, DiagnosticSource, Severity};
pub use extraction::{ExtractionResult, StrategyKind};
