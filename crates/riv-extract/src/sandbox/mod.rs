//! Out-of-process extraction.
//!
//! The runner is an external program that loads the container with a real
//! engine and prints a JSON report. A crash or hang in the engine stays in
//! the child process; the child is killed when its session is dropped.

mod protocol;
mod session;

use std::process::ExitStatus;

use thiserror::Error;

pub use protocol::{SandboxArtboard, SandboxReport};
pub(crate) use session::SandboxSession;

/// Failure of a sandboxed run.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// The runner could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the runner's output failed.
    #[error("failed to read runner output: {0}")]
    Io(#[from] std::io::Error),

    /// The runner exited unsuccessfully.
    #[error("runner exited with {status}")]
    Exit { status: ExitStatus },

    /// The runner reported an error of its own.
    #[error("runner reported: {message}")]
    Runner { message: String },

    /// The runner's stdout was not a valid report.
    #[error("invalid runner report: {0}")]
    Protocol(#[from] serde_json::Error),
}
