use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use super::{SandboxError, SandboxReport};
use crate::config::SandboxConfig;

/// A running sandbox child. Dropping the session kills the child if it has
/// not exited and reaps it.
pub(crate) struct SandboxSession {
    child: Child,
    program: String,
}

impl SandboxSession {
    pub(crate) fn launch(config: &SandboxConfig, path: &Path) -> Result<Self, SandboxError> {
        let program = config.display_program();
        debug!(%program, path = %path.display(), "launching sandbox runner");
        let child = Command::new(&config.program)
            .args(&config.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SandboxError::Launch {
                program: program.clone(),
                source,
            })?;
        Ok(Self { child, program })
    }

    /// Read stdout to the end, wait for exit and parse the report.
    pub(crate) fn collect(&mut self) -> Result<SandboxReport, SandboxError> {
        let mut output = String::new();
        if let Some(mut stdout) = self.child.stdout.take() {
            stdout.read_to_string(&mut output)?;
        }
        let status = self.child.wait()?;
        debug!(program = %self.program, %status, "sandbox runner exited");
        if !status.success() {
            return Err(SandboxError::Exit { status });
        }
        SandboxReport::from_json(&output)
    }
}

impl Drop for SandboxSession {
    fn drop(&mut self) {
        if let Ok(Some(_)) = self.child.try_wait() {
            return;
        }
        warn!(program = %self.program, "terminating sandbox runner");
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
