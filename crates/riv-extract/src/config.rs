//! Resolver configuration.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable holding the sandbox runner command line.
pub const SANDBOX_COMMAND_ENV_VAR: &str = "RIV_SANDBOX_COMMAND";

/// Command used to launch the sandboxed runner.
///
/// The runner is invoked as `program args... <container path>` and must print
/// a single JSON report on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxConfig {
    /// Executable to launch.
    pub program: PathBuf,
    /// Arguments placed before the container path.
    pub args: Vec<String>,
}

impl SandboxConfig {
    /// Create a config for `program` with no extra arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Split a command line on whitespace.
    ///
    /// Returns `None` for a blank command. Quoting is not interpreted.
    pub fn parse_command(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?;
        Some(Self {
            program: PathBuf::from(program),
            args: parts.map(str::to_string).collect(),
        })
    }

    /// Read the runner command from [`SANDBOX_COMMAND_ENV_VAR`].
    pub fn from_env() -> Option<Self> {
        Self::from_env_value(std::env::var_os(SANDBOX_COMMAND_ENV_VAR).as_deref())
    }

    fn from_env_value(value: Option<&OsStr>) -> Option<Self> {
        value
            .and_then(OsStr::to_str)
            .and_then(Self::parse_command)
    }

    /// Program name for logs.
    #[must_use]
    pub fn display_program(&self) -> String {
        self.program.display().to_string()
    }
}

/// Which strategies the default resolver chain may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Runner for the sandbox strategy. `None` leaves the strategy unavailable.
    pub sandbox: Option<SandboxConfig>,
    /// Try the sandbox strategy at all.
    pub use_sandbox: bool,
    /// Try the raw parser as the last resort.
    pub use_raw_parser: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sandbox: None,
            use_sandbox: true,
            use_raw_parser: true,
        }
    }
}

impl ResolverConfig {
    /// Default chain with the sandbox command taken from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            sandbox: SandboxConfig::from_env(),
            ..Self::default()
        }
    }

    /// Override the sandbox runner.
    #[must_use]
    pub fn with_sandbox(mut self, sandbox: SandboxConfig) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    /// Disable the sandbox strategy.
    #[must_use]
    pub fn without_sandbox(mut self) -> Self {
        self.use_sandbox = false;
        self
    }
}
