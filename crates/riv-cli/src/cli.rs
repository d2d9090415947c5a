//! CLI argument definitions for riv-typegen.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use riv_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "riv-typegen",
    version,
    about = "Generate TypeScript names for the artboards of a Rive file",
    long_about = "Extract artboard and state-machine names from a Rive (.riv) file \
                  and generate typed TypeScript modules for them.\n\n\
                  Names come from an in-process engine, a sandboxed runner or the \
                  raw container parser, whichever succeeds first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to color terminal output.
    #[command(flatten)]
    pub color: Color,

    /// Log level; takes precedence over -v/-q.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// How log lines are formatted.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to this file rather than stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve artboard names and write the TypeScript modules.
    Generate(GenerateArgs),

    /// Show what the raw parser sees in a container.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Rive file to read names from. Optional when --names is given.
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Directory the modules are written to.
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Comma-separated artboard names; skips extraction entirely.
    #[arg(long = "names", value_name = "A,B")]
    pub names: Option<String>,

    /// Prefix for exported names (default: Rive).
    #[arg(long = "base-name", value_name = "NAME")]
    pub base_name: Option<String>,

    /// Sandbox runner command line (overrides RIV_SANDBOX_COMMAND).
    #[arg(long = "sandbox-command", value_name = "CMD")]
    pub sandbox_command: Option<String>,

    /// Skip the sandboxed runner.
    #[arg(long = "no-sandbox")]
    pub no_sandbox: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Rive file to inspect.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

/// Values for `--log-level`.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Values for `--log-format`.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
