//! riv-typegen: typed names for Rive artboards.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use riv_cli::logging::{LogConfig, init_logging};
use riv_extract::ResolveError;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_generate_command, run_inspect};
use crate::summary::{print_diagnostics, print_generate_summary, print_inspect_summary};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if let Some(resolve) = error.downcast_ref::<ResolveError>() {
                print_diagnostics(resolve.diagnostics());
            }
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Generate(args) => {
            let outcome = run_generate_command(args)?;
            print_generate_summary(&outcome);
        }
        Command::Inspect(args) => {
            let parsed = run_inspect(args)?;
            print_inspect_summary(&args.source, &parsed);
        }
    }
    Ok(())
}

/// An explicit `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!cli.verbosity.is_present() && cli.log_level.is_none())
        .with_format(cli.log_format.into())
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
