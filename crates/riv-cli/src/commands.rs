use anyhow::{Context, Result};
use tracing::debug;

use riv_cli::pipeline::{GenerateOutcome, GenerateRequest, parse_name_list, run_generate};
use riv_container::{ParsedRiv, read_riv};
use riv_extract::{ResolverConfig, SandboxConfig};

use crate::cli::{GenerateArgs, InspectArgs};

pub fn run_generate_command(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let request = GenerateRequest {
        source: args.source.clone(),
        out_dir: args.out_dir.clone(),
        names: args.names.as_deref().map(parse_name_list),
        base_name: args.base_name.clone(),
        resolver: resolver_config(args),
    };
    debug!(?request, "generate request");
    run_generate(&request)
}

pub fn run_inspect(args: &InspectArgs) -> Result<ParsedRiv> {
    read_riv(&args.source).with_context(|| format!("failed to read {}", args.source.display()))
}

/// Flag beats environment; `--no-sandbox` beats both.
fn resolver_config(args: &GenerateArgs) -> ResolverConfig {
    let mut config = ResolverConfig::from_env();
    if let Some(command) = args.sandbox_command.as_deref() {
        config.sandbox = SandboxConfig::parse_command(command);
    }
    if args.no_sandbox {
        config = config.without_sandbox();
    }
    config
}
