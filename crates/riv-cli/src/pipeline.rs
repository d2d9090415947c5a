//! Resolve names and generate artifacts.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use riv_codegen::{GenerateOptions, GeneratedArtifactSet, generate};
use riv_extract::{NameSource, Resolution, Resolver, ResolverConfig};

/// Everything `generate` needs.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Container to extract from. Optional when `names` is set.
    pub source: Option<PathBuf>,
    pub out_dir: PathBuf,
    /// Explicit names; skips extraction.
    pub names: Option<Vec<String>>,
    pub base_name: Option<String>,
    pub resolver: ResolverConfig,
}

/// Result of a successful run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub resolution: Resolution,
    pub artifacts: GeneratedArtifactSet,
    pub written: Vec<PathBuf>,
}

/// Split a comma-separated name list. Surrounding whitespace and empty
/// entries are dropped.
pub fn parse_name_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve names for `request` and write the artifacts.
///
/// Nothing is written when resolution fails.
pub fn run_generate(request: &GenerateRequest) -> Result<GenerateOutcome> {
    let source = match (&request.names, &request.source) {
        (Some(names), _) => NameSource::Override(names.clone()),
        (None, Some(path)) => NameSource::File(path.clone()),
        (None, None) => bail!("a source file is required unless --names is given"),
    };

    let span = info_span!("generate", out_dir = %request.out_dir.display());
    let _guard = span.enter();

    let resolver = Resolver::builder().config(request.resolver.clone()).build();
    let resolution = resolver
        .resolve(source)
        .context("failed to resolve artboard names")?;
    info!(
        origin = %resolution.origin,
        artboards = resolution.result.artboards.len(),
        "names resolved"
    );

    let mut options =
        GenerateOptions::new().with_state_machines(resolution.result.state_machines.clone());
    if let Some(base_name) = &request.base_name {
        options = options.with_base_name(base_name.clone());
    }
    let artifacts = generate(&request.out_dir, &resolution.result.artboards, &options)
        .with_context(|| format!("failed to generate into {}", request.out_dir.display()))?;
    let written = artifacts
        .file_names()
        .into_iter()
        .map(|name| request.out_dir.join(name))
        .collect();

    Ok(GenerateOutcome {
        resolution,
        artifacts,
        written,
    })
}
