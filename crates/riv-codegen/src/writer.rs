//! Writing rendered artifacts to disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifact::{GeneratedArtifactSet, STATE_MACHINES_FILE};
use crate::error::{CodegenError, Result};
use crate::options::GenerateOptions;
use crate::render::render;

/// Write every file of `set` into `out_dir`, creating it if needed.
///
/// A `state-machines.ts` left over from an earlier run is removed when the
/// set has none. Stops at the first failure. Returns the written paths.
pub fn write_artifacts(out_dir: &Path, set: &GeneratedArtifactSet) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| CodegenError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(set.files.len());
    for file in &set.files {
        let path = out_dir.join(file.name);
        fs::write(&path, &file.contents).map_err(|source| CodegenError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = file.contents.len(), "wrote artifact");
        written.push(path);
    }

    if set.file(STATE_MACHINES_FILE).is_none() {
        remove_stale(&out_dir.join(STATE_MACHINES_FILE))?;
    }

    info!(dir = %out_dir.display(), files = written.len(), "artifacts written");
    Ok(written)
}

/// Render and write in one step.
pub fn generate(
    out_dir: &Path,
    names: &[String],
    options: &GenerateOptions,
) -> Result<GeneratedArtifactSet> {
    let set = render(names, options)?;
    write_artifacts(out_dir, &set)?;
    Ok(set)
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale artifact");
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(CodegenError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}
