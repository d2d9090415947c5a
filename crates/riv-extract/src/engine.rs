//! Capability interface of an in-process animation engine.
//!
//! Engines differ in what they expose. Artboard enumeration is required;
//! state-machine enumeration is optional and reported as absent when the
//! engine build lacks it. A loaded file is released when its handle is
//! dropped, on both success and failure paths.

use std::collections::BTreeMap;

use riv_model::ExtractionResult;
use thiserror::Error;

/// Error reported by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An animation engine able to load container bytes.
pub trait RiveEngine {
    /// Whether the engine has the rendering context it needs to load files.
    fn context_available(&self) -> bool;

    /// Load a container. The returned handle owns the engine-side file.
    fn load<'a>(&'a self, bytes: &[u8]) -> Result<Box<dyn EngineFile + 'a>, EngineError>;
}

/// A loaded file.
pub trait EngineFile {
    /// Method groups this file supports.
    fn capabilities(&self) -> EngineCapabilities<'_>;
}

/// Method groups a loaded file may expose.
pub struct EngineCapabilities<'a> {
    pub artboards: Option<&'a dyn ArtboardCatalog>,
    pub state_machines: Option<&'a dyn StateMachineCatalog>,
}

/// Indexed artboard enumeration.
pub trait ArtboardCatalog {
    fn artboard_count(&self) -> usize;
    fn artboard_name(&self, index: usize) -> Result<String, EngineError>;
}

/// Indexed state-machine enumeration, per artboard index.
pub trait StateMachineCatalog {
    fn state_machine_count(&self, artboard: usize) -> Result<usize, EngineError>;
    fn state_machine_name(&self, artboard: usize, index: usize) -> Result<String, EngineError>;
}

/// Enumerate artboards and, when supported, their state machines.
///
/// Every artboard gets a state-machine entry (possibly empty) when the
/// state-machine group is present; none otherwise.
pub fn enumerate_file(file: &dyn EngineFile) -> Result<ExtractionResult, EngineError> {
    let capabilities = file.capabilities();
    let artboards = capabilities
        .artboards
        .ok_or_else(|| EngineError::new("loaded file does not support artboard enumeration"))?;

    let count = artboards.artboard_count();
    let mut names = Vec::with_capacity(count);
    let mut state_machines = BTreeMap::new();
    for index in 0..count {
        let name = artboards.artboard_name(index)?;
        if let Some(catalog) = capabilities.state_machines {
            let machine_count = catalog.state_machine_count(index)?;
            let machines = (0..machine_count)
                .map(|machine| catalog.state_machine_name(index, machine))
                .collect::<Result<Vec<_>, _>>()?;
            state_machines.insert(name.clone(), machines);
        }
        names.push(name);
    }

    Ok(ExtractionResult::new(names).with_state_machines(state_machines))
}
