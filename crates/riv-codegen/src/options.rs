//! Generation options.

use std::collections::BTreeMap;

use crate::identifier::to_identifier;

/// Base name used when none is given.
pub const DEFAULT_BASE_NAME: &str = "Rive";

/// Options for [`render`](crate::render) and [`generate`](crate::generate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Prefix for exported names. Sanitized with [`to_identifier`].
    pub base_name: Option<String>,
    /// State machines per artboard name.
    pub state_machines: BTreeMap<String, Vec<String>>,
}

impl GenerateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }

    #[must_use]
    pub fn with_state_machines(mut self, state_machines: BTreeMap<String, Vec<String>>) -> Self {
        self.state_machines = state_machines;
        self
    }

    /// The sanitized prefix for exported names.
    #[must_use]
    pub fn base_identifier(&self) -> String {
        to_identifier(self.base_name.as_deref().unwrap_or(DEFAULT_BASE_NAME))
    }
}
