//! Extraction result types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// The strategies able to recover names from a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Animation engine running in the current process.
    InProcessEngine,
    /// Engine running inside an isolated helper process.
    Sandbox,
    /// Direct decoding of the container bytes.
    RawParser,
}

impl StrategyKind {
    /// Short label used in logs and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProcessEngine => "in-process",
            Self::Sandbox => "sandbox",
            Self::RawParser => "raw-parser",
        }
    }

    /// Whether this strategy can recover state-machine names.
    #[must_use]
    pub const fn reports_state_machines(self) -> bool {
        !matches!(self, Self::RawParser)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Artboard names in file order plus the state machines of each artboard.
///
/// Names are kept exactly as reported: duplicates survive and nothing is
/// sorted. The state-machine map is empty when the producing strategy cannot
/// see state machines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Artboard names in the order the source reported them.
    pub artboards: Vec<String>,
    /// State-machine names per artboard, in engine order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state_machines: BTreeMap<String, Vec<String>>,
}

impl ExtractionResult {
    /// Create a result holding only artboard names.
    #[must_use]
    pub fn new(artboards: Vec<String>) -> Self {
        Self {
            artboards,
            state_machines: BTreeMap::new(),
        }
    }

    /// Attach the state machines of one artboard.
    #[must_use]
    pub fn with_state_machine(mut self, artboard: impl Into<String>, names: Vec<String>) -> Self {
        self.state_machines.insert(artboard.into(), names);
        self
    }

    /// Replace the whole state-machine map.
    #[must_use]
    pub fn with_state_machines(mut self, state_machines: BTreeMap<String, Vec<String>>) -> Self {
        self.state_machines = state_machines;
        self
    }

    /// True when at least one artboard name is non-empty.
    #[must_use]
    pub fn has_names(&self) -> bool {
        self.artboards.iter().any(|name| !name.is_empty())
    }

    /// Drop empty artboard names and the map entries keyed by them.
    #[must_use]
    pub fn without_empty_names(mut self) -> Self {
        self.artboards.retain(|name| !name.is_empty());
        self.state_machines.retain(|artboard, _| !artboard.is_empty());
        self
    }

    /// True when any artboard reported at least one state machine.
    #[must_use]
    pub fn has_state_machines(&self) -> bool {
        self.state_machines.values().any(|names| !names.is_empty())
    }

    /// All state-machine names, deduplicated and sorted.
    #[must_use]
    pub fn state_machine_names(&self) -> Vec<String> {
        let unique: BTreeSet<&String> = self.state_machines.values().flatten().collect();
        unique.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn keeps_file_order_and_duplicates() {
        let result = ExtractionResult::new(names(&["Zeta", "Alpha", "Zeta"]));
        assert_eq!(result.artboards, names(&["Zeta", "Alpha", "Zeta"]));
    }

    #[test]
    fn empty_names_do_not_count() {
        assert!(!ExtractionResult::new(names(&["", ""])).has_names());
        assert!(ExtractionResult::new(names(&["", "Main"])).has_names());

        let cleaned = ExtractionResult::new(names(&["", "Main"]))
            .with_state_machine("", names(&["Ghost"]))
            .without_empty_names();
        assert_eq!(cleaned.artboards, names(&["Main"]));
        assert!(cleaned.state_machines.is_empty());
    }

    #[test]
    fn state_machine_names_are_sorted_and_unique() {
        let result = ExtractionResult::new(names(&["Main", "Button"]))
            .with_state_machine("Main", names(&["Idle", "Hover"]))
            .with_state_machine("Button", names(&["Press", "Idle"]));
        assert!(result.has_state_machines());
        assert_eq!(result.state_machine_names(), names(&["Hover", "Idle", "Press"]));
    }

    #[test]
    fn empty_lists_are_not_state_machines() {
        let result = ExtractionResult::new(names(&["Main"])).with_state_machine("Main", Vec::new());
        assert!(!result.has_state_machines());
        assert!(result.state_machine_names().is_empty());
    }

    #[test]
    fn raw_parser_has_no_state_machines() {
        assert!(!StrategyKind::RawParser.reports_state_machines());
        assert!(StrategyKind::Sandbox.reports_state_machines());
        assert_eq!(StrategyKind::InProcessEngine.to_string(), "in-process");
    }
}
