//! JSON report printed by the runner.
//!
//! ```json
//! {"artboards":[{"name":"Main","stateMachines":["Idle"]}]}
//! ```
//!
//! A runner that fails on its own may print `{"error":"..."}` instead.
//!
//! # Writing a runner
//!
//! The runner is started as `program args... <container path>`, for example
//! with `RIV_SANDBOX_COMMAND="node rive-runner.mjs"`. A Node runner built on
//! the `@rive-app/canvas-advanced` package:
//!
//! ```text
//! import { readFile } from "node:fs/promises";
//! import RiveCanvas from "@rive-app/canvas-advanced";
//!
//! try {
//!   const rive = await RiveCanvas();
//!   const file = await rive.load(new Uint8Array(await readFile(process.argv[2])));
//!   const artboards = [];
//!   for (let i = 0; i < file.artboardCount(); i++) {
//!     const artboard = file.artboardByIndex(i);
//!     const stateMachines = [];
//!     for (let j = 0; j < artboard.stateMachineCount(); j++) {
//!       stateMachines.push(artboard.stateMachineByIndex(j).name);
//!     }
//!     artboards.push({ name: artboard.name, stateMachines });
//!   }
//!   console.log(JSON.stringify({ artboards }));
//! } catch (err) {
//!   console.log(JSON.stringify({ error: String(err) }));
//! }
//! ```
//!
//! Whatever the runner prints is read with [`SandboxReport::from_json`]:
//!
//! ```
//! use riv_extract::SandboxReport;
//!
//! let report = SandboxReport::from_json(
//!     r#"{"artboards":[{"name":"Main","stateMachines":["Idle","Hover"]}]}"#,
//! )
//! .unwrap();
//! let result = report.into_result();
//! assert_eq!(result.artboards, vec!["Main"]);
//! assert_eq!(result.state_machines["Main"], vec!["Idle", "Hover"]);
//! ```

use std::collections::BTreeMap;

use riv_model::ExtractionResult;
use serde::{Deserialize, Serialize};

use super::SandboxError;

/// Whole report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxReport {
    #[serde(default)]
    pub artboards: Vec<SandboxArtboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One artboard and its state machines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxArtboard {
    pub name: String,
    #[serde(default)]
    pub state_machines: Vec<String>,
}

impl SandboxReport {
    /// Parse the runner's stdout.
    pub fn from_json(output: &str) -> Result<Self, SandboxError> {
        let report: Self = serde_json::from_str(output.trim())?;
        match report.error {
            Some(message) => Err(SandboxError::Runner { message }),
            None => Ok(report),
        }
    }

    /// Convert to the shared result shape. Every artboard gets a
    /// state-machine entry, mirroring the in-process enumeration.
    #[must_use]
    pub fn into_result(self) -> ExtractionResult {
        let mut names = Vec::with_capacity(self.artboards.len());
        let mut state_machines = BTreeMap::new();
        for artboard in self.artboards {
            state_machines.insert(artboard.name.clone(), artboard.state_machines);
            names.push(artboard.name);
        }
        ExtractionResult::new(names).with_state_machines(state_machines)
    }
}
