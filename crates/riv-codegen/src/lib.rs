//! TypeScript artifacts for Rive artboard and state-machine names.
//!
//! [`render`] is pure and deterministic: the same names and options always
//! produce byte-identical files. [`write_artifacts`] puts a rendered set on
//! disk and [`generate`] does both.
//!
//! # Example
//!
//! ```
//! use riv_codegen::{GenerateOptions, render};
//!
//! let names = vec!["Main".to_string(), "Order Button".to_string()];
//! let set = render(&names, &GenerateOptions::default()).unwrap();
//! let artboards = set.file("artboards.ts").unwrap();
//! assert!(artboards.contains(r#"export type RiveArtboardName = "Main" | "Order Button";"#));
//! ```

mod artifact;
mod error;
mod identifier;
mod options;
mod render;
mod writer;

pub use artifact::{
    ARTBOARD_CONSTANTS_FILE, ARTBOARDS_FILE, GeneratedArtifactSet, GeneratedFile,
    IdentifierCollision, INDEX_FILE, STATE_MACHINES_FILE,
};
pub use error::{CodegenError, Result};
pub use identifier::{UNNAMED_IDENTIFIER, to_identifier};
pub use options::{DEFAULT_BASE_NAME, GenerateOptions};
pub use render::render;
pub use writer::{generate, write_artifacts};
