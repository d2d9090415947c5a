//! Rive (`.riv`) binary container reader and writer.
//!
//! The reader recovers artboard names from a container without instantiating
//! an animation engine. It is forward compatible: every record in the object
//! stream is walked with the widths declared by the file's table of contents,
//! so object and property types this crate does not model are skipped without
//! losing alignment.
//!
//! # Example
//!
//! ```
//! use riv_container::{RivWriter, parse_riv};
//!
//! let mut writer = RivWriter::new();
//! writer.artboard("Main").artboard("OrderButton");
//! let bytes = writer.to_bytes();
//!
//! let parsed = parse_riv(&bytes).unwrap();
//! assert_eq!(parsed.artboard_names(), vec!["Main", "OrderButton"]);
//! assert!(parsed.is_complete());
//! ```
//!
//! # Partial results
//!
//! Only a wrong fingerprint or major version is fatal. Any later failure
//! stops decoding and is recorded in [`ParsedRiv::interrupted`], while every
//! artboard completed before the failure is still returned.

mod cursor;
mod error;
pub mod header;
mod reader;
mod types;
mod writer;

pub use cursor::ByteReader;
pub use error::{ContainerError, Result};

pub use header::{
    ARTBOARD_TYPE_KEY, FINGERPRINT, MAX_VARUINT_BYTES, NAME_PROPERTY_KEY, PropertyToc,
    SUPPORTED_MAJOR_VERSION, TocEntry,
};
pub use types::{ArtboardRecord, BackingKind, ParsedRiv, PropertyValue, RivHeader};

pub use reader::{RivReader, parse_riv, read_riv};

pub use writer::{RivWriter, write_riv};
