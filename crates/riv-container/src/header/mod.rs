//! Container header parsing and building.
//!
//! A container starts with:
//! - the fingerprint and version fields
//! - the table of contents declaring each property key's backing kind
//!
//! The object stream follows immediately after the (padded) ToC.

pub mod fingerprint;
pub mod toc;

use crate::types::BackingKind;

pub use fingerprint::{
    FINGERPRINT, MAX_VARUINT_BYTES, SUPPORTED_MAJOR_VERSION, build_header, read_header,
    read_preamble, read_version_fields,
};
pub use toc::{KINDS_PER_BYTE, PropertyToc, TOC_ALIGNMENT, TocEntry, build_toc, read_toc};

/// Object type key of artboard records.
pub const ARTBOARD_TYPE_KEY: u64 = 1;

/// Property key holding a component's name.
pub const NAME_PROPERTY_KEY: u64 = 4;

/// Backing kind of core properties the reader knows without a ToC entry.
#[must_use]
pub fn core_property_kind(key: u64) -> Option<BackingKind> {
    match key {
        NAME_PROPERTY_KEY => Some(BackingKind::Text),
        _ => None,
    }
}

/// Append `value` as a little-endian base-128 varuint.
pub fn encode_varuint(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}
