//! Table of contents.
//!
//! The ToC is the only place backing kinds are declared; the object stream
//! carries property keys and raw values with no type tags.
//!
//! # Structure
//!
//! 1. Property keys as varuints, terminated by key `0`.
//! 2. Backing kinds, 2 bits per key in key order, least significant bits
//!    first, [`KINDS_PER_BYTE`] keys per byte. The byte count is rounded up
//!    to a multiple of [`TOC_ALIGNMENT`].

use std::collections::BTreeMap;

use crate::cursor::ByteReader;
use crate::error::Result;
use crate::types::BackingKind;

use super::encode_varuint;

/// Backing kinds packed into one byte.
pub const KINDS_PER_BYTE: usize = 4;

/// Alignment of the packed kind array, in bytes.
pub const TOC_ALIGNMENT: usize = 4;

/// One declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    pub key: u64,
    pub kind: BackingKind,
}

/// Property key to backing kind table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyToc {
    entries: Vec<TocEntry>,
    kinds: BTreeMap<u64, BackingKind>,
}

impl PropertyToc {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property. Redeclaring a key replaces its kind.
    pub fn declare(&mut self, key: u64, kind: BackingKind) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.kind = kind;
        } else {
            self.entries.push(TocEntry { key, kind });
        }
        self.kinds.insert(key, kind);
    }

    /// Declared kind of a property key.
    #[must_use]
    pub fn kind_of(&self, key: u64) -> Option<BackingKind> {
        self.kinds.get(&key).copied()
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Size of the packed kind array for `key_count` keys, padding included.
#[must_use]
pub fn packed_kinds_len(key_count: usize) -> usize {
    key_count.div_ceil(KINDS_PER_BYTE).div_ceil(TOC_ALIGNMENT) * TOC_ALIGNMENT
}

/// Read the table of contents.
pub fn read_toc(reader: &mut ByteReader<'_>) -> Result<PropertyToc> {
    let mut keys = Vec::new();
    loop {
        let key = reader.read_varuint()?;
        if key == 0 {
            break;
        }
        keys.push(key);
    }

    let packed = reader.read_bytes(packed_kinds_len(keys.len()))?;
    let mut toc = PropertyToc::new();
    for (index, key) in keys.into_iter().enumerate() {
        let byte = packed[index / KINDS_PER_BYTE];
        let shift = (index % KINDS_PER_BYTE) * 2;
        toc.declare(key, BackingKind::from_bits(byte >> shift));
    }
    Ok(toc)
}

/// Build the table of contents.
#[must_use]
pub fn build_toc(toc: &PropertyToc) -> Vec<u8> {
    let mut out = Vec::new();
    for entry in toc.entries() {
        encode_varuint(&mut out, entry.key);
    }
    encode_varuint(&mut out, 0);

    let mut packed = vec![0u8; packed_kinds_len(toc.len())];
    for (index, entry) in toc.entries().iter().enumerate() {
        let shift = (index % KINDS_PER_BYTE) * 2;
        packed[index / KINDS_PER_BYTE] |= entry.kind.bits() << shift;
    }
    out.extend_from_slice(&packed);
    out
}
