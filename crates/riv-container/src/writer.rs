//! Container writer.
//!
//! Builds well-formed containers from typed property values. The table of
//! contents is assembled from every key used, so callers only declare keys
//! explicitly when they want a kind that differs from the value written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::header::{
    ARTBOARD_TYPE_KEY, NAME_PROPERTY_KEY, PropertyToc, build_header, build_toc, encode_varuint,
};
use crate::types::{BackingKind, PropertyValue, RivHeader};

/// Incremental container builder.
#[derive(Debug, Clone, Default)]
pub struct RivWriter {
    header: RivHeader,
    toc: PropertyToc,
    stream: Vec<u8>,
}

impl RivWriter {
    /// Create a writer with the supported version and file id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with explicit header fields.
    #[must_use]
    pub fn with_header(header: RivHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Declare a property key's backing kind.
    pub fn declare(&mut self, key: u64, kind: BackingKind) -> &mut Self {
        self.toc.declare(key, kind);
        self
    }

    /// Append a record with the given properties.
    ///
    /// Keys that were never declared are declared with the kind of their
    /// value. Values are always encoded by their own kind, even when the
    /// declared kind differs.
    pub fn object(&mut self, type_key: u64, properties: &[(u64, PropertyValue)]) -> &mut Self {
        encode_varuint(&mut self.stream, type_key);
        for (key, value) in properties {
            if self.toc.kind_of(*key).is_none() {
                self.toc.declare(*key, value.kind());
            }
            encode_varuint(&mut self.stream, *key);
            encode_value(&mut self.stream, value);
        }
        encode_varuint(&mut self.stream, 0);
        self
    }

    /// Append an artboard record carrying a name.
    pub fn artboard(&mut self, name: &str) -> &mut Self {
        self.object(
            ARTBOARD_TYPE_KEY,
            &[(NAME_PROPERTY_KEY, PropertyValue::text(name))],
        )
    }

    /// Append an artboard record without a name property.
    pub fn anonymous_artboard(&mut self) -> &mut Self {
        self.object(ARTBOARD_TYPE_KEY, &[])
    }

    /// Current table of contents.
    #[must_use]
    pub fn toc(&self) -> &PropertyToc {
        &self.toc
    }

    /// Encode the full container.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = build_header(&self.header);
        out.extend_from_slice(&build_toc(&self.toc));
        out.extend_from_slice(&self.stream);
        out
    }

    /// Write the full container to `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        writer.write_all(&self.to_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Write a container file.
pub fn write_riv(path: &Path, container: &RivWriter) -> Result<()> {
    let file = File::create(path)?;
    container.write_to(file)
}

fn encode_value(out: &mut Vec<u8>, value: &PropertyValue) {
    match value {
        PropertyValue::Uint(value) => encode_varuint(out, *value),
        PropertyValue::Text(text) => {
            encode_varuint(out, text.len() as u64);
            out.extend_from_slice(text.as_bytes());
        }
        PropertyValue::Float(value) => out.extend_from_slice(&value.to_le_bytes()),
        PropertyValue::Color(value) => out.extend_from_slice(&value.to_le_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_riv;

    #[test]
    fn test_writer_declares_used_keys() {
        let mut writer = RivWriter::new();
        writer.object(
            3,
            &[
                (5, PropertyValue::Float(1.0)),
                (37, PropertyValue::Color(0xff00_00ff)),
            ],
        );
        assert_eq!(writer.toc().kind_of(5), Some(BackingKind::Float));
        assert_eq!(writer.toc().kind_of(37), Some(BackingKind::Color));
    }

    #[test]
    fn test_writer_output_parses() {
        let header = RivHeader {
            major_version: 7,
            minor_version: 1,
            file_id: 42,
        };
        let mut writer = RivWriter::with_header(header);
        writer
            .artboard("Main")
            .object(2, &[(13, PropertyValue::boolean(true))])
            .anonymous_artboard();
        let parsed = parse_riv(&writer.to_bytes()).unwrap();
        assert_eq!(parsed.header, header);
        assert_eq!(parsed.artboards.len(), 2);
        assert_eq!(parsed.skipped_records, 1);
        assert_eq!(parsed.artboard_names(), vec!["Main"]);
    }

    #[test]
    fn test_write_to_buffer() {
        let mut writer = RivWriter::new();
        writer.artboard("A");
        let mut buffer = Vec::new();
        writer.write_to(&mut buffer).unwrap();
        assert_eq!(buffer, writer.to_bytes());
        assert!(buffer.starts_with(b"RIVE"));
    }
}
