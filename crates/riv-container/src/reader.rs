//! Container reader.
//!
//! Provides functionality to read Rive containers and recover artboard names.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cursor::ByteReader;
use crate::error::{ContainerError, Result};
use crate::header::{
    ARTBOARD_TYPE_KEY, NAME_PROPERTY_KEY, PropertyToc, core_property_kind, read_preamble, read_toc,
    read_version_fields,
};
use crate::types::{ArtboardRecord, BackingKind, ParsedRiv, RivHeader};

/// Container reader over any byte source.
pub struct RivReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> RivReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the whole source into memory and parse it.
    pub fn read_container(mut self) -> Result<ParsedRiv> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        parse_riv(&data)
    }
}

impl RivReader<File> {
    /// Open a container file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ContainerError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ContainerError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read a container from a path.
pub fn read_riv(path: &Path) -> Result<ParsedRiv> {
    RivReader::open(path)?.read_container()
}

/// Parse container bytes.
///
/// Returns an error only when the fingerprint or major version is wrong.
/// Any later failure, in the remaining header fields, the table of contents
/// or the object stream, ends decoding and is stored in
/// [`ParsedRiv::interrupted`]. Records completed before the failure are kept,
/// a record cut off part-way is not.
pub fn parse_riv(data: &[u8]) -> Result<ParsedRiv> {
    let mut reader = ByteReader::new(data);
    let major_version = read_preamble(&mut reader)?;

    let mut parsed = ParsedRiv {
        header: RivHeader {
            major_version,
            ..RivHeader::default()
        },
        toc: PropertyToc::default(),
        artboards: Vec::new(),
        skipped_records: 0,
        interrupted: None,
    };
    parsed.interrupted = decode_body(&mut reader, &mut parsed).err();
    Ok(parsed)
}

fn decode_body(reader: &mut ByteReader<'_>, parsed: &mut ParsedRiv) -> Result<()> {
    read_version_fields(reader, &mut parsed.header)?;
    parsed.toc = read_toc(reader)?;
    walk_objects(reader, parsed)
}

fn walk_objects(reader: &mut ByteReader<'_>, parsed: &mut ParsedRiv) -> Result<()> {
    while !reader.is_empty() {
        let offset = reader.offset();
        let type_key = reader.read_varuint()?;
        let is_artboard = type_key == ARTBOARD_TYPE_KEY;
        let name = read_properties(reader, &parsed.toc, is_artboard)?;
        if is_artboard {
            parsed.artboards.push(ArtboardRecord {
                name: name.unwrap_or_default(),
                offset,
            });
        } else {
            parsed.skipped_records += 1;
        }
    }
    Ok(())
}

/// Walk one record's properties up to its terminating zero key.
///
/// Returns the name property when `capture_name` is set and the record has a
/// text-backed name; every other property is skipped by its declared width.
fn read_properties(
    reader: &mut ByteReader<'_>,
    toc: &PropertyToc,
    capture_name: bool,
) -> Result<Option<String>> {
    let mut name = None;
    loop {
        let offset = reader.offset();
        let key = reader.read_varuint()?;
        if key == 0 {
            return Ok(name);
        }
        let kind = toc
            .kind_of(key)
            .or_else(|| core_property_kind(key))
            .ok_or_else(|| ContainerError::unknown_property(key, offset))?;
        if capture_name && key == NAME_PROPERTY_KEY && kind == BackingKind::Text {
            name = Some(reader.read_string()?);
        } else {
            reader.skip(kind)?;
        }
    }
}
