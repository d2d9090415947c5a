//! Fingerprint and version fields.
//!
//! # Structure
//!
//! | Field         | Encoding | Notes                          |
//! |---------------|----------|--------------------------------|
//! | fingerprint   | 4 bytes  | always `RIVE`                  |
//! | major version | varuint  | must be [`SUPPORTED_MAJOR_VERSION`] |
//! | minor version | varuint  | informational                  |
//! | file id       | varuint  | informational                  |

use crate::cursor::ByteReader;
use crate::error::{ContainerError, Result};
use crate::types::RivHeader;

use super::encode_varuint;

/// Fingerprint every container starts with.
pub const FINGERPRINT: &[u8; 4] = b"RIVE";

/// The only major version this reader decodes.
pub const SUPPORTED_MAJOR_VERSION: u64 = 7;

/// Longest accepted varuint encoding, in bytes.
pub const MAX_VARUINT_BYTES: usize = 5;

/// Read the fingerprint and major version.
///
/// Fails if either does not match. Nothing after the major version is read,
/// so a supported file is recognised however short it is.
pub fn read_preamble(reader: &mut ByteReader<'_>) -> Result<u64> {
    if reader.remaining() < FINGERPRINT.len() {
        let found = reader.read_bytes(reader.remaining())?.to_vec();
        return Err(ContainerError::BadFingerprint { found });
    }
    let fingerprint = reader.read_bytes(FINGERPRINT.len())?;
    if fingerprint != FINGERPRINT {
        return Err(ContainerError::BadFingerprint {
            found: fingerprint.to_vec(),
        });
    }

    let major = reader.read_varuint()?;
    if major != SUPPORTED_MAJOR_VERSION {
        return Err(ContainerError::UnsupportedVersion {
            major,
            supported: SUPPORTED_MAJOR_VERSION,
        });
    }
    Ok(major)
}

/// Read the minor version and file id into `header`.
///
/// Each field is stored as soon as it decodes.
pub fn read_version_fields(reader: &mut ByteReader<'_>, header: &mut RivHeader) -> Result<()> {
    header.minor_version = reader.read_varuint()?;
    header.file_id = reader.read_varuint()?;
    Ok(())
}

/// Read and validate all fields that follow the fingerprint.
pub fn read_header(reader: &mut ByteReader<'_>) -> Result<RivHeader> {
    let mut header = RivHeader {
        major_version: read_preamble(reader)?,
        ..RivHeader::default()
    };
    read_version_fields(reader, &mut header)?;
    Ok(header)
}

/// Build the fingerprint and version fields.
#[must_use]
pub fn build_header(header: &RivHeader) -> Vec<u8> {
    let mut out = FINGERPRINT.to_vec();
    encode_varuint(&mut out, header.major_version);
    encode_varuint(&mut out, header.minor_version);
    encode_varuint(&mut out, header.file_id);
    out
}
