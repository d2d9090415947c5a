//! Bounds-checked cursor over container bytes.

use crate::error::{ContainerError, Result};
use crate::header::MAX_VARUINT_BYTES;
use crate::types::BackingKind;

/// Sequential reader over a byte slice.
///
/// Every read either consumes exactly the bytes of one value or fails without
/// panicking. Offsets in errors are absolute positions in the slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current absolute position.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// True when every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or_else(|| ContainerError::unexpected_eof(self.offset, len))?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or_else(|| ContainerError::unexpected_eof(self.offset, len))?;
        self.offset = end;
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a little-endian base-128 varuint of at most
    /// [`MAX_VARUINT_BYTES`] bytes.
    pub fn read_varuint(&mut self) -> Result<u64> {
        let start = self.offset;
        let mut value = 0u64;
        for index in 0..MAX_VARUINT_BYTES {
            let byte = self.read_u8()?;
            value |= u64::from(byte & 0x7f) << (7 * index);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ContainerError::InvalidVarUint { offset: start })
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a little-endian `f32`.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// Read a varuint length followed by that many bytes of text.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_length()?;
        let bytes = self.read_bytes(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Advance past one value of the given kind without decoding it.
    pub fn skip(&mut self, kind: BackingKind) -> Result<()> {
        match kind {
            BackingKind::Uint => {
                self.read_varuint()?;
            }
            BackingKind::Text => {
                let len = self.read_length()?;
                self.read_bytes(len)?;
            }
            BackingKind::Float | BackingKind::Color => {
                self.read_bytes(4)?;
            }
        }
        Ok(())
    }

    fn read_length(&mut self) -> Result<usize> {
        let offset = self.offset;
        let length = self.read_varuint()?;
        usize::try_from(length).map_err(|_| ContainerError::LengthOverflow { length, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_varuint_single_and_multi_byte() {
        let mut reader = ByteReader::new(&[0x05, 0xac, 0x02, 0x7f]);
        assert_eq!(reader.read_varuint().unwrap(), 5);
        assert_eq!(reader.read_varuint().unwrap(), 300);
        assert_eq!(reader.read_varuint().unwrap(), 127);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_varuint_accepts_five_bytes() {
        let mut reader = ByteReader::new(&[0xff, 0xff, 0xff, 0xff, 0x0f]);
        assert_eq!(reader.read_varuint().unwrap(), u64::from(u32::MAX));
    }

    #[test]
    fn test_read_varuint_rejects_unterminated() {
        let mut reader = ByteReader::new(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x01]);
        let err = reader.read_varuint().unwrap_err();
        assert!(matches!(err, ContainerError::InvalidVarUint { offset: 0 }));
    }

    #[test]
    fn test_read_varuint_reports_early_end() {
        let mut reader = ByteReader::new(&[0x01, 0x80]);
        reader.read_varuint().unwrap();
        let err = reader.read_varuint().unwrap_err();
        assert!(matches!(
            err,
            ContainerError::UnexpectedEof {
                offset: 2,
                needed: 1
            }
        ));
    }

    #[test]
    fn test_read_string_and_fixed_width() {
        let mut data = vec![0x04];
        data.extend_from_slice(b"Main");
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.extend_from_slice(&0xff00_ff00u32.to_le_bytes());
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_string().unwrap(), "Main");
        assert!((reader.read_f32().unwrap() - 1.5).abs() < f32::EPSILON);
        assert_eq!(reader.read_u32().unwrap(), 0xff00_ff00);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_string_lossy() {
        let mut reader = ByteReader::new(&[0x02, 0xff, b'A']);
        assert_eq!(reader.read_string().unwrap(), "\u{fffd}A");
    }

    #[test]
    fn test_skip_each_kind() {
        let mut data = vec![0xac, 0x02];
        data.extend_from_slice(&[0x03, b'a', b'b', b'c']);
        data.extend_from_slice(&[0; 8]);
        let mut reader = ByteReader::new(&data);
        reader.skip(BackingKind::Uint).unwrap();
        assert_eq!(reader.offset(), 2);
        reader.skip(BackingKind::Text).unwrap();
        assert_eq!(reader.offset(), 6);
        reader.skip(BackingKind::Float).unwrap();
        reader.skip(BackingKind::Color).unwrap();
        assert!(reader.is_empty());
    }

    #[test]
    fn test_short_fixed_width_fails() {
        let mut reader = ByteReader::new(&[0x00, 0x01]);
        assert!(matches!(
            reader.skip(BackingKind::Color),
            Err(ContainerError::UnexpectedEof {
                offset: 0,
                needed: 4
            })
        ));
    }
}
