//! Core container types.

use std::fmt;

use crate::error::ContainerError;
use crate::header::{PropertyToc, SUPPORTED_MAJOR_VERSION};

/// How a property value is stored, as declared by the table of contents.
///
/// | Bits | Kind    | Encoding                         |
/// |------|---------|----------------------------------|
/// | 0    | `Uint`  | varuint (also used for booleans) |
/// | 1    | `Text`  | varuint length + UTF-8 bytes     |
/// | 2    | `Float` | 4-byte little-endian `f32`       |
/// | 3    | `Color` | 4-byte little-endian `u32`       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingKind {
    Uint,
    Text,
    Float,
    Color,
}

impl BackingKind {
    /// Decode a 2-bit ToC field. Higher bits are ignored.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Uint,
            1 => Self::Text,
            2 => Self::Float,
            _ => Self::Color,
        }
    }

    /// The 2-bit ToC field for this kind.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Uint => 0,
            Self::Text => 1,
            Self::Float => 2,
            Self::Color => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uint => "uint",
            Self::Text => "text",
            Self::Float => "float",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for BackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed property value, used when building containers.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Uint(u64),
    Text(String),
    Float(f32),
    Color(u32),
}

impl PropertyValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a boolean value (stored as a `Uint`).
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::Uint(u64::from(value))
    }

    /// The backing kind this value is encoded with.
    #[must_use]
    pub const fn kind(&self) -> BackingKind {
        match self {
            Self::Uint(_) => BackingKind::Uint,
            Self::Text(_) => BackingKind::Text,
            Self::Float(_) => BackingKind::Float,
            Self::Color(_) => BackingKind::Color,
        }
    }
}

/// Fields that follow the fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RivHeader {
    pub major_version: u64,
    pub minor_version: u64,
    pub file_id: u64,
}

impl Default for RivHeader {
    fn default() -> Self {
        Self {
            major_version: SUPPORTED_MAJOR_VERSION,
            minor_version: 0,
            file_id: 0,
        }
    }
}

/// An artboard found in the object stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtboardRecord {
    /// Name property, empty when the record carries none.
    pub name: String,
    /// Offset of the record's type key.
    pub offset: usize,
}

/// Everything recovered from one container.
#[derive(Debug)]
pub struct ParsedRiv {
    pub header: RivHeader,
    pub toc: PropertyToc,
    /// Complete artboard records in file order, anonymous ones included.
    pub artboards: Vec<ArtboardRecord>,
    /// Number of complete records of other object types.
    pub skipped_records: usize,
    /// Failure that stopped decoding after the major version.
    pub interrupted: Option<ContainerError>,
}

impl ParsedRiv {
    /// Non-empty artboard names in file order.
    #[must_use]
    pub fn artboard_names(&self) -> Vec<String> {
        self.artboards
            .iter()
            .filter(|record| !record.name.is_empty())
            .map(|record| record.name.clone())
            .collect()
    }

    /// True when the whole object stream was consumed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_kind_bits_roundtrip() {
        for bits in 0..4u8 {
            assert_eq!(BackingKind::from_bits(bits).bits(), bits);
        }
        assert_eq!(BackingKind::from_bits(0b101), BackingKind::Text);
    }

    #[test]
    fn test_property_value_kinds() {
        assert_eq!(PropertyValue::boolean(true), PropertyValue::Uint(1));
        assert_eq!(PropertyValue::text("Main").kind(), BackingKind::Text);
        assert_eq!(PropertyValue::Float(0.5).kind(), BackingKind::Float);
        assert_eq!(PropertyValue::Color(0).kind(), BackingKind::Color);
    }

    #[test]
    fn test_artboard_names_skip_anonymous() {
        let parsed = ParsedRiv {
            header: RivHeader::default(),
            toc: PropertyToc::default(),
            artboards: vec![
                ArtboardRecord {
                    name: "Main".to_string(),
                    offset: 12,
                },
                ArtboardRecord {
                    name: String::new(),
                    offset: 20,
                },
                ArtboardRecord {
                    name: "Main".to_string(),
                    offset: 24,
                },
            ],
            skipped_records: 0,
            interrupted: None,
        };
        assert_eq!(parsed.artboard_names(), vec!["Main", "Main"]);
        assert!(parsed.is_complete());
    }
}
