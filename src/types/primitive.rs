//! Geometry primitive kinds.

use crate::error::{OlbError, Result};

/// The kind byte of a leaf shape inside a geometry specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Primitive {
    Rect = 0x28,
    Line = 0x29,
    Arc = 0x2a,
    Ellipse = 0x2b,
    Polygon = 0x2c,
    Polyline = 0x2d,
    CommentText = 0x2e,
    Bitmap = 0x2f,
    SymbolVector = 0x30,
    Bezier = 0x57,
}

impl Primitive {
    /// Convert a raw primitive-prefix kind byte.
    pub fn from_raw(raw: u8, offset: u64) -> Result<Self> {
        Ok(match raw {
            0x28 => Self::Rect,
            0x29 => Self::Line,
            0x2a => Self::Arc,
            0x2b => Self::Ellipse,
            0x2c => Self::Polygon,
            0x2d => Self::Polyline,
            0x2e => Self::CommentText,
            0x2f => Self::Bitmap,
            0x30 => Self::SymbolVector,
            0x57 => Self::Bezier,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "Primitive",
                    raw: raw as u32,
                    offset,
                })
            }
        })
    }

    /// The raw kind byte.
    pub fn to_raw(self) -> u8 {
        self as u8
    }

    /// All known primitive kinds.
    pub const ALL: [Primitive; 10] = [
        Self::Rect,
        Self::Line,
        Self::Arc,
        Self::Ellipse,
        Self::Polygon,
        Self::Polyline,
        Self::CommentText,
        Self::Bitmap,
        Self::SymbolVector,
        Self::Bezier,
    ];
}

/// Structure-level encoding of a shape kind.
///
/// Between successive primitives some format versions repeat a full type
/// prefix whose tag is the shape kind rather than a [`Structure`] tag; this
/// enum names that reading.
///
/// [`Structure`]: crate::types::Structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryStructure {
    Rect,
    Line,
    Arc,
    Ellipse,
    Polygon,
    Polyline,
    CommentText,
    Bitmap,
    SymbolVector,
    Bezier,
}

impl GeometryStructure {
    /// Convert a raw structure-level shape tag.
    pub fn from_raw(raw: u16, offset: u64) -> Result<Self> {
        let primitive = if raw <= u8::MAX as u16 {
            Primitive::from_raw(raw as u8, offset)
        } else {
            Err(OlbError::UnknownEnumValue {
                kind: "GeometryStructure",
                raw: raw as u32,
                offset,
            })
        };
        primitive
            .map(Self::from_primitive)
            .map_err(|_| OlbError::UnknownEnumValue {
                kind: "GeometryStructure",
                raw: raw as u32,
                offset,
            })
    }

    /// The raw tag value.
    pub fn to_raw(self) -> u16 {
        self.as_primitive().to_raw() as u16
    }

    /// The primitive kind this tag announces.
    pub fn as_primitive(self) -> Primitive {
        match self {
            Self::Rect => Primitive::Rect,
            Self::Line => Primitive::Line,
            Self::Arc => Primitive::Arc,
            Self::Ellipse => Primitive::Ellipse,
            Self::Polygon => Primitive::Polygon,
            Self::Polyline => Primitive::Polyline,
            Self::CommentText => Primitive::CommentText,
            Self::Bitmap => Primitive::Bitmap,
            Self::SymbolVector => Primitive::SymbolVector,
            Self::Bezier => Primitive::Bezier,
        }
    }

    fn from_primitive(p: Primitive) -> Self {
        match p {
            Primitive::Rect => Self::Rect,
            Primitive::Line => Self::Line,
            Primitive::Arc => Self::Arc,
            Primitive::Ellipse => Self::Ellipse,
            Primitive::Polygon => Self::Polygon,
            Primitive::Polyline => Self::Polyline,
            Primitive::CommentText => Self::CommentText,
            Primitive::Bitmap => Self::Bitmap,
            Primitive::SymbolVector => Self::SymbolVector,
            Primitive::Bezier => Self::Bezier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_round_trip() {
        for p in Primitive::ALL {
            assert_eq!(Primitive::from_raw(p.to_raw(), 0).unwrap(), p);
        }
    }

    #[test]
    fn test_unknown_primitive() {
        assert!(Primitive::from_raw(0x31, 0).is_err());
    }

    #[test]
    fn test_geometry_structure_matches_primitive() {
        for p in Primitive::ALL {
            let gs = GeometryStructure::from_raw(p.to_raw() as u16, 0).unwrap();
            assert_eq!(gs.as_primitive(), p);
            assert_eq!(gs.to_raw(), p.to_raw() as u16);
        }
    }

    #[test]
    fn test_geometry_structure_wide_value() {
        assert!(GeometryStructure::from_raw(0x128, 0).is_err());
    }
}
