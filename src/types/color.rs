//! Color table used by schematic objects.

use std::fmt;

use crate::error::{OlbError, Result};

/// An entry of the fixed 16-color palette, plus the tool's "default" slot
/// that resolves to the session color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    LightGray,
    DarkGray,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,
    Default,
}

impl Default for Color {
    fn default() -> Self {
        Self::Default
    }
}

impl Color {
    pub fn from_raw(raw: u32, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGray,
            8 => Self::DarkGray,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::LightMagenta,
            14 => Self::Yellow,
            15 => Self::White,
            16 => Self::Default,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "Color",
                    raw,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::Black => 0,
            Self::Blue => 1,
            Self::Green => 2,
            Self::Cyan => 3,
            Self::Red => 4,
            Self::Magenta => 5,
            Self::Brown => 6,
            Self::LightGray => 7,
            Self::DarkGray => 8,
            Self::LightBlue => 9,
            Self::LightGreen => 10,
            Self::LightCyan => 11,
            Self::LightRed => 12,
            Self::LightMagenta => 13,
            Self::Yellow => 14,
            Self::White => 15,
            Self::Default => 16,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Red => "Red",
            Self::Magenta => "Magenta",
            Self::Brown => "Brown",
            Self::LightGray => "LightGray",
            Self::DarkGray => "DarkGray",
            Self::LightBlue => "LightBlue",
            Self::LightGreen => "LightGreen",
            Self::LightCyan => "LightCyan",
            Self::LightRed => "LightRed",
            Self::LightMagenta => "LightMagenta",
            Self::Yellow => "Yellow",
            Self::White => "White",
            Self::Default => "Default",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for raw in 0..=16 {
            assert_eq!(Color::from_raw(raw, 0).unwrap().to_raw(), raw);
        }
    }

    #[test]
    fn test_unknown() {
        let err = Color::from_raw(17, 0x8).unwrap_err();
        assert!(matches!(
            err,
            OlbError::UnknownEnumValue { kind: "Color", raw: 17, offset: 0x8 }
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::LightMagenta.to_string(), "LightMagenta");
    }
}
