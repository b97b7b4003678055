//! Component classification enums carried by directory and `$Types$` streams.

use crate::error::{OlbError, Result};

/// Kind marker attached to directory entries and type-list entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ComponentType {
    Cell = 0x01,
    View = 0x02,
    Part = 0x06,
    Graphic = 0x10,
    Package = 0x18,
    GlobalSymbol = 0x21,
    PortSymbol = 0x22,
    OffPageSymbol = 0x23,
    TitleBlockSymbol = 0x40,
    ErcSymbol = 0x4b,
    BookMarkSymbol = 0x4c,
    PinShapeSymbol = 0x62,
}

impl ComponentType {
    pub fn from_raw(raw: u16, offset: u64) -> Result<Self> {
        Ok(match raw {
            0x01 => Self::Cell,
            0x02 => Self::View,
            0x06 => Self::Part,
            0x10 => Self::Graphic,
            0x18 => Self::Package,
            0x21 => Self::GlobalSymbol,
            0x22 => Self::PortSymbol,
            0x23 => Self::OffPageSymbol,
            0x40 => Self::TitleBlockSymbol,
            0x4b => Self::ErcSymbol,
            0x4c => Self::BookMarkSymbol,
            0x62 => Self::PinShapeSymbol,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "ComponentType",
                    raw: raw as u32,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u16 {
        self as u16
    }

    /// All known component types.
    pub const ALL: [ComponentType; 12] = [
        Self::Cell,
        Self::View,
        Self::Part,
        Self::Graphic,
        Self::Package,
        Self::GlobalSymbol,
        Self::PortSymbol,
        Self::OffPageSymbol,
        Self::TitleBlockSymbol,
        Self::ErcSymbol,
        Self::BookMarkSymbol,
        Self::PinShapeSymbol,
    ];
}

/// How a part is implemented when descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImplementationType {
    #[default]
    None,
    SchematicView,
    Vhdl,
    Edif,
    Project,
    PSpiceModel,
    PSpiceStimulus,
    Verilog,
}

impl ImplementationType {
    pub fn from_raw(raw: u8, offset: u64) -> Result<Self> {
        Ok(match raw {
            0 => Self::None,
            1 => Self::SchematicView,
            2 => Self::Vhdl,
            3 => Self::Edif,
            4 => Self::Project,
            5 => Self::PSpiceModel,
            6 => Self::PSpiceStimulus,
            7 => Self::Verilog,
            _ => {
                return Err(OlbError::UnknownEnumValue {
                    kind: "ImplementationType",
                    raw: raw as u32,
                    offset,
                })
            }
        })
    }

    pub fn to_raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::SchematicView => 1,
            Self::Vhdl => 2,
            Self::Edif => 3,
            Self::Project => 4,
            Self::PSpiceModel => 5,
            Self::PSpiceStimulus => 6,
            Self::Verilog => 7,
        }
    }
}
