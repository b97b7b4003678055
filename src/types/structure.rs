//! Record structure tags.
//!
//! Every record in a stream is identified by a one-byte structure tag that is
//! repeated inside its prefix.  Tags whose purpose is still unknown keep
//! their hex placeholder names (`T0x10`, `T0x1f`) until reverse-engineering
//! attaches a meaning.

use crate::error::{OlbError, Result};

/// The enumerated kind of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Structure {
    SthInPages0 = 0x02,
    TitleBlockSymbol = 0x03,
    Properties = 0x06,
    PartInst = 0x07,
    T0x10 = 0x10,
    WireScalar = 0x14,
    WireBus = 0x15,
    BusEntry = 0x17,
    T0x1f = 0x1f,
    PinIdxMapping = 0x20,
    GlobalSymbol = 0x21,
    PortSymbol = 0x22,
    OffPageSymbol = 0x23,
    ErcSymbol = 0x24,
    PinShapeSymbol = 0x25,
    Alias = 0x26,
    GraphicBoxInst = 0x37,
    GraphicCommentTextInst = 0x38,
    SymbolDisplayProp = 0x39,
    Properties2 = 0x3a,
    SymbolVector = 0x41,
    GeoDefinition = 0x42,
    SymbolPinScalar = 0x48,
    SymbolPinBus = 0x49,
    GeneralProperties = 0x4b,
}

impl Structure {
    /// Convert a raw tag byte into a `Structure`.
    ///
    /// Tags without a registered reader fail with
    /// [`OlbError::UnknownStructure`].
    pub fn from_raw(raw: u8, offset: u64) -> Result<Self> {
        Ok(match raw {
            0x02 => Self::SthInPages0,
            0x03 => Self::TitleBlockSymbol,
            0x06 => Self::Properties,
            0x07 => Self::PartInst,
            0x10 => Self::T0x10,
            0x14 => Self::WireScalar,
            0x15 => Self::WireBus,
            0x17 => Self::BusEntry,
            0x1f => Self::T0x1f,
            0x20 => Self::PinIdxMapping,
            0x21 => Self::GlobalSymbol,
            0x22 => Self::PortSymbol,
            0x23 => Self::OffPageSymbol,
            0x24 => Self::ErcSymbol,
            0x25 => Self::PinShapeSymbol,
            0x26 => Self::Alias,
            0x37 => Self::GraphicBoxInst,
            0x38 => Self::GraphicCommentTextInst,
            0x39 => Self::SymbolDisplayProp,
            0x3a => Self::Properties2,
            0x41 => Self::SymbolVector,
            0x42 => Self::GeoDefinition,
            0x48 => Self::SymbolPinScalar,
            0x49 => Self::SymbolPinBus,
            0x4b => Self::GeneralProperties,
            _ => return Err(OlbError::UnknownStructure { tag: raw, offset }),
        })
    }

    /// The raw tag byte for this structure.
    pub fn to_raw(self) -> u8 {
        self as u8
    }

    /// Whether this tag denotes one of the named symbol shapes that share a
    /// geometry-specification body.
    pub fn is_symbol_shape(self) -> bool {
        matches!(
            self,
            Self::GlobalSymbol
                | Self::PortSymbol
                | Self::OffPageSymbol
                | Self::ErcSymbol
                | Self::PinShapeSymbol
                | Self::TitleBlockSymbol
        )
    }

    /// All known structure tags, in tag order.
    pub const ALL: [Structure; 25] = [
        Self::SthInPages0,
        Self::TitleBlockSymbol,
        Self::Properties,
        Self::PartInst,
        Self::T0x10,
        Self::WireScalar,
        Self::WireBus,
        Self::BusEntry,
        Self::T0x1f,
        Self::PinIdxMapping,
        Self::GlobalSymbol,
        Self::PortSymbol,
        Self::OffPageSymbol,
        Self::ErcSymbol,
        Self::PinShapeSymbol,
        Self::Alias,
        Self::GraphicBoxInst,
        Self::GraphicCommentTextInst,
        Self::SymbolDisplayProp,
        Self::Properties2,
        Self::SymbolVector,
        Self::GeoDefinition,
        Self::SymbolPinScalar,
        Self::SymbolPinBus,
        Self::GeneralProperties,
    ];
}
