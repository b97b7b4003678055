//! Pin records.

use crate::types::{PinShape, PortType};

/// A single-net symbol pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPinScalar {
    pub name: String,
    /// Where the pin attaches to the symbol body.
    pub start_x: i32,
    pub start_y: i32,
    /// Where a wire connects.
    pub hotpt_x: i32,
    pub hotpt_y: i32,
    pub pin_shape: PinShape,
    pub port_type: PortType,
}

/// A bus-valued symbol pin.  Same stored layout as the scalar pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPinBus {
    pub name: String,
    pub start_x: i32,
    pub start_y: i32,
    pub hotpt_x: i32,
    pub hotpt_y: i32,
    pub pin_shape: PinShape,
    pub port_type: PortType,
}

/// Either flavour of symbol pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolPin {
    Scalar(SymbolPinScalar),
    Bus(SymbolPinBus),
}

impl SymbolPin {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(p) => &p.name,
            Self::Bus(p) => &p.name,
        }
    }
}

/// One pin-name entry of a [`PinIdxMapping`] with its separator tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinMapEntry {
    pub pin_name: String,
    /// One of `0x7F`, `0xAA`, `0xFF`.  Meaning not yet reverse-engineered.
    pub separator: u8,
}

/// Maps a package unit to its physical pin names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PinIdxMapping {
    pub unit_ref: String,
    pub ref_des: String,
    pub pin_map: Vec<PinMapEntry>,
}

impl PinIdxMapping {
    /// Pin names in order, without the separator tags.
    pub fn pin_names(&self) -> impl Iterator<Item = &str> {
        self.pin_map.iter().map(|e| e.pin_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_names() {
        let m = PinIdxMapping {
            unit_ref: "U1".into(),
            ref_des: "U?".into(),
            pin_map: vec![
                PinMapEntry { pin_name: "1".into(), separator: 0x7f },
                PinMapEntry { pin_name: "2".into(), separator: 0xaa },
            ],
        };
        let names: Vec<_> = m.pin_names().collect();
        assert_eq!(names, ["1", "2"]);
    }
}
