//! Symbol aggregates.

use super::pins::SymbolPin;
use super::properties::{Properties, SymbolDisplayProp};
use crate::geometry::GeometrySpecification;
use crate::types::Structure;

/// A named symbol shape record (global, port, off-page, ERC, pin-shape or
/// title-block symbol).  They all share a geometry-specification body; the
/// tag records which kind was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDef {
    pub kind: Structure,
    pub geometry: GeometrySpecification,
}

/// A fully parsed symbol stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Stream name inside `Symbols/`.
    pub name: String,
    pub properties: Properties,
    /// The shape kind the geometry was stored under.
    pub kind: Structure,
    pub geometry: GeometrySpecification,
    pub pins: Vec<SymbolPin>,
    pub display_props: Vec<SymbolDisplayProp>,
}

impl Symbol {
    /// Count of scalar pins.
    pub fn scalar_pin_count(&self) -> usize {
        self.pins
            .iter()
            .filter(|p| matches!(p, SymbolPin::Scalar(_)))
            .count()
    }
}
