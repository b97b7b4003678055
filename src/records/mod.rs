//! Typed record tree.
//!
//! Every stream decomposes into records; [`Record`] is the tagged sum the
//! central dispatcher produces, keyed by [`Structure`].
//!
//! [`Structure`]: crate::types::Structure

pub mod directory;
pub mod instances;
pub mod package;
pub mod page;
pub mod pins;
pub mod properties;
pub mod schematic;
pub mod symbols;

pub use directory::{AdminData, DirectoryEntry, DirectoryStream, NetBundle, NetBundleMap, TypeEntry};
pub use instances::{
    Alias, BusEntry, GraphicBoxInst, GraphicCommentTextInst, PartInst, SthInPages0, T0x10, T0x1f,
    WireBus, WireScalar,
};
pub use package::Package;
pub use page::Page;
pub use pins::{PinIdxMapping, PinMapEntry, SymbolPin, SymbolPinBus, SymbolPinScalar};
pub use properties::{GeneralProperties, Properties, Properties2, SymbolDisplayProp};
pub use schematic::{DsnStream, Hierarchy, HierarchyNet, Schematic};
pub use symbols::{Symbol, SymbolDef};

use crate::geometry::{GeometrySpecification, SymbolVector};
use crate::types::Structure;

/// One parsed record, tagged by its [`Structure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Properties(Properties),
    Properties2(Properties2),
    GeneralProperties(GeneralProperties),
    SymbolDisplayProp(SymbolDisplayProp),
    SymbolPinScalar(SymbolPinScalar),
    SymbolPinBus(SymbolPinBus),
    PinIdxMapping(PinIdxMapping),
    PartInst(PartInst),
    WireScalar(WireScalar),
    WireBus(WireBus),
    Alias(Alias),
    GraphicBoxInst(GraphicBoxInst),
    GraphicCommentTextInst(GraphicCommentTextInst),
    BusEntry(BusEntry),
    T0x10(T0x10),
    T0x1f(T0x1f),
    SthInPages0(SthInPages0),
    SymbolDef(SymbolDef),
    GeoDefinition(GeometrySpecification),
    SymbolVector(SymbolVector),
}

impl Record {
    /// The structure tag this record was stored under.
    pub fn structure(&self) -> Structure {
        match self {
            Self::Properties(_) => Structure::Properties,
            Self::Properties2(_) => Structure::Properties2,
            Self::GeneralProperties(_) => Structure::GeneralProperties,
            Self::SymbolDisplayProp(_) => Structure::SymbolDisplayProp,
            Self::SymbolPinScalar(_) => Structure::SymbolPinScalar,
            Self::SymbolPinBus(_) => Structure::SymbolPinBus,
            Self::PinIdxMapping(_) => Structure::PinIdxMapping,
            Self::PartInst(_) => Structure::PartInst,
            Self::WireScalar(_) => Structure::WireScalar,
            Self::WireBus(_) => Structure::WireBus,
            Self::Alias(_) => Structure::Alias,
            Self::GraphicBoxInst(_) => Structure::GraphicBoxInst,
            Self::GraphicCommentTextInst(_) => Structure::GraphicCommentTextInst,
            Self::BusEntry(_) => Structure::BusEntry,
            Self::T0x10(_) => Structure::T0x10,
            Self::T0x1f(_) => Structure::T0x1f,
            Self::SthInPages0(_) => Structure::SthInPages0,
            Self::SymbolDef(def) => def.kind,
            Self::GeoDefinition(_) => Structure::GeoDefinition,
            Self::SymbolVector(_) => Structure::SymbolVector,
        }
    }
}
