//! Package aggregate.

use super::pins::PinIdxMapping;
use super::properties::{GeneralProperties, Properties2};

/// A fully parsed package stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Stream name inside `Packages/`.
    pub name: String,
    pub properties: Properties2,
    pub general: GeneralProperties,
    pub pin_mappings: Vec<PinIdxMapping>,
}

impl Package {
    /// Declared number of sections (units).
    pub fn section_count(&self) -> u16 {
        self.properties.section_count
    }
}
