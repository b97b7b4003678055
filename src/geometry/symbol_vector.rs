//! Symbol vector primitive

use super::GeometryPrimitive;

/// A named, reusable group of primitives anchored at a location.
///
/// Unlike the other primitives this one nests: its body repeats a full
/// primitive-prefix/primitive pair `repetition` times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolVector {
    pub loc_x: i16,
    pub loc_y: i16,
    pub name: String,
    pub primitives: Vec<GeometryPrimitive>,
}

impl SymbolVector {
    /// Number of contained primitives.
    pub fn repetition(&self) -> usize {
        self.primitives.len()
    }
}
