//! Per-view design streams: schematic, hierarchy, root design stream.

/// A parsed `Schematic.bin` stream: the page roster of one view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schematic {
    /// View directory name inside `Views/`.
    pub name: String,
    pub page_names: Vec<String>,
}

/// One flattened net of a hierarchy stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNet {
    pub name: String,
}

/// A parsed `Hierarchy.bin` stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hierarchy {
    pub name: String,
    pub nets: Vec<HierarchyNet>,
}

/// The root design stream of a `.DSN` container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DsnStream {
    pub introduction: String,
    pub create_date: u32,
    pub modify_date: u32,
}
