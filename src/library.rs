//! The library document structure

use indexmap::IndexMap;

use crate::error::{OlbError, Result};
use crate::records::{
    AdminData, DirectoryStream, DsnStream, Hierarchy, NetBundleMap, Package, Page, Schematic,
    Symbol, TypeEntry,
};

/// A text font of the library-wide font table.
///
/// The container stores these as a LOGFONT-style block followed by the face
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFont {
    pub height: i32,
    pub width: i32,
    pub escapement: i32,
    pub weight: i32,
    pub italic: bool,
    pub font_name: String,
}

/// The directory listings of a container, one per folder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryDirectories {
    pub export_blocks: DirectoryStream,
    pub graphics: DirectoryStream,
    pub packages: DirectoryStream,
    pub parts: DirectoryStream,
    pub symbols: DirectoryStream,
    /// Absent in older containers.
    pub cells: Option<DirectoryStream>,
    pub views: DirectoryStream,
}

/// The root object a parsing run produces.
///
/// Populated stream by stream; streams that fail to parse leave their slots
/// at the default and are reported through the parse report instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Library {
    /// Banner string of the `Library` stream.
    pub introduction: String,
    /// POSIX seconds.
    pub create_date: u32,
    /// POSIX seconds.
    pub modify_date: u32,

    /// Global string table.  Records address it 1-based; index 0 is the
    /// empty string.
    pub str_lst: Vec<String>,
    /// Global text-font table.
    pub text_fonts: Vec<TextFont>,

    pub admin_data: Option<AdminData>,
    pub net_bundle_map: Option<NetBundleMap>,
    pub dsn_stream: Option<DsnStream>,

    /// `Graphics/$Types$` entries.
    pub graphics_types: Vec<TypeEntry>,
    /// `Symbols/$Types$` entries.
    pub symbols_types: Vec<TypeEntry>,
    /// `Cache` entries.
    pub cache: Vec<TypeEntry>,

    pub directories: LibraryDirectories,

    /// Packages by name, in parse order.
    pub packages: IndexMap<String, Package>,
    /// Symbols by name, in parse order.
    pub symbols: IndexMap<String, Symbol>,

    pub schematics: Vec<Schematic>,
    pub hierarchies: Vec<Hierarchy>,
    pub pages: Vec<Page>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a 1-based string-table index.
    ///
    /// Index 0 means "empty string"; index `k > 0` addresses element
    /// `k - 1`.  Out-of-range indices violate the format.
    pub fn get_str(&self, idx: u32, offset: u64) -> Result<String> {
        if idx == 0 {
            return Ok(String::new());
        }
        self.str_lst
            .get(idx as usize - 1)
            .cloned()
            .ok_or(OlbError::InvariantViolated {
                what: "string table index out of range",
                offset,
            })
    }

    /// Number of fonts in the text-font table.
    pub fn font_count(&self) -> usize {
        self.text_fonts.len()
    }
}
