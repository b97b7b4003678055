//! Container classification and file-format versioning.

use std::fmt;
use std::path::Path;

use crate::error::{OlbError, Result};

/// What kind of design a container holds, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A symbol/package library (`.OLB` or its backup `.OBK`).
    Library,
    /// A schematic design (`.DSN` or its backup `.DBK`).
    Schematic,
}

impl FileType {
    /// Classify a container by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "olb" | "obk" => Ok(Self::Library),
            "dsn" | "dbk" => Ok(Self::Schematic),
            _ => Err(OlbError::UnknownFileKind { extension }),
        }
    }
}

/// Layout revision of the stream format.
///
/// The revision is not stored anywhere in the container; it shows in how
/// geometry lists are framed (see the geometry readers).  `C` is the newest
/// and the default assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileFormatVersion {
    A,
    B,
    C,
}

impl Default for FileFormatVersion {
    fn default() -> Self {
        Self::C
    }
}

impl FileFormatVersion {
    /// Versions in the order they are attempted when none is forced:
    /// newest first.
    pub const FALLBACK_ORDER: [FileFormatVersion; 3] = [Self::C, Self::B, Self::A];
}

impl fmt::Display for FileFormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}
