//! # olbrust
//!
//! A pure Rust library for reading the proprietary binary container format
//! of OrCAD schematic designs and symbol libraries (`.OLB`/`.OBK` and
//! `.DSN`/`.DBK`).
//!
//! The format is undocumented; this implementation comes from reverse
//! engineering.  A container is a compound document of named byte streams,
//! each stream a sequence of length-prefixed, tagged, recursively nested
//! records.  Parsing materialises a typed object tree — [`Library`] with its
//! packages, symbols, pages, geometry, pins and properties — suitable for
//! further tooling.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use olbrust::{OlbParser, ParserConfiguration};
//!
//! // `extractor` opens the outer compound document (see `ContainerExtractor`).
//! let parser = OlbParser::new("sample.olb".as_ref(), &extractor, Default::default())?;
//! let outcome = parser.parse()?;
//!
//! for (name, symbol) in &outcome.library.symbols {
//!     println!("{name}: {} pins", symbol.pins.len());
//! }
//! println!("{}", outcome.report.summary());
//! # Ok::<(), olbrust::OlbError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`DataStream`] — positioned little-endian reader over one stream
//! - [`types`] — the enum catalogue of the format's tag tables
//! - [`RecordReader`] — prefixes, preambles, future-data checkpoints and one
//!   body reader per record kind
//! - [`io::olb::reader::stream_reader`] — per-stream-kind entry points
//! - [`OlbParser`] — walks the extracted tree and assembles the [`Library`]
//!
//! Streams that fail to parse abort only themselves: the run completes with
//! partial results and a per-stream failure report.
//!
//! [`DataStream`]: io::olb::DataStream
//! [`RecordReader`]: io::olb::reader::RecordReader

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod geometry;
pub mod io;
pub mod library;
pub mod notification;
pub mod records;
pub mod types;

// Re-export commonly used types
pub use error::{OlbError, Result};
pub use library::{Library, LibraryDirectories, TextFont};
pub use types::{
    Color, ComponentType, FileFormatVersion, FileType, FillStyle, HatchStyle, LineStyle,
    LineWidth, PinShape, PortType, Primitive, Rotation, Structure,
};

// Re-export the record tree
pub use records::{
    Package, Page, PinIdxMapping, Properties, Record, Schematic, Symbol, SymbolDisplayProp,
    SymbolPin,
};

// Re-export geometry
pub use geometry::{GeometryPrimitive, GeometrySpecification};

// Re-export I/O types
pub use io::container::ContainerExtractor;
pub use io::olb::reader::{OlbParser, ParseOutcome, ParseReport, ParserConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert!(lib.packages.is_empty());
        assert!(lib.str_lst.is_empty());
    }
}
