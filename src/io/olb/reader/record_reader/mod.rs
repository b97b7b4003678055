//! Record-level reading.
//!
//! [`RecordReader`] holds the per-stream parsing state: the data stream, the
//! library context for string/font lookups, the format version, the
//! future-data stack and the byte offset latched from the last standard
//! prefix.  The reading methods are grouped by concern:
//!
//! - `prefixes` — the three prefix forms, preambles, primitive prefixes
//! - `read_geometry` — leaf shapes and geometry specifications
//! - `read_properties` — property blocks and display properties
//! - `read_pins` — pins and pin-index mappings
//! - `read_instances` — wires, instances and page annotations
//! - `read_page` — the page composite

use ahash::AHashSet;

use crate::error::Result;
use crate::io::olb::data_stream::DataStream;
use crate::io::olb::future_data::FutureDataLst;
use crate::library::Library;
use crate::records::{Record, SymbolDef};
use crate::types::{FileFormatVersion, Structure};

mod prefixes;
mod read_geometry;
mod read_instances;
mod read_page;
mod read_pins;
mod read_properties;

pub use prefixes::{TypePrefix, LOCK_LOCKED, LOCK_UNLOCKED, PREAMBLE_MAGIC, SYMBOL_VECTOR_TAIL};

/// Reader for the records of one stream.
pub struct RecordReader<'a> {
    pub(crate) ds: &'a mut DataStream,
    pub(crate) lib: &'a Library,
    pub(crate) version: FileFormatVersion,
    pub(crate) futures: FutureDataLst,
    /// Byte offset of the most recent standard prefix; some record layouts
    /// branch on it.
    pub(crate) last_byte_offset: u32,
    /// Start offset of the prefix currently being read.
    prefix_start: u64,
    /// Out-of-table `length_or_lock` values already reported.
    seen_locks: AHashSet<u32>,
}

impl<'a> RecordReader<'a> {
    /// Create a reader over `ds` with the given library context.
    pub fn new(ds: &'a mut DataStream, lib: &'a Library, version: FileFormatVersion) -> Self {
        Self {
            ds,
            lib,
            version,
            futures: FutureDataLst::new(),
            last_byte_offset: 0,
            prefix_start: 0,
            seen_locks: AHashSet::new(),
        }
    }

    /// The format version branches are taken under.
    pub fn version(&self) -> FileFormatVersion {
        self.version
    }

    /// Dispatch to the body reader for `tag`.
    ///
    /// The caller has already consumed the record's prefix and conditional
    /// preamble.
    pub fn parse_structure(&mut self, tag: Structure) -> Result<Record> {
        Ok(match tag {
            Structure::Properties => Record::Properties(self.read_properties()?),
            Structure::Properties2 => Record::Properties2(self.read_properties2()?),
            Structure::GeneralProperties => {
                Record::GeneralProperties(self.read_general_properties()?)
            }
            Structure::SymbolDisplayProp => {
                Record::SymbolDisplayProp(self.read_symbol_display_prop()?)
            }
            Structure::SymbolPinScalar => Record::SymbolPinScalar(self.read_symbol_pin_scalar()?),
            Structure::SymbolPinBus => Record::SymbolPinBus(self.read_symbol_pin_bus()?),
            Structure::PinIdxMapping => Record::PinIdxMapping(self.read_pin_idx_mapping()?),
            Structure::PartInst => Record::PartInst(self.read_part_inst()?),
            Structure::WireScalar => Record::WireScalar(self.read_wire_scalar()?),
            Structure::WireBus => Record::WireBus(self.read_wire_bus()?),
            Structure::Alias => Record::Alias(self.read_alias()?),
            Structure::GraphicBoxInst => Record::GraphicBoxInst(self.read_graphic_box_inst()?),
            Structure::GraphicCommentTextInst => {
                Record::GraphicCommentTextInst(self.read_graphic_comment_text_inst()?)
            }
            Structure::BusEntry => Record::BusEntry(self.read_bus_entry()?),
            Structure::T0x10 => Record::T0x10(self.read_t0x10()?),
            Structure::T0x1f => Record::T0x1f(self.read_t0x1f()?),
            Structure::SthInPages0 => Record::SthInPages0(self.read_sth_in_pages0()?),
            Structure::GlobalSymbol
            | Structure::PortSymbol
            | Structure::OffPageSymbol
            | Structure::ErcSymbol
            | Structure::PinShapeSymbol
            | Structure::TitleBlockSymbol => Record::SymbolDef(SymbolDef {
                kind: tag,
                geometry: self.read_geometry_specification()?,
            }),
            Structure::GeoDefinition => {
                Record::GeoDefinition(self.read_geometry_specification()?)
            }
            Structure::SymbolVector => Record::SymbolVector(self.read_symbol_vector()?),
        })
    }

    /// Read one full record: standard prefix, conditional preamble, body,
    /// then drain and close the record's declared extent.
    ///
    /// `expected` limits the acceptable tags; an empty slice accepts any.
    pub fn read_record(&mut self, expected: &[Structure]) -> Result<Record> {
        let prefix = self.read_type_prefix(expected)?;
        self.read_conditional_preamble(prefix.tag)?;
        let record = self.parse_structure(prefix.tag)?;
        self.futures
            .expect_end(self.ds, &format!("{:?} record tail", prefix.tag))?;
        Ok(record)
    }

    /// Close out a stream: every checkpoint closed and every byte consumed.
    pub fn finish(&mut self) -> Result<()> {
        if !self.futures.is_empty() {
            return Err(crate::error::OlbError::InvariantViolated {
                what: "open future-data checkpoints at stream end",
                offset: self.ds.current_offset(),
            });
        }
        self.ds.expect_eof()
    }
}
