//! The prefix forms that precede records.
//!
//! Three variants exist.  The short form carries the tag, a lock marker and
//! an attribute pair list.  The long form wraps a short form behind a
//! reserved region.  The standard form wraps a short form behind the byte
//! offset to the next sibling prefix, which doubles as the record's declared
//! extent (see [`FutureDataLst`]).
//!
//! [`FutureDataLst`]: crate::io::olb::future_data::FutureDataLst

use ahash::AHashSet;
use once_cell::sync::Lazy;

use crate::error::{OlbError, Result};
use crate::io::olb::future_data::FutureData;
use crate::notification::NotificationType;
use crate::types::{GeometryStructure, Primitive, Structure};

use super::RecordReader;

/// The four magic bytes that open every preamble.
pub const PREAMBLE_MAGIC: [u8; 4] = [0xff, 0xe4, 0x5c, 0x39];

/// Tail asserted at the end of every symbol-vector body.
pub const SYMBOL_VECTOR_TAIL: [u8; 12] = [
    0x00, 0x00, 0x00, 0x00, 0x32, 0x00, 0x32, 0x00, 0x00, 0x00, 0x02, 0x00,
];

/// `length_or_lock` value of an unlocked record.
pub const LOCK_UNLOCKED: u32 = 0x0b;
/// `length_or_lock` value of a locked record.
pub const LOCK_LOCKED: u32 = 0x1e;

/// Structures whose records are stored without a preamble.
static PREAMBLE_EXEMPT: Lazy<AHashSet<Structure>> = Lazy::new(|| {
    [
        Structure::GeoDefinition,
        Structure::SymbolPinBus,
        Structure::GlobalSymbol,
        Structure::PortSymbol,
        Structure::SymbolVector,
        Structure::TitleBlockSymbol,
        Structure::ErcSymbol,
        Structure::PinShapeSymbol,
    ]
    .into_iter()
    .collect()
});

/// A decoded record prefix.
#[derive(Debug, Clone)]
pub struct TypePrefix {
    pub tag: Structure,
    /// Raw `length_or_lock` word of the inner short form.
    pub lock: u32,
    /// Name/value pairs resolved through the library string table.
    pub attributes: Vec<(String, String)>,
    /// Distance to the next sibling prefix; standard form only.
    pub byte_offset: Option<u32>,
}

impl TypePrefix {
    /// Whether the record was stored locked.
    pub fn is_locked(&self) -> bool {
        self.lock == LOCK_LOCKED
    }
}

/// Fields shared by all prefix forms before tag interpretation.
struct RawShortPrefix {
    tag: u8,
    lock: u32,
    attributes: Vec<(String, String)>,
}

impl RecordReader<'_> {
    /// Read the short prefix form at the current offset, without
    /// interpreting the tag.
    fn read_short_prefix_raw(&mut self) -> Result<RawShortPrefix> {
        let tag = self.ds.read_u8()?;

        let lock_offset = self.ds.current_offset();
        let lock = self.ds.read_u32()?;
        if lock != LOCK_UNLOCKED && lock != LOCK_LOCKED && self.seen_locks.insert(lock) {
            log::warn!(
                "{}: unexpected length_or_lock value {:#x} at {:#x}",
                self.ds.name(),
                lock,
                lock_offset
            );
            self.ds.note_at(
                NotificationType::Tolerated,
                lock_offset,
                format!("length_or_lock value {lock:#x} outside observed table"),
            );
        }

        self.ds.print_unknown(4, "short prefix reserved")?;

        let rep_offset = self.ds.current_offset();
        let rep = self.ds.read_u8()?;
        if rep != tag {
            return Err(OlbError::TagMismatch {
                offset: rep_offset,
                first: tag,
                repeat: rep,
            });
        }

        // size < 0 carries no pairs and behaves like 0.
        let size = self.ds.read_i16()?;
        let mut attributes = Vec::new();
        for _ in 0..size.max(0) {
            let pair_offset = self.ds.current_offset();
            let name_idx = self.ds.read_u32()?;
            let value_idx = self.ds.read_u32()?;
            attributes.push((
                self.lib.get_str(name_idx, pair_offset)?,
                self.lib.get_str(value_idx, pair_offset)?,
            ));
        }

        Ok(RawShortPrefix {
            tag,
            lock,
            attributes,
        })
    }

    fn check_expected(&self, tag: Structure, expected: &[Structure], offset: u64) -> Result<()> {
        if !expected.is_empty() && !expected.contains(&tag) {
            return Err(OlbError::InvariantViolated {
                what: "record tag outside expected set",
                offset,
            });
        }
        Ok(())
    }

    /// Read a short-form prefix.
    pub fn read_type_prefix_short(&mut self, expected: &[Structure]) -> Result<TypePrefix> {
        let offset = self.ds.current_offset();
        let raw = self.read_short_prefix_raw()?;
        let tag = Structure::from_raw(raw.tag, offset)?;
        self.check_expected(tag, expected, offset)?;
        Ok(TypePrefix {
            tag,
            lock: raw.lock,
            attributes: raw.attributes,
            byte_offset: None,
        })
    }

    /// Read a long-form prefix: tag, reserved region, then the short form
    /// repeating the same tag.
    pub fn read_type_prefix_long(&mut self, expected: &[Structure]) -> Result<TypePrefix> {
        let offset = self.ds.current_offset();
        let tag = self.ds.read_u8()?;
        self.ds.print_unknown(2, "long prefix reserved")?;
        self.ds.assume_bytes(&[0u8; 6])?;

        let raw = self.read_short_prefix_raw()?;
        if raw.tag != tag {
            return Err(OlbError::TagMismatch {
                offset,
                first: tag,
                repeat: raw.tag,
            });
        }
        let tag = Structure::from_raw(tag, offset)?;
        self.check_expected(tag, expected, offset)?;
        Ok(TypePrefix {
            tag,
            lock: raw.lock,
            attributes: raw.attributes,
            byte_offset: None,
        })
    }

    /// Read a standard-form prefix and open its future-data checkpoint.
    ///
    /// The byte offset states the distance from the end of the short form to
    /// the next standard prefix at this nesting; it is also latched on the
    /// reader for layout branches that key on it.
    pub fn read_type_prefix(&mut self, expected: &[Structure]) -> Result<TypePrefix> {
        let (raw_tag, byte_offset, raw) = self.read_standard_prefix_raw()?;
        let offset = self.prefix_start;
        let tag = Structure::from_raw(raw_tag, offset)?;
        self.check_expected(tag, expected, offset)?;
        Ok(TypePrefix {
            tag,
            lock: raw.lock,
            attributes: raw.attributes,
            byte_offset: Some(byte_offset),
        })
    }

    /// Read a standard-form prefix whose tag is a geometry shape rather than
    /// a structure (version `B` repeats one between list primitives).
    pub fn read_geometry_type_prefix(&mut self) -> Result<GeometryStructure> {
        let (raw_tag, _, _) = self.read_standard_prefix_raw()?;
        GeometryStructure::from_raw(raw_tag as u16, self.prefix_start)
    }

    fn read_standard_prefix_raw(&mut self) -> Result<(u8, u32, RawShortPrefix)> {
        let offset = self.ds.current_offset();
        self.prefix_start = offset;
        let tag = self.ds.read_u8()?;
        let byte_offset = self.ds.read_u32()?;
        self.ds.assume_bytes(&[0u8; 4])?;

        let raw = self.read_short_prefix_raw()?;
        if raw.tag != tag {
            return Err(OlbError::TagMismatch {
                offset,
                first: tag,
                repeat: raw.tag,
            });
        }

        let end_of_short = self.ds.current_offset();
        self.futures.push(FutureData {
            start: end_of_short,
            end: end_of_short + byte_offset as u64,
        });
        self.last_byte_offset = byte_offset;
        Ok((tag, byte_offset, raw))
    }

    /// Read a preamble: the magic bytes, then the optional-length word and
    /// that many opaque lock bytes.  Returns the optional length.
    pub fn read_preamble(&mut self) -> Result<u32> {
        self.ds.assume_bytes(&PREAMBLE_MAGIC)?;
        let optional_len = self.ds.read_u32()?;
        if optional_len > 0 {
            self.ds
                .print_unknown(optional_len as usize, "preamble lock data")?;
        }
        Ok(optional_len)
    }

    /// Consume a preamble if records of this structure carry one.
    pub fn read_conditional_preamble(&mut self, tag: Structure) -> Result<Option<u32>> {
        if PREAMBLE_EXEMPT.contains(&tag) {
            Ok(None)
        } else {
            self.read_preamble().map(Some)
        }
    }

    /// Skip forward until the next four bytes are the preamble magic.
    /// Returns how many bytes were discarded.
    pub fn discard_until_preamble(&mut self) -> Result<usize> {
        let start = self.ds.current_offset();
        let mut discarded = 0usize;
        while self.ds.peek_raw(4)? != PREAMBLE_MAGIC {
            self.ds.read_u8()?;
            discarded += 1;
        }
        if discarded > 0 {
            self.ds.note_at(
                NotificationType::UnknownData,
                start,
                format!("{discarded} bytes before preamble"),
            );
        }
        Ok(discarded)
    }

    /// Read a primitive prefix: the kind byte, a zero, and the kind byte
    /// repeated.
    pub fn read_primitive_prefix(&mut self) -> Result<Primitive> {
        let offset = self.ds.current_offset();
        let kind = self.ds.read_u8()?;
        self.ds.assume_bytes(&[0x00])?;
        let rep_offset = self.ds.current_offset();
        let rep = self.ds.read_u8()?;
        if rep != kind {
            return Err(OlbError::TagMismatch {
                offset: rep_offset,
                first: kind,
                repeat: rep,
            });
        }
        Primitive::from_raw(kind, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::olb::data_stream::DataStream;
    use crate::library::Library;
    use crate::types::FileFormatVersion;

    fn short_prefix_bytes(tag: u8, lock: u32, size: i16) -> Vec<u8> {
        let mut b = vec![tag];
        b.extend(lock.to_le_bytes());
        b.extend([0u8; 4]);
        b.push(tag);
        b.extend(size.to_le_bytes());
        b
    }

    #[test]
    fn test_short_prefix() {
        let mut data = short_prefix_bytes(Structure::Properties.to_raw(), LOCK_UNLOCKED, 0);
        data.push(0xee); // trailing byte the prefix must not consume
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        let p = rr.read_type_prefix_short(&[Structure::Properties]).unwrap();
        assert_eq!(p.tag, Structure::Properties);
        assert!(!p.is_locked());
        assert!(p.attributes.is_empty());
        assert_eq!(rr.ds.read_u8().unwrap(), 0xee);
    }

    #[test]
    fn test_short_prefix_negative_size_is_empty() {
        let data = short_prefix_bytes(Structure::PinIdxMapping.to_raw(), LOCK_LOCKED, -1);
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        let p = rr.read_type_prefix_short(&[]).unwrap();
        assert!(p.is_locked());
        assert!(p.attributes.is_empty());
        assert!(rr.ds.is_eof());
    }

    #[test]
    fn test_short_prefix_attribute_pairs() {
        let mut data = short_prefix_bytes(Structure::PartInst.to_raw(), LOCK_UNLOCKED, 1);
        data.extend(1u32.to_le_bytes());
        data.extend(2u32.to_le_bytes());
        let mut ds = DataStream::new("t", data);
        let lib = Library {
            str_lst: vec!["Value".into(), "10k".into()],
            ..Default::default()
        };
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        let p = rr.read_type_prefix_short(&[]).unwrap();
        assert_eq!(p.attributes, vec![("Value".to_string(), "10k".to_string())]);
    }

    #[test]
    fn test_tag_mismatch() {
        let mut data = vec![Structure::Properties.to_raw()];
        data.extend(LOCK_UNLOCKED.to_le_bytes());
        data.extend([0u8; 4]);
        data.push(Structure::PartInst.to_raw());
        data.extend(0i16.to_le_bytes());
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert!(matches!(
            rr.read_type_prefix_short(&[]).unwrap_err(),
            OlbError::TagMismatch { .. }
        ));
    }

    #[test]
    fn test_standard_prefix_opens_checkpoint() {
        let tag = Structure::WireScalar.to_raw();
        let mut data = vec![tag];
        data.extend(0x3du32.to_le_bytes());
        data.extend([0u8; 4]);
        data.extend(short_prefix_bytes(tag, LOCK_UNLOCKED, 0));
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        let p = rr.read_type_prefix(&[Structure::WireScalar]).unwrap();
        assert_eq!(p.byte_offset, Some(0x3d));
        assert_eq!(rr.last_byte_offset, 0x3d);
        assert_eq!(rr.futures.len(), 1);
        let end_of_short = rr.ds.current_offset();
        assert_eq!(
            rr.futures.remaining_until_next(end_of_short),
            Some(0x3d)
        );
    }

    #[test]
    fn test_long_prefix() {
        let tag = Structure::Properties2.to_raw();
        let mut data = vec![tag, 0xaa, 0xbb];
        data.extend([0u8; 6]);
        data.extend(short_prefix_bytes(tag, LOCK_UNLOCKED, 0));
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        let p = rr.read_type_prefix_long(&[Structure::Properties2]).unwrap();
        assert_eq!(p.tag, Structure::Properties2);
        assert!(rr.futures.is_empty());
    }

    #[test]
    fn test_unexpected_tag_in_set() {
        let data = short_prefix_bytes(Structure::Alias.to_raw(), LOCK_UNLOCKED, 0);
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert!(matches!(
            rr.read_type_prefix_short(&[Structure::Properties]).unwrap_err(),
            OlbError::InvariantViolated { what: "record tag outside expected set", .. }
        ));
    }

    #[test]
    fn test_preamble_with_lock_data() {
        let mut data = PREAMBLE_MAGIC.to_vec();
        data.extend(3u32.to_le_bytes());
        data.extend([0xde, 0xad, 0xbe]);
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert_eq!(rr.read_preamble().unwrap(), 3);
        assert!(rr.ds.is_eof());
    }

    #[test]
    fn test_preamble_bad_magic() {
        let mut data = vec![0xff, 0xe4, 0x5c, 0x38];
        data.extend(0u32.to_le_bytes());
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert!(matches!(
            rr.read_preamble().unwrap_err(),
            OlbError::MagicMismatch { offset: 0, .. }
        ));
    }

    #[test]
    fn test_conditional_preamble_exempt() {
        let mut ds = DataStream::new("t", Vec::new());
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        // Exempt structures must not touch the stream at all.
        assert_eq!(
            rr.read_conditional_preamble(Structure::GlobalSymbol).unwrap(),
            None
        );
    }

    #[test]
    fn test_primitive_prefix() {
        let mut ds = DataStream::new("t", vec![0x29, 0x00, 0x29]);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert_eq!(rr.read_primitive_prefix().unwrap(), Primitive::Line);
    }

    #[test]
    fn test_primitive_prefix_kind_mismatch() {
        let mut ds = DataStream::new("t", vec![0x29, 0x00, 0x2a]);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert!(matches!(
            rr.read_primitive_prefix().unwrap_err(),
            OlbError::TagMismatch { first: 0x29, repeat: 0x2a, .. }
        ));
    }

    #[test]
    fn test_discard_until_preamble() {
        let mut data = vec![0x01, 0x02, 0x03];
        data.extend(PREAMBLE_MAGIC);
        data.extend(0u32.to_le_bytes());
        let mut ds = DataStream::new("t", data);
        let lib = Library::new();
        let mut rr = RecordReader::new(&mut ds, &lib, FileFormatVersion::C);
        assert_eq!(rr.discard_until_preamble().unwrap(), 3);
        assert_eq!(rr.read_preamble().unwrap(), 0);
    }
}
