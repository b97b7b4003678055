//! Shared helpers: a byte-stream builder for synthetic records and writers
//! for whole extracted container trees.
//!
//! The builders mirror the stored layouts the readers expect; every test
//! corpus in this suite is produced through them.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Preamble magic.
pub const MAGIC: [u8; 4] = [0xff, 0xe4, 0x5c, 0x39];

/// Structure tags used by the builders.
pub mod tags {
    pub const STH_IN_PAGES0: u8 = 0x02;
    pub const PROPERTIES: u8 = 0x06;
    pub const PART_INST: u8 = 0x07;
    pub const WIRE_SCALAR: u8 = 0x14;
    pub const PIN_IDX_MAPPING: u8 = 0x20;
    pub const GLOBAL_SYMBOL: u8 = 0x21;
    pub const ALIAS: u8 = 0x26;
    pub const SYMBOL_DISPLAY_PROP: u8 = 0x39;
    pub const PROPERTIES2: u8 = 0x3a;
    pub const SYMBOL_PIN_SCALAR: u8 = 0x48;
    pub const GENERAL_PROPERTIES: u8 = 0x4b;
    pub const LINE_PRIMITIVE: u8 = 0x29;
}

/// Byte-stream builder.
#[derive(Default)]
pub struct StreamBuilder {
    buf: Vec<u8>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.buf.extend(v.to_le_bytes());
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.buf.extend(v.to_le_bytes());
        self
    }

    pub fn i16(&mut self, v: i16) -> &mut Self {
        self.buf.extend(v.to_le_bytes());
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend(v.to_le_bytes());
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend(bytes);
        self
    }

    pub fn zeros(&mut self, n: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat(0u8).take(n));
        self
    }

    pub fn zstr(&mut self, s: &str) -> &mut Self {
        self.buf.extend(s.as_bytes());
        self.buf.push(0);
        self
    }

    /// Preamble with an empty optional-length tail.
    pub fn preamble(&mut self) -> &mut Self {
        self.raw(&MAGIC).u32(0)
    }

    /// Short prefix with no attribute pairs.
    pub fn short_prefix(&mut self, tag: u8) -> &mut Self {
        self.u8(tag).u32(0x0b).zeros(4).u8(tag).i16(0)
    }

    /// Long prefix wrapping a pair-less short form.
    pub fn long_prefix(&mut self, tag: u8) -> &mut Self {
        self.u8(tag).zeros(2).zeros(6).short_prefix(tag)
    }

    /// Standard prefix declaring `byte_offset` bytes of record extent.
    pub fn standard_prefix(&mut self, tag: u8, byte_offset: u32) -> &mut Self {
        self.u8(tag).u32(byte_offset).zeros(4).short_prefix(tag)
    }

    /// Primitive prefix.
    pub fn primitive_prefix(&mut self, kind: u8) -> &mut Self {
        self.u8(kind).u8(0).u8(kind)
    }
}

/// A version-C line primitive body (coordinates plus the two style words).
pub fn line_primitive_body(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.i32(x1).i32(y1).i32(x2).i32(y2);
    b.u32(0); // Solid
    b.u32(3); // Default width
    b.finish()
}

/// A standard-prefixed scalar-pin record as stored in a symbol stream.
pub fn pin_record(name: &str, coords: [i32; 4], shape: u16, port: u32) -> Vec<u8> {
    let mut body = StreamBuilder::new();
    body.preamble();
    body.zstr(name);
    for c in coords {
        body.i32(c);
    }
    body.u16(shape).zeros(2).u32(port).zeros(6);
    let body = body.finish();

    let mut b = StreamBuilder::new();
    b.standard_prefix(tags::SYMBOL_PIN_SCALAR, body.len() as u32);
    b.raw(&body);
    b.finish()
}

/// A short-prefixed display-property entry.
pub fn display_prop_entry(name_idx: u32, x: i16, y: i16, packed: u16, color: u8) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.short_prefix(tags::SYMBOL_DISPLAY_PROP);
    b.preamble();
    b.u32(name_idx).i16(x).i16(y).u16(packed).u8(color).zeros(2).u8(0);
    b.finish()
}

/// A complete symbol stream: properties, a one-line global-symbol geometry,
/// the given pins and display-property entries.
pub fn symbol_stream(name: &str, pins: &[Vec<u8>], display_props: &[Vec<u8>]) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.preamble();

    b.long_prefix(tags::PROPERTIES);
    b.preamble();
    b.zstr("U?").zeros(3).u16(1).zstr(name).zeros(29);

    b.long_prefix(tags::GLOBAL_SYMBOL);
    b.zstr(&format!("{name}.Normal"));
    b.u16(1);
    b.primitive_prefix(tags::LINE_PRIMITIVE);
    b.raw(&line_primitive_body(0, 0, 100, 0));

    b.u16(pins.len() as u16);
    for pin in pins {
        b.raw(pin);
    }
    b.u16(display_props.len() as u16);
    for dp in display_props {
        b.raw(dp);
    }
    b.finish()
}

/// A symbol stream whose geometry prefix carries an unregistered tag.
pub fn broken_symbol_stream(name: &str) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.preamble();
    b.long_prefix(tags::PROPERTIES);
    b.preamble();
    b.zstr("U?").zeros(3).u16(1).zstr(name).zeros(29);
    b.long_prefix(0x7e); // no reader registered for this tag
    b.finish()
}

/// A complete package stream.
pub fn package_stream(
    name: &str,
    footprint: &str,
    sections: u16,
    mappings: &[(&str, &[(&str, u8)])],
) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.preamble();

    b.long_prefix(tags::PROPERTIES2);
    b.preamble();
    b.zstr(name).zstr("U?").zstr(footprint).u16(sections);

    b.long_prefix(tags::GENERAL_PROPERTIES);
    b.preamble();
    b.zstr("").zstr("").zstr("U").zstr(name);
    b.u8(0x05); // pin names and numbers visible
    b.u8(0x00); // no implementation

    b.u16(mappings.len() as u16);
    for (unit_ref, pin_map) in mappings {
        b.long_prefix(tags::PIN_IDX_MAPPING);
        b.preamble();
        b.zstr(unit_ref).zstr("U?").u16(pin_map.len() as u16);
        for (pin_name, separator) in *pin_map {
            b.zstr(pin_name).u8(*separator);
        }
    }
    b.finish()
}

/// A directory-listing stream.
pub fn directory_stream(entries: &[(&str, u16, u16)]) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.u32(1_600_000_000);
    b.u16(entries.len() as u16);
    for (name, component_type, stream_version) in entries {
        b.zstr(name).u16(*component_type).u16(*stream_version);
    }
    b.finish()
}

/// A `Library.bin` stream with the given strings and `font_count` default
/// fonts.
pub fn library_stream(strings: &[&str], font_count: usize) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.zstr("Converted by olbrust test corpus");
    b.u32(1_600_000_000).u32(1_600_000_001);
    b.zeros(4);
    b.u32(strings.len() as u32);
    for s in strings {
        b.zstr(s);
    }
    b.u16(font_count as u16);
    for _ in 0..font_count {
        b.i32(30).i32(0).i32(0).i32(400);
        b.u8(0);
        b.zstr("Courier New");
    }
    b.finish()
}

/// A `Schematic.bin` stream.
pub fn schematic_stream(page_names: &[&str]) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.preamble();
    b.zeros(4);
    b.u16(page_names.len() as u16);
    for name in page_names {
        b.zstr(name);
    }
    b.finish()
}

/// A `Hierarchy.bin` stream.
pub fn hierarchy_stream(nets: &[&str]) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.preamble();
    b.zeros(9);
    b.u16(nets.len() as u16);
    for net in nets {
        b.zstr(net).zeros(4);
    }
    b.finish()
}

/// A page stream with the given setup values and pre-built record entries
/// for the main record section.
pub fn page_stream(
    name: &str,
    width: u32,
    height: u32,
    pin_to_pin: u32,
    is_metric: bool,
    records: &[Vec<u8>],
) -> Vec<u8> {
    let mut b = StreamBuilder::new();
    b.zeros(21);
    b.preamble();
    b.zstr(name).zstr("A4");
    b.u32(1_600_000_000).u32(1_600_000_001);
    b.zeros(16);
    b.u32(width).u32(height).u32(pin_to_pin);
    b.zeros(2);
    b.u16(6).u16(4); // grid reference counts
    b.zeros(2);
    b.u32(100).u32(100);
    b.zeros(48);
    b.u32(u32::from(b'A'));
    b.zeros(4);
    b.u32(1); // horizontal ascending
    b.u32(u32::from(b'1'));
    b.zeros(4);
    b.u32(1); // vertical ascending
    b.u32(is_metric as u32);
    b.u32(1).u32(1); // border displayed / printed
    b.u32(1).u32(0); // grid refs displayed / printed
    b.u32(1).u32(1); // title block displayed / printed
    b.u32(0); // ANSI grid refs
    b.u16(0); // len a
    b.u16(0); // len 0
    b.u16(0); // len 1
    b.u16(records.len() as u16);
    for record in records {
        b.raw(record);
    }
    b.u16(0); // len 3
    b.zeros(10);
    b.u16(0); // len x
    b.finish()
}

/// A standard-prefixed bare wire record (`byte_offset` below the pad/nested
/// thresholds).
pub fn wire_scalar_record(coords: [i32; 4]) -> Vec<u8> {
    let mut body = StreamBuilder::new();
    body.preamble();
    body.u32(1).zeros(4).u32(1);
    for c in coords {
        body.i32(c);
    }
    body.u8(0);
    body.zeros(2).u32(3).u32(0);
    let body = body.finish();

    let mut b = StreamBuilder::new();
    b.standard_prefix(tags::WIRE_SCALAR, body.len() as u32);
    b.raw(&body);
    b.finish()
}

/// Write the streams every library container must have.  `root` becomes a
/// valid, empty library tree.
pub fn write_minimal_tree(root: &Path) {
    for dir in [
        "ExportBlocks",
        "Graphics",
        "Packages",
        "Parts",
        "Symbols",
        "Cells",
        "Views",
    ] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    fs::write(root.join("Library.bin"), library_stream(&[], 0)).unwrap();
    fs::write(root.join("Cache.bin"), Vec::new()).unwrap();
    // Zero-length type lists are valid and yield empty rosters.
    fs::write(root.join("Graphics").join("$Types$.bin"), Vec::new()).unwrap();
    fs::write(root.join("Symbols").join("$Types$.bin"), Vec::new()).unwrap();
    for dir in [
        "ExportBlocks",
        "Graphics",
        "Packages",
        "Parts",
        "Symbols",
        "Views",
    ] {
        fs::write(
            root.join(format!("{dir} Directory.bin")),
            directory_stream(&[]),
        )
        .unwrap();
    }
}
