//! Per-stream-kind entry points.
//!
//! One function per stream kind; each drives the record reader over a fresh
//! [`DataStream`] and leaves the stream fully consumed.  Streams whose
//! layout depends on the file-format version are retried newest-first when
//! no version is forced.

use crate::error::{OlbError, Result};
use crate::io::olb::data_stream::DataStream;
use crate::library::{Library, TextFont};
use crate::notification::NotificationType;
use crate::records::{
    AdminData, DirectoryEntry, DirectoryStream, DsnStream, Hierarchy, HierarchyNet, NetBundle,
    NetBundleMap, Package, Page, Schematic, Symbol, SymbolPin, TypeEntry,
};
use crate::types::{ComponentType, FileFormatVersion, Structure};

use super::record_reader::RecordReader;

/// Structure tags a symbol stream may store its geometry under.
const SYMBOL_GEOMETRY_TAGS: [Structure; 7] = [
    Structure::GlobalSymbol,
    Structure::PortSymbol,
    Structure::OffPageSymbol,
    Structure::ErcSymbol,
    Structure::PinShapeSymbol,
    Structure::TitleBlockSymbol,
    Structure::GeoDefinition,
];

/// Run `attempt` under the forced version, or retry it over the fallback
/// order (newest first) rewinding the stream between attempts.
fn with_version_fallback<T>(
    ds: &mut DataStream,
    forced: Option<FileFormatVersion>,
    mut attempt: impl FnMut(&mut DataStream, FileFormatVersion) -> Result<T>,
) -> Result<T> {
    if let Some(version) = forced {
        return attempt(ds, version);
    }
    let mut result = Err(OlbError::InvariantViolated {
        what: "no format version attempted",
        offset: 0,
    });
    for &version in FileFormatVersion::FALLBACK_ORDER.iter() {
        ds.rewind();
        result = attempt(ds, version);
        match &result {
            Ok(_) => break,
            Err(e) => {
                log::debug!("{}: parse failed under version {version}: {e}", ds.name());
            }
        }
    }
    result
}

/// `* Directory.bin`: modify date and the entry roster of a sibling folder.
pub fn parse_directory_stream(ds: &mut DataStream, dir_name: &str) -> Result<DirectoryStream> {
    let last_modify_date = ds.read_u32()?;
    let item_count = ds.read_u16()?;
    let mut entries = Vec::with_capacity(item_count as usize);
    for _ in 0..item_count {
        let name = ds.read_string_zero_terminated()?;
        let type_offset = ds.current_offset();
        let component_type = ComponentType::from_raw(ds.read_u16()?, type_offset)?;
        let stream_version = ds.read_u16()?;
        entries.push(DirectoryEntry {
            name,
            component_type,
            stream_version,
        });
    }
    ds.expect_eof()?;
    Ok(DirectoryStream {
        name: dir_name.to_string(),
        last_modify_date,
        entries,
    })
}

/// `$Types$.bin` and `Cache.bin`: name/type pairs until EOF.  A zero-length
/// stream is an empty list.
pub fn parse_types_stream(ds: &mut DataStream) -> Result<Vec<TypeEntry>> {
    let mut entries = Vec::new();
    while !ds.is_eof() {
        let name = ds.read_string_zero_terminated()?;
        let type_offset = ds.current_offset();
        let component_type = ComponentType::from_raw(ds.read_u16()?, type_offset)?;
        entries.push(TypeEntry {
            name,
            component_type,
        });
    }
    Ok(entries)
}

/// Parsed contents of the `Library` stream.
pub struct SymbolsLibraryData {
    pub introduction: String,
    pub create_date: u32,
    pub modify_date: u32,
    pub str_lst: Vec<String>,
    pub text_fonts: Vec<TextFont>,
}

/// `Library.bin`: banner, dates, the global string table and the text-font
/// table.
pub fn parse_symbols_library(ds: &mut DataStream) -> Result<SymbolsLibraryData> {
    let introduction = ds.read_string_zero_terminated()?;
    let create_date = ds.read_u32()?;
    let modify_date = ds.read_u32()?;
    ds.print_unknown(4, "library header")?;

    let str_count = ds.read_u32()?;
    let mut str_lst = Vec::with_capacity(str_count as usize);
    for _ in 0..str_count {
        str_lst.push(ds.read_string_zero_terminated()?);
    }

    let font_count = ds.read_u16()?;
    let mut text_fonts = Vec::with_capacity(font_count as usize);
    for _ in 0..font_count {
        let height = ds.read_i32()?;
        let width = ds.read_i32()?;
        let escapement = ds.read_i32()?;
        let weight = ds.read_i32()?;
        let italic = ds.read_u8()? != 0;
        let font_name = ds.read_string_zero_terminated()?;
        text_fonts.push(TextFont {
            height,
            width,
            escapement,
            weight,
            italic,
            font_name,
        });
    }
    ds.expect_eof()?;
    Ok(SymbolsLibraryData {
        introduction,
        create_date,
        modify_date,
        str_lst,
        text_fonts,
    })
}

/// `AdminData.bin`.
pub fn parse_admin_data(ds: &mut DataStream) -> Result<AdminData> {
    let modify_date = ds.read_u32()?;
    ds.assume_bytes(&[0u8; 4])?;
    ds.expect_eof()?;
    Ok(AdminData { modify_date })
}

/// `NetBundleMapData.bin`.
pub fn parse_net_bundle_map(ds: &mut DataStream) -> Result<NetBundleMap> {
    let bundle_count = ds.read_u16()?;
    let mut bundles = Vec::with_capacity(bundle_count as usize);
    for _ in 0..bundle_count {
        let name = ds.read_string_zero_terminated()?;
        let member_count = ds.read_u16()?;
        let mut members = Vec::with_capacity(member_count as usize);
        for _ in 0..member_count {
            members.push(ds.read_string_zero_terminated()?);
        }
        bundles.push(NetBundle { name, members });
    }
    ds.expect_eof()?;
    Ok(NetBundleMap { bundles })
}

/// `HSObjects.bin`: contents not reverse-engineered; consumed opaquely.
pub fn parse_hs_objects(ds: &mut DataStream) -> Result<()> {
    let len = ds.remaining();
    ds.note(
        NotificationType::UnknownData,
        format!("HSObjects body ({len} bytes) skipped"),
    );
    ds.print_unknown(len as usize, "HSObjects body")?;
    ds.expect_eof()
}

/// Root design stream of a `.DSN` container.
pub fn parse_dsn_stream(ds: &mut DataStream, lib: &Library) -> Result<DsnStream> {
    let mut rr = RecordReader::new(ds, lib, FileFormatVersion::default());
    rr.read_preamble()?;
    let introduction = rr.ds.read_string_zero_terminated()?;
    let create_date = rr.ds.read_u32()?;
    let modify_date = rr.ds.read_u32()?;
    let remaining = rr.ds.remaining();
    if remaining > 0 {
        rr.ds.note(
            NotificationType::UnknownData,
            format!("design stream remainder ({remaining} bytes) skipped"),
        );
        rr.ds
            .print_unknown(remaining as usize, "design stream remainder")?;
    }
    rr.finish()?;
    Ok(DsnStream {
        introduction,
        create_date,
        modify_date,
    })
}

/// `Packages/<name>.bin`: package properties, general properties and the
/// pin-index mappings.
pub fn parse_package(ds: &mut DataStream, lib: &Library, name: &str) -> Result<Package> {
    let mut rr = RecordReader::new(ds, lib, FileFormatVersion::default());
    rr.read_preamble()?;

    rr.read_type_prefix_long(&[Structure::Properties2])?;
    rr.read_conditional_preamble(Structure::Properties2)?;
    let properties = rr.read_properties2()?;

    rr.read_type_prefix_long(&[Structure::GeneralProperties])?;
    rr.read_conditional_preamble(Structure::GeneralProperties)?;
    let general = rr.read_general_properties()?;

    let mapping_count = rr.ds.read_u16()?;
    let mut pin_mappings = Vec::with_capacity(mapping_count as usize);
    for _ in 0..mapping_count {
        rr.read_type_prefix_long(&[Structure::PinIdxMapping])?;
        rr.read_conditional_preamble(Structure::PinIdxMapping)?;
        pin_mappings.push(rr.read_pin_idx_mapping()?);
    }
    rr.finish()?;
    Ok(Package {
        name: name.to_string(),
        properties,
        general,
        pin_mappings,
    })
}

/// `Symbols/<name>.bin`: properties, geometry, pins and display properties.
pub fn parse_symbol(
    ds: &mut DataStream,
    lib: &Library,
    name: &str,
    forced: Option<FileFormatVersion>,
) -> Result<Symbol> {
    with_version_fallback(ds, forced, |ds, version| {
        let mut rr = RecordReader::new(ds, lib, version);
        rr.read_preamble()?;

        rr.read_type_prefix_long(&[Structure::Properties])?;
        rr.read_conditional_preamble(Structure::Properties)?;
        let properties = rr.read_properties()?;

        let shape = rr.read_type_prefix_long(&SYMBOL_GEOMETRY_TAGS)?;
        rr.read_conditional_preamble(shape.tag)?;
        let geometry = rr.read_geometry_specification()?;

        let pin_count = rr.ds.read_u16()?;
        let mut pins: Vec<SymbolPin> = Vec::with_capacity(pin_count as usize);
        for _ in 0..pin_count {
            pins.push(rr.read_pin_entry()?);
        }

        let disp_count = rr.ds.read_u16()?;
        let mut display_props = Vec::with_capacity(disp_count as usize);
        for _ in 0..disp_count {
            display_props.push(rr.read_display_prop_entry()?);
        }

        rr.finish()?;
        Ok(Symbol {
            name: name.to_string(),
            properties,
            kind: shape.tag,
            geometry,
            pins,
            display_props,
        })
    })
}

/// `Views/<view>/Schematic.bin`: the page roster.
pub fn parse_schematic(ds: &mut DataStream, lib: &Library, name: &str) -> Result<Schematic> {
    let mut rr = RecordReader::new(ds, lib, FileFormatVersion::default());
    rr.read_preamble()?;
    rr.ds.print_unknown(4, "schematic header")?;
    let page_count = rr.ds.read_u16()?;
    let mut page_names = Vec::with_capacity(page_count as usize);
    for _ in 0..page_count {
        page_names.push(rr.ds.read_string_zero_terminated()?);
    }
    rr.finish()?;
    Ok(Schematic {
        name: name.to_string(),
        page_names,
    })
}

/// `Views/<view>/Hierarchy/Hierarchy.bin`: the flattened net roster.
pub fn parse_hierarchy(ds: &mut DataStream, lib: &Library, name: &str) -> Result<Hierarchy> {
    let mut rr = RecordReader::new(ds, lib, FileFormatVersion::default());
    rr.read_preamble()?;
    rr.ds.print_unknown(9, "hierarchy header")?;
    let net_count = rr.ds.read_u16()?;
    let mut nets = Vec::with_capacity(net_count as usize);
    for _ in 0..net_count {
        let name = rr.ds.read_string_zero_terminated()?;
        rr.ds.print_unknown(4, "hierarchy net trailer")?;
        nets.push(HierarchyNet { name });
    }
    rr.finish()?;
    Ok(Hierarchy {
        name: name.to_string(),
        nets,
    })
}

/// `Views/<view>/Pages/<name>.bin`.
pub fn parse_page(
    ds: &mut DataStream,
    lib: &Library,
    name: &str,
    forced: Option<FileFormatVersion>,
) -> Result<Page> {
    with_version_fallback(ds, forced, |ds, version| {
        let mut rr = RecordReader::new(ds, lib, version);
        let page = rr.read_page(name)?;
        rr.finish()?;
        Ok(page)
    })
}
