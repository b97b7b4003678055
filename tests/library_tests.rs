//! End-to-end tests over synthetic extracted container trees.

mod common;

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use olbrust::{
    ContainerExtractor, FileType, OlbError, OlbParser, ParserConfiguration, Result, SymbolPin,
};

fn parse_tree(root: &Path, file_type: FileType) -> olbrust::ParseOutcome {
    OlbParser::from_extracted(root, file_type, ParserConfiguration::default())
        .unwrap()
        .parse()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Minimal library
// ---------------------------------------------------------------------------

#[test]
fn minimal_library_parses_clean() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());

    let outcome = parse_tree(dir.path(), FileType::Library);
    assert!(outcome.report.success(), "{:?}", outcome.report.failures);
    assert_eq!(outcome.report.file_err_ctr, 0);
    // Library, Cache, the six directory listings and the two type lists.
    assert_eq!(outcome.report.file_ctr, 10);
    assert!(outcome.library.packages.is_empty());
    assert!(outcome.library.graphics_types.is_empty());
    assert!(outcome.library.symbols_types.is_empty());
    assert!(outcome.library.str_lst.is_empty());
    assert!(outcome.library.pages.is_empty());
}

#[test]
fn missing_required_directory_aborts() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());
    fs::remove_dir_all(dir.path().join("Symbols")).unwrap();

    let err = OlbParser::from_extracted(
        dir.path(),
        FileType::Library,
        ParserConfiguration::default(),
    )
    .unwrap()
    .parse()
    .unwrap_err();
    assert!(matches!(err, OlbError::FilesystemMissing { .. }));
}

// ---------------------------------------------------------------------------
// Symbols and packages
// ---------------------------------------------------------------------------

#[test]
fn library_with_symbol_and_package() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());

    let pin = common::pin_record("1", [100, 0, 100, 10], 0, 4);
    fs::write(
        dir.path().join("Symbols").join("NAND2.bin"),
        common::symbol_stream("NAND2", &[pin], &[]),
    )
    .unwrap();
    let pins: &[(&str, u8)] = &[("1", 0x7f), ("2", 0x7f), ("3", 0x7f)];
    fs::write(
        dir.path().join("Packages").join("74LS00.bin"),
        common::package_stream("74LS00", "DIP14", 4, &[("U1", pins)]),
    )
    .unwrap();

    let outcome = parse_tree(dir.path(), FileType::Library);
    assert!(outcome.report.success(), "{:?}", outcome.report.failures);

    let symbol = &outcome.library.symbols["NAND2"];
    assert_eq!(symbol.pins.len(), 1);
    match &symbol.pins[0] {
        SymbolPin::Scalar(p) => {
            assert_eq!((p.start_x, p.start_y, p.hotpt_x, p.hotpt_y), (100, 0, 100, 10));
        }
        other => panic!("unexpected pin: {other:?}"),
    }

    let package = &outcome.library.packages["74LS00"];
    assert_eq!(package.section_count(), 4);
    assert_eq!(package.pin_mappings.len(), 1);
}

#[test]
fn one_broken_symbol_out_of_a_hundred() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());

    for i in 0..99 {
        let name = format!("SYM{i:03}");
        fs::write(
            dir.path().join("Symbols").join(format!("{name}.bin")),
            common::symbol_stream(&name, &[], &[]),
        )
        .unwrap();
    }
    fs::write(
        dir.path().join("Symbols").join("ZZBROKEN.bin"),
        common::broken_symbol_stream("ZZBROKEN"),
    )
    .unwrap();

    let outcome = parse_tree(dir.path(), FileType::Library);
    assert_eq!(outcome.report.file_err_ctr, 1);
    assert_eq!(outcome.library.symbols.len(), 99);
    assert!(!outcome.library.symbols.contains_key("ZZBROKEN"));
    assert!(!outcome.report.success());
    assert_eq!(outcome.report.failures.len(), 1);
    assert!(outcome.report.failures[0]
        .path
        .to_string_lossy()
        .contains("ZZBROKEN"));
    assert!(outcome.report.summary().contains("Errors in 1/"));
}

#[test]
fn strict_mode_aborts_on_first_stream_error() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());
    fs::write(
        dir.path().join("Symbols").join("BAD.bin"),
        common::broken_symbol_stream("BAD"),
    )
    .unwrap();

    let config = ParserConfiguration {
        failsafe: false,
        ..Default::default()
    };
    let err = OlbParser::from_extracted(dir.path(), FileType::Library, config)
        .unwrap()
        .parse()
        .unwrap_err();
    assert!(matches!(err, OlbError::UnknownStructure { tag: 0x7e, .. }));
}

// ---------------------------------------------------------------------------
// Views: schematics, hierarchies and pages
// ---------------------------------------------------------------------------

fn write_view(root: &Path, name: &str, pages: &[(&str, Vec<u8>)]) {
    let view = root.join("Views").join(name);
    fs::create_dir_all(view.join("Pages")).unwrap();
    let page_names: Vec<&str> = pages.iter().map(|(n, _)| *n).collect();
    fs::write(
        view.join("Schematic.bin"),
        common::schematic_stream(&page_names),
    )
    .unwrap();
    fs::create_dir_all(view.join("Hierarchy")).unwrap();
    fs::write(
        view.join("Hierarchy").join("Hierarchy.bin"),
        common::hierarchy_stream(&["VCC", "GND"]),
    )
    .unwrap();
    for (page_name, data) in pages {
        fs::write(
            view.join("Pages").join(format!("{page_name}.bin")),
            data.clone(),
        )
        .unwrap();
    }
}

#[test]
fn schematic_page_exposes_setup_fields() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());
    write_view(
        dir.path(),
        "MAIN",
        &[(
            "PAGE1",
            common::page_stream("PAGE1", 1000, 750, 100, false, &[]),
        )],
    );

    let outcome = parse_tree(dir.path(), FileType::Schematic);
    assert!(outcome.report.success(), "{:?}", outcome.report.failures);

    assert_eq!(outcome.library.schematics.len(), 1);
    assert_eq!(outcome.library.schematics[0].page_names, ["PAGE1"]);
    assert_eq!(outcome.library.hierarchies.len(), 1);

    let page = &outcome.library.pages[0];
    assert_eq!(page.width, 1000);
    assert_eq!(page.height, 750);
    assert_eq!(page.pin_to_pin, 100);
    assert!(!page.is_metric());
}

#[test]
fn page_with_wire_record() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());
    let wire = common::wire_scalar_record([10, 20, 110, 20]);
    write_view(
        dir.path(),
        "MAIN",
        &[(
            "PAGE1",
            common::page_stream("PAGE1", 800, 600, 100, true, &[wire]),
        )],
    );

    let outcome = parse_tree(dir.path(), FileType::Schematic);
    assert!(outcome.report.success(), "{:?}", outcome.report.failures);
    let page = &outcome.library.pages[0];
    assert!(page.is_metric());
    assert_eq!(page.records.len(), 1);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn reparsing_the_same_tree_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    common::write_minimal_tree(dir.path());
    for name in ["ALPHA", "BETA", "GAMMA"] {
        fs::write(
            dir.path().join("Symbols").join(format!("{name}.bin")),
            common::symbol_stream(name, &[], &[]),
        )
        .unwrap();
    }
    write_view(
        dir.path(),
        "MAIN",
        &[(
            "PAGE1",
            common::page_stream("PAGE1", 1000, 750, 100, false, &[]),
        )],
    );

    let first = parse_tree(dir.path(), FileType::Library);
    let second = parse_tree(dir.path(), FileType::Library);
    assert_eq!(first.library, second.library);
    assert_eq!(first.report.file_ctr, second.report.file_ctr);
    // Insertion order follows the sorted stream names.
    let names: Vec<&String> = first.library.symbols.keys().collect();
    assert_eq!(names, ["ALPHA", "BETA", "GAMMA"]);
}

// ---------------------------------------------------------------------------
// Extraction lifecycle
// ---------------------------------------------------------------------------

/// Test extractor: materialises the minimal tree regardless of the container
/// contents.
struct FixtureExtractor;

impl ContainerExtractor for FixtureExtractor {
    fn extract(&self, _container: &Path, out_dir: &Path) -> Result<PathBuf> {
        let root = out_dir.join("root");
        fs::create_dir_all(&root)?;
        common::write_minimal_tree(&root);
        Ok(root)
    }
}

#[test]
fn scratch_directory_is_removed_after_the_run() {
    let container = PathBuf::from("fixture.olb");
    let parser =
        OlbParser::new(&container, &FixtureExtractor, ParserConfiguration::default()).unwrap();
    assert_eq!(parser.file_type(), FileType::Library);
    let root = parser.root().to_path_buf();
    assert!(root.is_dir());

    let outcome = parser.parse().unwrap();
    assert!(outcome.report.success());
    // `parse` consumed the parser, so the scratch directory is gone.
    assert!(!root.exists());
}

#[test]
fn extracting_twice_yields_identical_libraries() {
    let container = PathBuf::from("fixture.olb");
    let first = OlbParser::new(&container, &FixtureExtractor, ParserConfiguration::default())
        .unwrap()
        .parse()
        .unwrap();
    let second = OlbParser::new(&container, &FixtureExtractor, ParserConfiguration::default())
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(first.library, second.library);
}

#[test]
fn unknown_extension_is_rejected() {
    let err = OlbParser::new(
        &PathBuf::from("fixture.zip"),
        &FixtureExtractor,
        ParserConfiguration::default(),
    )
    .unwrap_err();
    assert!(matches!(err, OlbError::UnknownFileKind { extension } if extension == "zip"));
}

#[test]
fn print_tree_lists_extracted_streams() {
    let mut out = Vec::new();
    FixtureExtractor
        .print_tree(&PathBuf::from("fixture.olb"), &mut out)
        .unwrap();
    out.flush().unwrap();
    let listing = String::from_utf8(out).unwrap();
    assert!(listing.contains("Library.bin"));
    assert!(listing.contains("Symbols"));
}
