/// Diagnostic tool: parses an already-extracted container tree and reports
/// what the parser finds.
///
/// Usage:
///     cargo run --bin diag_extracted -- <extracted_root> [library|schematic]
use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};

use olbrust::{FileType, OlbParser, ParserConfiguration};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: diag_extracted <extracted_root> [library|schematic]");
        std::process::exit(1);
    }

    let root = PathBuf::from(&args[1]);
    let file_type = match args.get(2).map(String::as_str) {
        None | Some("library") => FileType::Library,
        Some("schematic") => FileType::Schematic,
        Some(other) => bail!("unknown container kind {other:?}"),
    };

    let parser = OlbParser::from_extracted(&root, file_type, ParserConfiguration::default())
        .with_context(|| format!("cannot open extracted tree {}", root.display()))?;
    let outcome = parser.parse().context("parsing aborted")?;

    let lib = &outcome.library;
    println!("introduction:  {:?}", lib.introduction);
    println!("strings:       {}", lib.str_lst.len());
    println!("text fonts:    {}", lib.text_fonts.len());
    println!("packages:      {}", lib.packages.len());
    println!("symbols:       {}", lib.symbols.len());
    println!("schematics:    {}", lib.schematics.len());
    println!("pages:         {}", lib.pages.len());
    println!();

    for failure in &outcome.report.failures {
        println!("FAILED  {}: {}", failure.path.display(), failure.error);
    }
    for note in &outcome.report.notifications {
        println!("NOTE    {note}");
    }

    println!();
    println!("{}", outcome.report.summary());
    if !outcome.report.success() {
        std::process::exit(1);
    }
    Ok(())
}
