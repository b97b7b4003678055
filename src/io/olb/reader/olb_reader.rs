//! Parser orchestrator — the main entry point for reading containers.
//!
//! Walks the extracted container tree in a fixed order, dispatches every
//! stream to its reader, and accumulates the results into one [`Library`].
//! A stream that fails to parse is recorded and counted; the run carries on
//! with the remaining streams and reports the totals at the end.
//!
//! # Usage
//!
//! ```rust,ignore
//! use olbrust::io::olb::reader::{OlbParser, ParserConfiguration};
//!
//! let parser = OlbParser::new("sample.olb".as_ref(), &extractor, Default::default())?;
//! let outcome = parser.parse()?;
//! println!("{}", outcome.report.summary());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use tempfile::TempDir;

use crate::error::{OlbError, Result};
use crate::io::container::ContainerExtractor;
use crate::io::olb::data_stream::DataStream;
use crate::library::Library;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{FileFormatVersion, FileType};

use super::stream_reader;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration options for the parser.
#[derive(Debug, Clone)]
pub struct ParserConfiguration {
    /// When `true`, a stream that fails to parse is recorded and the run
    /// continues; when `false` the first stream error aborts the run.
    ///
    /// Default: `true`.
    pub failsafe: bool,

    /// Force one file-format version instead of trying newest-first.
    pub file_format_version: Option<FileFormatVersion>,
}

impl Default for ParserConfiguration {
    fn default() -> Self {
        Self {
            failsafe: true,
            file_format_version: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One failed stream.
#[derive(Debug, Clone)]
pub struct StreamFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Totals and diagnostics of one parsing run.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Streams attempted.
    pub file_ctr: usize,
    /// Streams that failed.
    pub file_err_ctr: usize,
    pub failures: Vec<StreamFailure>,
    pub notifications: NotificationCollection,
}

impl ParseReport {
    /// Whether every stream parsed.
    pub fn success(&self) -> bool {
        self.file_err_ctr == 0
    }

    /// The one-line coloured run summary.
    pub fn summary(&self) -> String {
        if self.success() {
            format!("No errors in {} files!", self.file_ctr)
                .green()
                .to_string()
        } else {
            format!("Errors in {}/{} files!", self.file_err_ctr, self.file_ctr)
                .red()
                .to_string()
        }
    }
}

/// Result of a parsing run: the library plus the run report.
#[derive(Debug)]
pub struct ParseOutcome {
    pub library: Library,
    pub report: ParseReport,
}

// ---------------------------------------------------------------------------
// OlbParser
// ---------------------------------------------------------------------------

/// Container parser — drives extraction and stream parsing, produces a
/// [`Library`].
///
/// Owns its scratch extraction directory; the directory is removed when the
/// parser is dropped, on every exit path.
#[derive(Debug)]
pub struct OlbParser {
    file_type: FileType,
    root: PathBuf,
    /// Keeps the scratch directory alive for the parser's lifetime.
    _scratch: Option<TempDir>,
    config: ParserConfiguration,
    library: Library,
    file_ctr: usize,
    file_err_ctr: usize,
    failures: Vec<StreamFailure>,
    notes: NotificationCollection,
}

impl OlbParser {
    /// Open a container by path: classify it, extract it into a fresh
    /// scratch directory, and prepare a parser over the extracted tree.
    pub fn new<E: ContainerExtractor>(
        container: &Path,
        extractor: &E,
        config: ParserConfiguration,
    ) -> Result<Self> {
        let file_type = FileType::from_path(container)?;
        let scratch = tempfile::Builder::new().prefix("olbrust-").tempdir()?;
        let root = extractor.extract(container, scratch.path())?;
        Ok(Self {
            file_type,
            root,
            _scratch: Some(scratch),
            config,
            library: Library::new(),
            file_ctr: 0,
            file_err_ctr: 0,
            failures: Vec::new(),
            notes: NotificationCollection::new(),
        })
    }

    /// Prepare a parser over an already-extracted container tree.  No
    /// scratch directory is created and nothing is removed on drop.
    pub fn from_extracted(
        root: impl Into<PathBuf>,
        file_type: FileType,
        config: ParserConfiguration,
    ) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(OlbError::FilesystemMissing { path: root });
        }
        Ok(Self {
            file_type,
            root,
            _scratch: None,
            config,
            library: Library::new(),
            file_ctr: 0,
            file_err_ctr: 0,
            failures: Vec::new(),
            notes: NotificationCollection::new(),
        })
    }

    /// The container classification.
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Root of the extracted tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn forced_version(&self) -> Option<FileFormatVersion> {
        self.config.file_format_version
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn assert_dir(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(OlbError::FilesystemMissing { path });
        }
        Ok(path)
    }

    fn assert_file(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(OlbError::FilesystemMissing { path });
        }
        Ok(path)
    }

    /// Run one stream parse with the failure bookkeeping applied.
    ///
    /// Returns `Ok(None)` when the stream failed in failsafe mode.
    fn run_stream<T>(
        &mut self,
        path: &Path,
        f: impl FnOnce(&mut DataStream, &Library, Option<FileFormatVersion>) -> Result<T>,
    ) -> Result<Option<T>> {
        self.file_ctr += 1;
        let display = self.display_name(path);
        let forced = self.forced_version();

        let outcome = fs::read(path).map_err(OlbError::from).and_then(|bytes| {
            let mut ds = DataStream::new(display.clone(), bytes);
            let value = f(&mut ds, &self.library, forced)?;
            Ok((value, ds.take_notifications()))
        });

        match outcome {
            Ok((value, notes)) => {
                self.notes.extend(notes);
                Ok(Some(value))
            }
            Err(e) => {
                log::warn!("{display}: {e}");
                self.notes
                    .notify(NotificationType::StreamError, format!("{display}: {e}"));
                self.failures.push(StreamFailure {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
                self.file_err_ctr += 1;
                if self.config.failsafe {
                    Ok(None)
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Parse the whole container tree and return the library with the run
    /// report.
    pub fn parse(mut self) -> Result<ParseOutcome> {
        // Layout checks first: a malformed tree aborts the run before any
        // stream is opened.
        for dir in [
            "ExportBlocks",
            "Graphics",
            "Packages",
            "Parts",
            "Symbols",
            "Cells",
            "Views",
        ] {
            self.assert_dir(dir)?;
        }
        let library_bin = self.assert_file("Library.bin")?;
        let cache_bin = self.assert_file("Cache.bin")?;
        let export_blocks_dir = self.assert_file("ExportBlocks Directory.bin")?;
        let graphics_dir = self.assert_file("Graphics Directory.bin")?;
        let packages_dir = self.assert_file("Packages Directory.bin")?;
        let parts_dir = self.assert_file("Parts Directory.bin")?;
        let symbols_dir = self.assert_file("Symbols Directory.bin")?;
        let views_dir = self.assert_file("Views Directory.bin")?;

        // Directory listings.
        if let Some(d) = self.run_stream(&export_blocks_dir, |ds, _, _| {
            stream_reader::parse_directory_stream(ds, "ExportBlocks")
        })? {
            self.library.directories.export_blocks = d;
        }
        if let Some(d) = self.run_stream(&graphics_dir, |ds, _, _| {
            stream_reader::parse_directory_stream(ds, "Graphics")
        })? {
            self.library.directories.graphics = d;
        }
        if let Some(d) = self.run_stream(&packages_dir, |ds, _, _| {
            stream_reader::parse_directory_stream(ds, "Packages")
        })? {
            self.library.directories.packages = d;
        }
        if let Some(d) = self.run_stream(&parts_dir, |ds, _, _| {
            stream_reader::parse_directory_stream(ds, "Parts")
        })? {
            self.library.directories.parts = d;
        }
        if let Some(d) = self.run_stream(&symbols_dir, |ds, _, _| {
            stream_reader::parse_directory_stream(ds, "Symbols")
        })? {
            self.library.directories.symbols = d;
        }
        let cells_dir = self.root.join("Cells Directory.bin");
        if cells_dir.is_file() {
            if let Some(d) = self.run_stream(&cells_dir, |ds, _, _| {
                stream_reader::parse_directory_stream(ds, "Cells")
            })? {
                self.library.directories.cells = Some(d);
            }
        }
        if let Some(d) = self.run_stream(&views_dir, |ds, _, _| {
            stream_reader::parse_directory_stream(ds, "Views")
        })? {
            self.library.directories.views = d;
        }

        // Optional root streams.
        let admin_data = self.root.join("AdminData.bin");
        if admin_data.is_file() {
            if let Some(a) =
                self.run_stream(&admin_data, |ds, _, _| stream_reader::parse_admin_data(ds))?
            {
                self.library.admin_data = Some(a);
            }
        }
        let net_bundle = self.root.join("NetBundleMapData.bin");
        if net_bundle.is_file() {
            if let Some(m) = self.run_stream(&net_bundle, |ds, _, _| {
                stream_reader::parse_net_bundle_map(ds)
            })? {
                self.library.net_bundle_map = Some(m);
            }
        }
        let hs_objects = self.root.join("HSObjects.bin");
        if hs_objects.is_file() {
            self.run_stream(&hs_objects, |ds, _, _| stream_reader::parse_hs_objects(ds))?;
        }
        let dsn_stream = self.root.join("DsnStream.bin");
        if dsn_stream.is_file() {
            if let Some(d) =
                self.run_stream(&dsn_stream, |ds, lib, _| stream_reader::parse_dsn_stream(ds, lib))?
            {
                self.library.dsn_stream = Some(d);
            }
        }

        // Type lists.
        let graphics_types = self.root.join("Graphics").join("$Types$.bin");
        if !graphics_types.is_file() {
            return Err(OlbError::FilesystemMissing {
                path: graphics_types,
            });
        }
        if let Some(t) =
            self.run_stream(&graphics_types, |ds, _, _| stream_reader::parse_types_stream(ds))?
        {
            self.library.graphics_types = t;
        }
        let symbols_types = self.root.join("Symbols").join("$Types$.bin");
        if !symbols_types.is_file() {
            return Err(OlbError::FilesystemMissing {
                path: symbols_types,
            });
        }
        if let Some(t) =
            self.run_stream(&symbols_types, |ds, _, _| stream_reader::parse_types_stream(ds))?
        {
            self.library.symbols_types = t;
        }

        // Global strings and fonts, then the cache.
        if let Some(data) =
            self.run_stream(&library_bin, |ds, _, _| stream_reader::parse_symbols_library(ds))?
        {
            self.library.introduction = data.introduction;
            self.library.create_date = data.create_date;
            self.library.modify_date = data.modify_date;
            self.library.str_lst = data.str_lst;
            self.library.text_fonts = data.text_fonts;
        }
        if let Some(c) =
            self.run_stream(&cache_bin, |ds, _, _| stream_reader::parse_types_stream(ds))?
        {
            self.library.cache = c;
        }

        // Packages, then symbols.
        for path in sorted_bin_files(&self.root.join("Packages"), &[])? {
            let name = stream_stem(&path);
            if let Some(p) =
                self.run_stream(&path, |ds, lib, _| stream_reader::parse_package(ds, lib, &name))?
            {
                self.library.packages.insert(p.name.clone(), p);
            }
        }
        for path in sorted_bin_files(&self.root.join("Symbols"), &["$Types$.bin", "ERC.bin"])? {
            let name = stream_stem(&path);
            if let Some(s) = self.run_stream(&path, |ds, lib, forced| {
                stream_reader::parse_symbol(ds, lib, &name, forced)
            })? {
                self.library.symbols.insert(s.name.clone(), s);
            }
        }

        // Views: schematic, optional hierarchy, pages.
        for view in sorted_sub_dirs(&self.root.join("Views"))? {
            let view_name = stream_stem(&view);
            let schematic_bin = view.join("Schematic.bin");
            if !schematic_bin.is_file() {
                return Err(OlbError::FilesystemMissing {
                    path: schematic_bin,
                });
            }
            if let Some(s) = self.run_stream(&schematic_bin, |ds, lib, _| {
                stream_reader::parse_schematic(ds, lib, &view_name)
            })? {
                self.library.schematics.push(s);
            }

            let hierarchy_bin = view.join("Hierarchy").join("Hierarchy.bin");
            if hierarchy_bin.is_file() {
                if let Some(h) = self.run_stream(&hierarchy_bin, |ds, lib, _| {
                    stream_reader::parse_hierarchy(ds, lib, &view_name)
                })? {
                    self.library.hierarchies.push(h);
                }
            }

            let pages_dir = view.join("Pages");
            if pages_dir.is_dir() {
                for path in sorted_bin_files(&pages_dir, &[])? {
                    let name = stream_stem(&path);
                    if let Some(p) = self.run_stream(&path, |ds, lib, forced| {
                        stream_reader::parse_page(ds, lib, &name, forced)
                    })? {
                        self.library.pages.push(p);
                    }
                }
            }
        }

        let report = ParseReport {
            file_ctr: self.file_ctr,
            file_err_ctr: self.file_err_ctr,
            failures: std::mem::take(&mut self.failures),
            notifications: std::mem::take(&mut self.notes),
        };
        log::info!("{}", report.summary());
        Ok(ParseOutcome {
            library: std::mem::take(&mut self.library),
            report,
        })
    }
}

/// `.bin` stream files of a directory, sorted by name for deterministic
/// parse order.
fn sorted_bin_files(dir: &Path, exclude: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.to_ascii_lowercase().ends_with(".bin") {
            continue;
        }
        if exclude.iter().any(|e| e.eq_ignore_ascii_case(&name)) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Sub-directories, sorted by name.
fn sorted_sub_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Stream name: the file name without its `.bin` suffix.
fn stream_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_summary_success() {
        let report = ParseReport {
            file_ctr: 12,
            ..Default::default()
        };
        assert!(report.success());
        assert!(report.summary().contains("No errors in 12 files!"));
    }

    #[test]
    fn test_report_summary_failures() {
        let report = ParseReport {
            file_ctr: 10,
            file_err_ctr: 3,
            ..Default::default()
        };
        assert!(!report.success());
        assert!(report.summary().contains("Errors in 3/10 files!"));
    }

    #[test]
    fn test_from_extracted_missing_root() {
        let err = OlbParser::from_extracted(
            "/nonexistent/olbrust-test-root",
            FileType::Library,
            Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, OlbError::FilesystemMissing { .. }));
    }
}
