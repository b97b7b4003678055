//! Compound-container extraction interface.
//!
//! The outer archive format is handled by a collaborator; the parser only
//! depends on this trait.  An extractor turns a container file into a
//! directory tree of named streams (see the expected layout in the crate
//! docs) and hands back the root of that tree.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Opens the outer compound document and materialises its streams on disk.
pub trait ContainerExtractor {
    /// Extract `container` into `out_dir`; returns the root directory of
    /// the produced tree.
    fn extract(&self, container: &Path, out_dir: &Path) -> Result<PathBuf>;

    /// Write a human-readable listing of the container's tree.
    ///
    /// The default implementation extracts into a scratch directory that is
    /// removed again when the listing is done.
    fn print_tree(&self, container: &Path, out: &mut dyn Write) -> Result<()> {
        let scratch = tempfile::Builder::new().prefix("olbrust-tree-").tempdir()?;
        let root = self.extract(container, scratch.path())?;
        writeln!(out, "{}", container.display())?;
        write_tree(&root, out, 1)?;
        Ok(())
    }
}

/// Recursively write one directory level, sorted by name.
pub fn write_tree(dir: &Path, out: &mut dyn Write, depth: usize) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|e| e.path())
        .collect();
    entries.sort();
    for path in entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "{}{}", "  ".repeat(depth), name)?;
        if path.is_dir() {
            write_tree(&path, out, depth + 1)?;
        }
    }
    Ok(())
}
