//! Error types for the olbrust library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for olbrust operations
#[derive(Debug, Error)]
pub enum OlbError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Read past the end of a stream
    #[error("truncated stream at offset {offset:#x}")]
    TruncatedStream { offset: u64 },

    /// Preamble magic or asserted byte run did not match
    #[error("magic mismatch at offset {offset:#x}: expected {expected:02X?}, got {got:02X?}")]
    MagicMismatch {
        offset: u64,
        expected: Vec<u8>,
        got: Vec<u8>,
    },

    /// The two tag bytes of a prefix disagree
    #[error("tag mismatch at offset {offset:#x}: first {first:#04x}, repeat {repeat:#04x}")]
    TagMismatch { offset: u64, first: u8, repeat: u8 },

    /// No record reader is registered for this structure tag
    #[error("unknown structure tag {tag:#04x} at offset {offset:#x}")]
    UnknownStructure { tag: u8, offset: u64 },

    /// A raw value has no named enum variant
    #[error("unknown {kind} value {raw:#x} at offset {offset:#x}")]
    UnknownEnumValue {
        kind: &'static str,
        raw: u32,
        offset: u64,
    },

    /// A future-data boundary was not met
    #[error("checkpoint misaligned: expected end {expected_end:#x}, actual offset {actual:#x}")]
    CheckpointMisaligned { expected_end: u64, actual: u64 },

    /// A documented invariant of the format does not hold
    #[error("invariant violated ({what}) at offset {offset:#x}")]
    InvariantViolated { what: &'static str, offset: u64 },

    /// A required stream or directory is absent from the extracted tree
    #[error("missing file or directory: {}", path.display())]
    FilesystemMissing { path: PathBuf },

    /// The input file extension is not a recognised container kind
    #[error("cannot classify input file by extension: {extension:?}")]
    UnknownFileKind { extension: String },
}

/// Result type alias for olbrust operations
pub type Result<T> = std::result::Result<T, OlbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OlbError::TruncatedStream { offset: 0x2a };
        assert_eq!(err.to_string(), "truncated stream at offset 0x2a");
    }

    #[test]
    fn test_tag_mismatch_display() {
        let err = OlbError::TagMismatch {
            offset: 0x10,
            first: 0x21,
            repeat: 0x22,
        };
        assert!(err.to_string().contains("0x21"));
        assert!(err.to_string().contains("0x22"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let olb_err: OlbError = io_err.into();
        assert!(matches!(olb_err, OlbError::Io(_)));
    }
}
