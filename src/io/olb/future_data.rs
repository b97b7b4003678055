//! Future-data checkpoints.
//!
//! Standard record prefixes carry a byte offset that states where the record
//! ends.  Each declared end is pushed on a per-stream stack when the prefix
//! is read and checked against the actual stream position when the record is
//! left.  Mismatches are surfaced as explicit errors, never swallowed.

use crate::error::{OlbError, Result};

use super::data_stream::DataStream;

/// One declared record extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureData {
    /// Offset the extent was declared at (end of the declaring prefix).
    pub start: u64,
    /// Absolute offset the record body must end at.
    pub end: u64,
}

/// Stack of open future-data checkpoints for one stream.
#[derive(Debug, Default)]
pub struct FutureDataLst {
    stack: Vec<FutureData>,
}

impl FutureDataLst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a checkpoint.
    pub fn push(&mut self, fd: FutureData) {
        self.stack.push(fd);
    }

    /// Number of open checkpoints.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no checkpoint is open.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every open checkpoint (on stream abandon).
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Distance from `offset` to the innermost declared end, if any
    /// checkpoint is open and not already passed.
    pub fn remaining_until_next(&self, offset: u64) -> Option<u64> {
        self.stack.last().map(|fd| fd.end.saturating_sub(offset))
    }

    /// Close the innermost checkpoint; the stream must be exactly at its
    /// declared end.
    pub fn check_point(&mut self, offset: u64) -> Result<FutureData> {
        let fd = self.stack.pop().ok_or(OlbError::InvariantViolated {
            what: "checkpoint closed with empty future-data stack",
            offset,
        })?;
        if fd.end != offset {
            return Err(OlbError::CheckpointMisaligned {
                expected_end: fd.end,
                actual: offset,
            });
        }
        Ok(fd)
    }

    /// Skip forward to the innermost declared end, leaving a labelled note.
    /// The checkpoint stays open.
    pub fn read_until_next_future_data(
        &mut self,
        ds: &mut DataStream,
        label: &str,
    ) -> Result<()> {
        let offset = ds.current_offset();
        let fd = *self.stack.last().ok_or(OlbError::InvariantViolated {
            what: "skip requested with empty future-data stack",
            offset,
        })?;
        if offset > fd.end {
            return Err(OlbError::CheckpointMisaligned {
                expected_end: fd.end,
                actual: offset,
            });
        }
        ds.print_unknown((fd.end - offset) as usize, label)
    }

    /// Skip any unread tail of the innermost extent with a labelled note,
    /// then close it.
    pub fn expect_end(&mut self, ds: &mut DataStream, label: &str) -> Result<FutureData> {
        if self
            .remaining_until_next(ds.current_offset())
            .is_some_and(|rem| rem > 0)
        {
            self.read_until_next_future_data(ds, label)?;
        }
        self.check_point(ds.current_offset())
    }
}
