//! Positioned byte reader over one extracted stream.
//!
//! All multi-byte integers in the container are little-endian.  The reader
//! carries the stream's display name so diagnostics can point at the stream
//! a note came from.

use std::io::{self, Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::WINDOWS_1252;

use crate::error::{OlbError, Result};
use crate::notification::{NotificationCollection, NotificationType};

/// Positioned reader over an in-memory stream.
///
/// Also carries the notification sink for the stream being read, so that
/// readers at any depth can leave structured observations.
pub struct DataStream {
    name: String,
    cursor: Cursor<Vec<u8>>,
    putback: Option<u8>,
    notes: NotificationCollection,
}

impl DataStream {
    /// Wrap raw stream bytes.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            cursor: Cursor::new(data),
            putback: None,
            notes: NotificationCollection::new(),
        }
    }

    /// The stream's display name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> u64 {
        self.cursor.get_ref().len() as u64
    }

    /// Whether the stream holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the next byte that a read would return.
    pub fn current_offset(&self) -> u64 {
        self.cursor.position() - self.putback.is_some() as u64
    }

    /// Whether every byte has been consumed.
    pub fn is_eof(&self) -> bool {
        self.current_offset() >= self.len()
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> u64 {
        self.len() - self.current_offset()
    }

    /// Reset to offset zero, dropping any putback byte and notes collected
    /// so far (used when re-trying a stream under another format version).
    pub fn rewind(&mut self) {
        self.cursor.set_position(0);
        self.putback = None;
        self.notes = NotificationCollection::new();
    }

    /// Record an observation about this stream.
    pub fn note(&mut self, nt: NotificationType, message: impl Into<String>) {
        self.notes.notify(nt, message);
    }

    /// Record an observation anchored to a stream offset.
    pub fn note_at(&mut self, nt: NotificationType, offset: u64, message: impl Into<String>) {
        self.notes.notify_at(nt, offset, message);
    }

    /// Observations collected while reading this stream.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notes
    }

    /// Take ownership of the collected observations.
    pub fn take_notifications(&mut self) -> NotificationCollection {
        std::mem::take(&mut self.notes)
    }

    /// Push one byte back; the next read returns it first.
    ///
    /// Only a single byte of lookahead is supported.
    pub fn putback(&mut self, byte: u8) {
        debug_assert!(self.putback.is_none(), "putback slot already occupied");
        self.putback = Some(byte);
    }

    fn truncated(&self, err: io::Error, offset: u64) -> OlbError {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            OlbError::TruncatedStream { offset }
        } else {
            OlbError::Io(err)
        }
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let offset = self.current_offset();
        ReadBytesExt::read_u8(self).map_err(|e| self.truncated(e, offset))
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let offset = self.current_offset();
        ReadBytesExt::read_u16::<LittleEndian>(self).map_err(|e| self.truncated(e, offset))
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let offset = self.current_offset();
        ReadBytesExt::read_u32::<LittleEndian>(self).map_err(|e| self.truncated(e, offset))
    }

    /// Read a little-endian i16.
    pub fn read_i16(&mut self) -> Result<i16> {
        let offset = self.current_offset();
        ReadBytesExt::read_i16::<LittleEndian>(self).map_err(|e| self.truncated(e, offset))
    }

    /// Read a little-endian i32.
    pub fn read_i32(&mut self) -> Result<i32> {
        let offset = self.current_offset();
        ReadBytesExt::read_i32::<LittleEndian>(self).map_err(|e| self.truncated(e, offset))
    }

    /// Read `n` raw bytes.
    pub fn read_raw(&mut self, n: usize) -> Result<Vec<u8>> {
        let offset = self.current_offset();
        let mut buf = vec![0u8; n];
        self.read_exact(&mut buf)
            .map_err(|e| self.truncated(e, offset))?;
        Ok(buf)
    }

    /// Look at the next `n` bytes without consuming them.
    pub fn peek_raw(&mut self, n: usize) -> Result<Vec<u8>> {
        debug_assert!(self.putback.is_none(), "peek with pending putback");
        let pos = self.cursor.position();
        let buf = self.read_raw(n);
        self.cursor.set_position(pos);
        buf
    }

    /// Read a NUL-terminated string, excluding the terminator.
    ///
    /// Bytes are decoded as Windows-1252, the code page the originating tool
    /// writes its strings in.
    pub fn read_string_zero_terminated(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            let b = self.read_u8()?;
            if b == 0 {
                break;
            }
            bytes.push(b);
        }
        let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
        Ok(decoded.into_owned())
    }

    /// Consume bytes that must equal `expected`.
    pub fn assume_bytes(&mut self, expected: &[u8]) -> Result<()> {
        let offset = self.current_offset();
        let got = self.read_raw(expected.len())?;
        if got != expected {
            return Err(OlbError::MagicMismatch {
                offset,
                expected: expected.to_vec(),
                got,
            });
        }
        Ok(())
    }

    /// Advance over `n` bytes whose meaning is not yet understood, leaving a
    /// debug note with the given label.
    pub fn print_unknown(&mut self, n: usize, label: &str) -> Result<()> {
        if n == 0 {
            return Ok(());
        }
        let offset = self.current_offset();
        let data = self.read_raw(n)?;
        let shown = &data[..data.len().min(16)];
        let ellipsis = if data.len() > 16 { ".." } else { "" };
        log::debug!(
            "{}: unknown data `{}` at {:#x}, {} bytes: {:02x?}{}",
            self.name,
            label,
            offset,
            n,
            shown,
            ellipsis
        );
        Ok(())
    }

    /// Fail unless every byte of the stream has been consumed.
    pub fn expect_eof(&mut self) -> Result<()> {
        if self.is_eof() {
            Ok(())
        } else {
            Err(OlbError::InvariantViolated {
                what: "trailing data after stream content",
                offset: self.current_offset(),
            })
        }
    }
}

impl Read for DataStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(b) = self.putback.take() {
            buf[0] = b;
            let n = self.cursor.read(&mut buf[1..])?;
            return Ok(n + 1);
        }
        self.cursor.read(buf)
    }
}
