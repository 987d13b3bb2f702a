//! Byte-level primitives for the SFMesh wire format.
//!
//! All multi-byte fields are little-endian regardless of host
//! architecture. Reads check the remaining length up front so a short
//! buffer always surfaces as
//! [`TruncatedInput`](SfMeshError::TruncatedInput) naming the field that
//! could not be read.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, SfMeshError};

/// Read cursor over a byte slice: position plus remaining length.
#[derive(Debug)]
pub struct MeshCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MeshCursor<'a> {
    /// Wrap a byte slice, positioned at the start.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the cursor has reached the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Consume `len` bytes, returning them as a slice.
    fn take(&mut self, field: &'static str, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(SfMeshError::TruncatedInput {
                field,
                needed: len - self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Advance past `len` bytes without reading them.
    pub fn skip(&mut self, field: &'static str, len: usize) -> Result<()> {
        self.take(field, len).map(|_| ())
    }

    /// Read a u8.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.take(field, 1)?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(field, 2)?))
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(field, 4)?))
    }

    /// Read a little-endian f32.
    pub fn read_f32(&mut self, field: &'static str) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(field, 4)?))
    }

    /// Read a length-prefixed UTF-8 string: u32 byte length, then the
    /// bytes.
    pub fn read_string(&mut self, field: &'static str) -> Result<String> {
        let len = self.read_u32(field)? as usize;
        let bytes = self.take(field, len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| SfMeshError::InvalidEncoding(format!("{field}: {e}")))
    }
}

/// Growable little-endian output buffer.
///
/// Writes are infallible; the buffer grows as needed and is returned (or
/// dropped) when the encoding call exits.
#[derive(Debug, Default)]
pub struct MeshBuffer {
    data: Vec<u8>,
}

impl MeshBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a u8.
    pub fn write_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    /// Write a little-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a little-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a little-endian f32.
    pub fn write_f32(&mut self, value: f32) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) {
        self.write_u32(value.len() as u32);
        self.data.extend_from_slice(value.as_bytes());
    }

    /// The written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
