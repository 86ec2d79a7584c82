//! Bounds-checked binary reader.
//!
//! [`BinaryReader`] borrows an immutable byte slice and walks it with a
//! cursor. Every read is checked against the remaining length before any
//! byte is consumed, so a truncated buffer surfaces as
//! [`CodecError::OutOfRange`] instead of a panic or a short value.

use crate::error::CodecError;

/// Cursor over an immutable little-endian byte buffer.
///
/// # Examples
///
/// ```
/// use evos_codec::{BinaryReader, CodecError};
///
/// let data = [0x02, 0x01, 0xFF];
/// let mut r = BinaryReader::new(&data);
/// assert_eq!(r.read_u16().unwrap(), 0x0102);
/// assert!(matches!(r.read_u16(), Err(CodecError::OutOfRange { .. })));
/// // A failed read does not move the cursor.
/// assert_eq!(r.position(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    /// Wrap `data` with the cursor at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Consume exactly `n` bytes, or fail without moving the cursor.
    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let available = self.remaining();
        if n > available {
            return Err(CodecError::OutOfRange {
                offset: self.pos,
                needed: n,
                available,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take_array::<1>()?[0])
    }

    /// Read a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        self.take_array().map(u16::from_le_bytes)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.take_array().map(u32::from_le_bytes)
    }

    /// Read a little-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        self.take_array().map(u64::from_le_bytes)
    }

    /// Read an `f32` from its IEEE-754 bit pattern.
    pub fn read_f32(&mut self) -> Result<f32, CodecError> {
        self.read_u32().map(f32::from_bits)
    }

    /// Read an `f64` from its IEEE-754 bit pattern.
    pub fn read_f64(&mut self) -> Result<f64, CodecError> {
        self.read_u64().map(f64::from_bits)
    }

    /// Read a bool; any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a `u32`-length-prefixed string.
    ///
    /// The declared length is checked against the remaining buffer before
    /// anything is copied. Bytes are not required to be valid UTF-8;
    /// invalid sequences are replaced with U+FFFD.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let start = self.pos;
        let len = self.read_u32()? as usize;
        match self.take(len) {
            Ok(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Err(e) => {
                // Leave the cursor where it was before the length prefix.
                self.pos = start;
                Err(e)
            }
        }
    }

    /// Read `n` raw bytes whose count was framed by the caller.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        self.take(n)
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the wrapped buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the wrapped buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
