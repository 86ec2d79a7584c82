//! Append-only binary writer.
//!
//! [`BinaryWriter`] accumulates little-endian primitives into a growable
//! buffer. Writes cannot fail; the only limit is available memory.

/// Growable little-endian byte sink.
///
/// # Examples
///
/// ```
/// use evos_codec::BinaryWriter;
///
/// let mut w = BinaryWriter::new();
/// w.write_u16(0x0102);
/// w.write_string("hi");
/// assert_eq!(w.as_bytes(), &[0x02, 0x01, 2, 0, 0, 0, b'h', b'i']);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    /// Write a little-endian `u16`.
    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Write a little-endian `u32`.
    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Write a little-endian `u64`.
    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Write an `f32` as its IEEE-754 bit pattern.
    pub fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    /// Write an `f64` as its IEEE-754 bit pattern.
    pub fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    /// Write a bool as a single `0`/`1` byte.
    pub fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    /// Write a string as a `u32` byte length followed by its UTF-8 bytes.
    ///
    /// Strings longer than `u32::MAX` bytes are not representable; the
    /// length prefix saturates and the reader will see a short string.
    pub fn write_string(&mut self, s: &str) {
        let len = u32::try_from(s.len()).unwrap_or(u32::MAX);
        self.write_u32(len);
        self.buf.extend_from_slice(&s.as_bytes()[..len as usize]);
    }

    /// Write raw bytes with no length framing.
    ///
    /// The caller records the count separately.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the accumulated buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
