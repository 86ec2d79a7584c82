//! The EVOS envelope: magic number and format version ahead of every payload.
//!
//! ```text
//! [MAGIC u32 = 0x45564F53] [VERSION u16] [payload ...]
//! ```
//!
//! Writers always stamp [`CURRENT_VERSION`]. Readers accept any version up
//! to and including [`CURRENT_VERSION`] and decode the payload with the
//! current rules; there is no per-version branching. A payload written by
//! an older layout is therefore parsed as if it were current.

use crate::error::CodecError;
use crate::reader::BinaryReader;
use crate::writer::BinaryWriter;

/// Magic number at offset 0 of every envelope (`"EVOS"` read as a big-endian u32).
pub const MAGIC: u32 = 0x4556_4F53;

/// The format version this build writes, and the newest it will read.
pub const CURRENT_VERSION: u16 = 1;

/// Size in bytes of the envelope header.
pub const HEADER_LEN: usize = 6;

/// Write the envelope header with [`CURRENT_VERSION`].
pub fn write_envelope(w: &mut BinaryWriter) {
    w.write_u32(MAGIC);
    w.write_u16(CURRENT_VERSION);
}

/// Read and validate the envelope header, returning the declared version.
///
/// On success the reader is positioned at the first payload byte.
pub fn read_envelope(r: &mut BinaryReader<'_>) -> Result<u16, CodecError> {
    let magic = r.read_u32()?;
    if magic != MAGIC {
        return Err(CodecError::InvalidFormat { found: magic });
    }
    let version = r.read_u16()?;
    if version > CURRENT_VERSION {
        return Err(CodecError::IncompatibleVersion {
            found: version,
            current: CURRENT_VERSION,
        });
    }
    Ok(version)
}

/// Encode a payload inside an envelope and return the finished buffer.
///
/// # Examples
///
/// ```
/// use evos_codec::{decode_enveloped, encode_enveloped};
///
/// let bytes = encode_enveloped(|w| w.write_u32(7));
/// let (version, value) = decode_enveloped(&bytes, |r, _| r.read_u32()).unwrap();
/// assert_eq!(version, evos_codec::CURRENT_VERSION);
/// assert_eq!(value, 7);
/// ```
pub fn encode_enveloped(payload: impl FnOnce(&mut BinaryWriter)) -> Vec<u8> {
    let mut w = BinaryWriter::new();
    write_envelope(&mut w);
    payload(&mut w);
    w.into_bytes()
}

/// Validate the envelope of `bytes`, then run `payload` on the remainder.
///
/// `payload` receives the accepted envelope version alongside the reader.
/// Errors from `payload` must be convertible from [`CodecError`] so that
/// envelope failures and payload failures share one error type.
pub fn decode_enveloped<T, E>(
    bytes: &[u8],
    payload: impl FnOnce(&mut BinaryReader<'_>, u16) -> Result<T, E>,
) -> Result<(u16, T), E>
where
    E: From<CodecError>,
{
    let mut r = BinaryReader::new(bytes);
    let version = read_envelope(&mut r)?;
    let value = payload(&mut r, version)?;
    Ok((version, value))
}
