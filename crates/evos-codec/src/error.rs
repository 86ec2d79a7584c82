//! Error types for the binary codec.

use std::fmt;

/// Errors raised while decoding an EVOS byte buffer.
///
/// Encoding never fails; every variant here comes from a
/// [`BinaryReader`](crate::BinaryReader) or from envelope validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A read would run past the end of the buffer (truncated or corrupt data).
    OutOfRange {
        /// Cursor position at which the read was attempted.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes left after `offset`.
        available: usize,
    },
    /// The buffer does not start with the EVOS magic number.
    InvalidFormat {
        /// The magic value found in the buffer.
        found: u32,
    },
    /// The envelope declares a format version newer than this build understands.
    IncompatibleVersion {
        /// The version found in the envelope.
        found: u16,
        /// The newest version this build can decode.
        current: u16,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                offset,
                needed,
                available,
            } => write!(
                f,
                "read past end of buffer: needed {needed} bytes at offset {offset}, \
                 {available} available"
            ),
            Self::InvalidFormat { found } => {
                write!(f, "invalid file format: magic {found:#010x}")
            }
            Self::IncompatibleVersion { found, current } => {
                write!(
                    f,
                    "incompatible save version {found} (newest supported is {current})"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offsets() {
        let err = CodecError::OutOfRange {
            offset: 6,
            needed: 4,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("offset 6"));
        assert!(msg.contains("needed 4"));
    }

    #[test]
    fn display_formats_magic_as_hex() {
        let err = CodecError::InvalidFormat { found: 0x4556_4F54 };
        assert_eq!(err.to_string(), "invalid file format: magic 0x45564f54");
    }
}
