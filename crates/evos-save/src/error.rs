//! Error types for saving and loading snapshots.

use std::fmt;
use std::io;
use std::path::PathBuf;

use evos_codec::CodecError;

/// Errors surfaced by [`SaveSystem`](crate::SaveSystem) and the snapshot codec.
///
/// Nothing is retried internally; every failure reaches the caller.
#[derive(Debug)]
pub enum SaveError {
    /// Decoding failed. The codec error (truncation, bad magic, newer
    /// version) is kept as the [`source`](std::error::Error::source).
    Load {
        /// The underlying codec failure.
        source: CodecError,
    },
    /// A file could not be opened, read, or written.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The temperature block does not hold exactly `width * height` values.
    TemperatureCountMismatch {
        /// `world.width * world.height`.
        expected: u64,
        /// Number of temperatures actually present.
        found: u64,
    },
    /// A snapshot was applied to a grid of a different size.
    DimensionMismatch {
        /// `(width, height)` recorded in the snapshot.
        snapshot: (u32, u32),
        /// `(width, height)` of the target grid.
        grid: (u32, u32),
    },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { source } => write!(f, "failed to load game: {source}"),
            Self::Io { path, source } => {
                write!(f, "file error on {}: {source}", path.display())
            }
            Self::TemperatureCountMismatch { expected, found } => write!(
                f,
                "temperature count mismatch: expected {expected}, found {found}"
            ),
            Self::DimensionMismatch { snapshot, grid } => write!(
                f,
                "snapshot is {}x{} but grid is {}x{}",
                snapshot.0, snapshot.1, grid.0, grid.1
            ),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CodecError> for SaveError {
    fn from(source: CodecError) -> Self {
        Self::Load { source }
    }
}
