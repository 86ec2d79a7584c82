//! Binary codec for evos save data.
//!
//! A deliberately small format: little-endian fixed-width primitives,
//! `u32`-length-prefixed strings, and no self-describing schema. Field
//! order is fixed by each record's encode/decode pair.
//!
//! # Architecture
//!
//! - [`BinaryWriter`] appends primitives to a growable buffer and never fails
//! - [`BinaryReader`] walks a borrowed slice, bounds-checking every read
//! - [`envelope`] wraps payloads in the `EVOS` magic + format version header
//!
//! # Format
//!
//! ```text
//! [MAGIC u32 0x45564F53] [VERSION u16] [payload ...]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod envelope;
pub mod error;
pub mod reader;
pub mod writer;

pub use envelope::{
    decode_enveloped, encode_enveloped, read_envelope, write_envelope, CURRENT_VERSION,
    HEADER_LEN, MAGIC,
};
pub use error::CodecError;
pub use reader::BinaryReader;
pub use writer::BinaryWriter;
