//! Snapshot schema and save/load coordination for evos simulations.
//!
//! A save is a [`SnapshotRecord`] built fresh from the current
//! [`TemperatureGrid`](evos_thermal::TemperatureGrid), encoded with
//! `evos-codec` inside an `EVOS` envelope, and optionally written to disk.
//! Loading reverses the process and hands the record back to the caller;
//! restoring it onto a grid is a separate, explicit step
//! ([`SnapshotRecord::apply_to`]).
//!
//! # Architecture
//!
//! - [`SaveSystem`] captures, encodes, decodes, and does file I/O
//! - [`record`] defines the record types and their fixed field order
//! - [`SaveError`] wraps codec failures and carries I/O context

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod system;

pub use error::SaveError;
pub use evos_codec::CURRENT_VERSION;
pub use record::{
    decode_snapshot, encode_snapshot, CreatureRecord, SnapshotRecord, TemperatureBlock, WorldInfo,
};
pub use system::{system_clock, Clock, SaveSystem};
