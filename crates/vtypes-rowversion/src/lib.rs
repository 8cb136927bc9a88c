//! # vtypes-rowversion — Row Version Stamps
//!
//! An immutable 8-byte optimistic-concurrency token as produced by
//! relational stores, with three construction paths (bytes, unsigned
//! integer, tick timestamp) and five textual encodings:
//!
//! - **General / MsSql**: `0x000000000000000a`
//! - **Oracle**: `10`
//! - **MySql**: `0001-01-01 00:00:00`
//! - **HexViewer**: `0a 00 00 00 00 00 00 00`
//!
//! The type is pure data: no I/O, no shared state, `Copy`.

pub mod format;
pub mod row_version;
pub mod ticks;

pub use format::{Encoding, LetterCase, RowVersionFormat};
pub use row_version::{RowVersion, ROW_VERSION_SIZE};
pub use ticks::{TickTimestamp, TICKS_PER_SECOND};
pub use vtypes_core::RowVersionError;
