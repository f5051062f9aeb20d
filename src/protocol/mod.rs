//! Statistics wire protocol core
//!
//! This module provides the wire format, record type, and codec for statistics
//! events.

mod codec;
mod error;
mod header;
mod record;

pub use codec::{decode, encode, encode_with_timestamp};
pub use error::{Error, Result};
pub use header::RecordHeader;
pub use record::StatRecord;

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = 17;

/// Maximum encoded record size (largest UDP payload this protocol supports)
pub const MAX_DATAGRAM_SIZE: usize = 65507;

/// Maximum byte length of the module and interface names (fits one length byte
/// with the high bit clear)
pub const MAX_NAME_LEN: usize = 127;
