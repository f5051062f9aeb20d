//! Codec error types

use thiserror::Error;

/// Statistics codec errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Status byte outside the supported {0, 1} domain
    #[error("invalid status: expected 0 or 1, got {status}")]
    InvalidStatus {
        /// Rejected status value
        status: u8,
    },

    /// Declared segment lengths exceed the available bytes
    #[error("truncated input: need {needed} bytes, got {got}")]
    TruncatedInput {
        /// Bytes required by the header and its declared lengths
        needed: usize,
        /// Bytes actually available
        got: usize,
    },

    /// Header length byte with the high bit set (values 128-255 are outside
    /// the wire format's domain)
    #[error("length byte out of range in {field}: {value} (max 127)")]
    LengthOutOfRange {
        /// Header field carrying the bad length
        field: &'static str,
        /// Rejected length byte
        value: u8,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
