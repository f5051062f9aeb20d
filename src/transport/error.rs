//! Transport-level error types covering address and socket failures

use std::net::AddrParseError;

use thiserror::Error;

/// Unified error type for reporter operations
#[derive(Error, Debug)]
pub enum TransportError {
    /// An endpoint IP string failed to parse
    #[error("invalid address {addr:?}: {source}")]
    InvalidAddress {
        /// Rejected IP string
        addr: String,
        /// Parse failure
        source: AddrParseError,
    },

    /// Underlying socket failed to bind or write
    #[error("socket error: {0}")]
    Socket(#[from] std::io::Error),

    /// Record failed to encode; nothing was sent
    #[error("encode error: {0}")]
    Encode(#[from] crate::protocol::Error),
}
