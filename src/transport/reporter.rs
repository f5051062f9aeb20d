//! One-shot UDP reporter
//!
//! Holds an immutable source/destination endpoint pair and performs one
//! bind-write-close cycle per record. No retries, no acknowledgement, no
//! connection reuse: UDP delivers at most once and statistics reporting
//! tolerates loss.

use std::net::{IpAddr, SocketAddr, UdpSocket};

use tracing::{debug, trace};

use crate::protocol::{self, StatRecord};

use super::TransportError;

/// Fire-and-forget sender for statistics records
///
/// Each [`send`](Reporter::send) call creates and drops its own socket, so a
/// single `Reporter` may be shared across threads without locking; the only
/// state is the read-only endpoint pair.
#[derive(Debug, Clone)]
pub struct Reporter {
    source: SocketAddr,
    dest: SocketAddr,
}

impl Reporter {
    /// Create a reporter from source and destination endpoints
    ///
    /// A source port of 0 lets the OS pick an ephemeral port per send.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidAddress`] if either IP string fails to
    /// parse.
    pub fn new(
        source_ip: &str,
        source_port: u16,
        dest_ip: &str,
        dest_port: u16,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            source: SocketAddr::new(parse_ip(source_ip)?, source_port),
            dest: SocketAddr::new(parse_ip(dest_ip)?, dest_port),
        })
    }

    /// Get the source endpoint
    #[must_use]
    pub const fn source_addr(&self) -> SocketAddr {
        self.source
    }

    /// Get the destination endpoint
    #[must_use]
    pub const fn dest_addr(&self) -> SocketAddr {
        self.dest
    }

    /// Encode a record and send it as a single datagram
    ///
    /// One write attempt; the socket is closed on every exit path when it goes
    /// out of scope.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if the record fails to encode (bad
    /// status byte) and [`TransportError::Socket`] if the bind or the write
    /// fails. A failed datagram is dropped, never retried.
    pub fn send(&self, record: &StatRecord) -> Result<(), TransportError> {
        let socket = UdpSocket::bind(self.source)?;
        let bytes = protocol::encode(record)?;

        trace!(
            module = %record.module,
            interface = %record.interface,
            len = bytes.len(),
            "sending statistics datagram"
        );
        let written = socket.send_to(&bytes, self.dest)?;
        debug!(dest = %self.dest, written, "statistics datagram sent");

        Ok(())
    }
}

fn parse_ip(addr: &str) -> Result<IpAddr, TransportError> {
    addr.parse()
        .map_err(|source| TransportError::InvalidAddress {
            addr: addr.to_string(),
            source,
        })
}
