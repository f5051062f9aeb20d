//! statwire - Fixed-layout binary codec and one-shot UDP reporter for statistics events
//!
//! This library encodes structured monitoring events ("module invoked interface X,
//! took Y ms, returned status/code Z, with optional message") into a fixed 17-byte
//! header plus variable body, and ships each encoded record to a remote statistics
//! collector as a single UDP datagram.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use statwire::{Reporter, StatRecord};
//!
//! // Create a record
//! let record = StatRecord::new("user", "login", 10.5, 1, 200, "ok");
//!
//! // Encode to bytes
//! let bytes = statwire::encode(&record)?;
//!
//! // Decode from bytes (receiving side)
//! let decoded = statwire::decode(&bytes)?;
//!
//! // Or fire-and-forget the record to a collector
//! let reporter = Reporter::new("0.0.0.0", 0, "192.168.1.10", statwire::DEFAULT_PORT)?;
//! reporter.send(&record)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design
//!
//! - **Pure codec** - encode/decode are free functions with no I/O and no state
//! - **Silent truncation** - over-long text fields are cut to fit, never rejected
//! - **Fire-and-forget transport** - one socket, one datagram, no retries
//! - **Hardened decode** - short or over-declared input fails cleanly, never panics
//!
//! # Wire Format
//!
//! See [`RecordHeader`] for the byte-level layout. The format is the interface
//! contract: any receiver must implement byte-compatible decoding.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
pub mod transport;

pub use protocol::{
    Error, HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_NAME_LEN, RecordHeader, Result, StatRecord, decode,
    encode, encode_with_timestamp,
};
pub use transport::{Reporter, TransportError};

/// Wire format version
pub const VERSION: &str = "1.0.0";

/// Default statistics collector port
pub const DEFAULT_PORT: u16 = 55656;
