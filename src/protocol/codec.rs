//! Statistics record codec (encode/decode)
//!
//! Pure functions converting between [`StatRecord`] and the fixed-layout wire
//! format. No I/O and no state; the only ambient input is the clock read that
//! stamps `time_stamp` during [`encode`].

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::BufMut;

use super::{Error, HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_NAME_LEN, RecordHeader, Result, StatRecord};

/// Encode a record to bytes, stamping the current wall-clock time
///
/// # Format
///
/// ```text
/// [HEADER (17 bytes)] [MODULE] [INTERFACE] [MSG]
/// ```
///
/// Module and interface are silently truncated to 127 bytes; msg is silently
/// truncated so the total never exceeds 65507 bytes (one UDP payload). The
/// record's own `time_stamp` and `msg_len` are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidStatus`] if the status byte is not 0 or 1.
pub fn encode(record: &StatRecord) -> Result<Vec<u8>> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or_default();
    encode_with_timestamp(record, now)
}

/// Encode a record to bytes with an explicit timestamp
///
/// Deterministic counterpart of [`encode`]: same layout and truncation rules,
/// but the caller supplies the `time_stamp` seconds. Useful for replay tooling
/// and byte-exact assertions.
///
/// # Errors
///
/// Returns [`Error::InvalidStatus`] if the status byte is not 0 or 1.
pub fn encode_with_timestamp(record: &StatRecord, time_stamp: u32) -> Result<Vec<u8>> {
    if record.status > 1 {
        return Err(Error::InvalidStatus {
            status: record.status,
        });
    }

    // Exact byte cuts, not char-boundary cuts: the length bookkeeping below
    // must hold byte-for-byte, and the wire format predates UTF-8 awareness.
    let module = truncate(record.module.as_bytes(), MAX_NAME_LEN);
    let interface = truncate(record.interface.as_bytes(), MAX_NAME_LEN);

    let available = MAX_DATAGRAM_SIZE - HEADER_SIZE - module.len() - interface.len();
    let msg = truncate(record.msg.as_bytes(), available);

    let header = RecordHeader::new(
        module.len() as u8,
        interface.len() as u8,
        record.cost_time,
        record.status,
        record.code,
        msg.len() as u16,
        time_stamp,
    );

    let mut bytes = Vec::with_capacity(header.total_len());
    bytes.put_slice(&header.to_bytes());
    bytes.put_slice(module);
    bytes.put_slice(interface);
    bytes.put_slice(msg);

    Ok(bytes)
}

/// Decode a record from bytes
///
/// Best-effort: empty input yields a zero-valued record, and text segments are
/// read as UTF-8 with lossy replacement (an encode-side truncation may have cut
/// a multi-byte character). Structural problems still fail hard — the declared
/// segment lengths are checked against the available bytes before any slicing,
/// so malformed input can never cause an out-of-bounds read or a panic.
///
/// # Errors
///
/// Returns an error if:
/// - Input is shorter than the 17-byte header (but non-empty)
/// - A header length byte has the high bit set
/// - Declared segment lengths exceed the remaining bytes
pub fn decode(bytes: &[u8]) -> Result<StatRecord> {
    if bytes.is_empty() {
        return Ok(StatRecord::default());
    }

    let header = RecordHeader::from_bytes(bytes)?;

    let needed = header.total_len();
    if bytes.len() < needed {
        return Err(Error::TruncatedInput {
            needed,
            got: bytes.len(),
        });
    }

    let body = &bytes[HEADER_SIZE..];
    let interface_end = header.module_len() + header.interface_len();
    let module = &body[..header.module_len()];
    let interface = &body[header.module_len()..interface_end];
    let msg = &body[interface_end..interface_end + header.msg_len()];

    Ok(StatRecord {
        module: String::from_utf8_lossy(module).into_owned(),
        interface: String::from_utf8_lossy(interface).into_owned(),
        cost_time: header.cost_time(),
        status: header.status(),
        code: header.code(),
        time_stamp: header.time_stamp(),
        msg: String::from_utf8_lossy(msg).into_owned(),
        msg_len: header.msg_len() as u16,
    })
}

fn truncate(bytes: &[u8], max: usize) -> &[u8] {
    if bytes.len() > max { &bytes[..max] } else { bytes }
}
