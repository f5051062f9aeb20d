//! Statistics record implementation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One statistics event: module, interface, timing, status, code, message.
///
/// A plain value object with no identity beyond its contents. `time_stamp` and
/// `msg_len` are stamped by the encoder; values supplied here are ignored on
/// encode and populated on decode.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatRecord {
    /// Reporting module name (truncated to 127 bytes on encode)
    pub module: String,
    /// Invoked interface name (truncated to 127 bytes on encode)
    #[cfg_attr(feature = "serde", serde(rename = "inter_face"))]
    pub interface: String,
    /// Elapsed time, unit-agnostic
    pub cost_time: f32,
    /// Outcome flag, 0 or 1; any other value fails encoding
    pub status: u8,
    /// Application-defined result code
    pub code: u32,
    /// Seconds since epoch, set at encode time
    pub time_stamp: u32,
    /// Free-form message (truncated to fit the datagram on encode)
    pub msg: String,
    /// Byte length of `msg` as transmitted; derived, never caller-supplied
    pub msg_len: u16,
}

impl StatRecord {
    /// Create a new record
    ///
    /// `time_stamp` and `msg_len` start at zero; the encoder fills them in.
    pub fn new(
        module: impl Into<String>,
        interface: impl Into<String>,
        cost_time: f32,
        status: u8,
        code: u32,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            interface: interface.into(),
            cost_time,
            status,
            code,
            time_stamp: 0,
            msg: msg.into(),
            msg_len: 0,
        }
    }

    /// Encode record to bytes, stamping the current time
    pub fn encode(&self) -> super::Result<Vec<u8>> {
        super::encode(self)
    }

    /// Decode record from bytes
    pub fn decode(bytes: &[u8]) -> super::Result<Self> {
        super::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = StatRecord::new("user", "login", 10.5, 1, 200, "ok");

        assert_eq!(record.module, "user");
        assert_eq!(record.interface, "login");
        assert_eq!(record.status, 1);
        assert_eq!(record.code, 200);
        assert_eq!(record.time_stamp, 0);
        assert_eq!(record.msg_len, 0);
    }

    #[test]
    fn test_record_roundtrip() {
        let original = StatRecord::new("order", "create", 3.25, 0, 5001, "timeout");
        let encoded = original.encode().unwrap();
        let decoded = StatRecord::decode(&encoded).unwrap();

        assert_eq!(decoded.module, original.module);
        assert_eq!(decoded.interface, original.interface);
        assert_eq!(decoded.msg, original.msg);
        assert_eq!(decoded.status, original.status);
        assert_eq!(decoded.code, original.code);
        assert_eq!(decoded.msg_len, 7);
    }
}
