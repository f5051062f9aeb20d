//! Fixed statistics record header
//!
//! The header is 17 bytes. Integers are big-endian; `cost_time` alone is a
//! little-endian float. That asymmetry is part of the wire contract and must
//! not be normalized.

use super::{Error, HEADER_SIZE, MAX_NAME_LEN, Result};

/// Statistics record header (17 bytes)
///
/// # Wire Format
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Module Len   | Interface Len |    Cost Time (4, LE float)    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Cost Time (cont.)            |    Status     |   Code (4,    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   BE) (cont.)                 |       Msg Len (2, BE)         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     Timestamp (4, BE)                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The body follows immediately: Module bytes, then Interface bytes, then Msg
/// bytes, with the lengths declared here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordHeader {
    module_len: u8,
    interface_len: u8,
    cost_time: f32,
    status: u8,
    code: u32,
    msg_len: u16,
    time_stamp: u32,
}

impl RecordHeader {
    /// Create a new record header
    #[must_use]
    pub fn new(
        module_len: u8,
        interface_len: u8,
        cost_time: f32,
        status: u8,
        code: u32,
        msg_len: u16,
        time_stamp: u32,
    ) -> Self {
        Self {
            module_len,
            interface_len,
            cost_time,
            status,
            code,
            msg_len,
            time_stamp,
        }
    }

    /// Get module byte length
    #[must_use]
    pub const fn module_len(&self) -> usize {
        self.module_len as usize
    }

    /// Get interface byte length
    #[must_use]
    pub const fn interface_len(&self) -> usize {
        self.interface_len as usize
    }

    /// Get elapsed time
    #[must_use]
    pub const fn cost_time(&self) -> f32 {
        self.cost_time
    }

    /// Get status byte
    #[must_use]
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// Get result code
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Get message byte length
    #[must_use]
    pub const fn msg_len(&self) -> usize {
        self.msg_len as usize
    }

    /// Get encode-time timestamp (seconds since epoch)
    #[must_use]
    pub const fn time_stamp(&self) -> u32 {
        self.time_stamp
    }

    /// Total encoded record size implied by this header
    #[must_use]
    pub const fn total_len(&self) -> usize {
        HEADER_SIZE + self.module_len() + self.interface_len() + self.msg_len()
    }

    /// Validate header
    ///
    /// Length bytes with the high bit set (128-255) are outside the format's
    /// domain and are rejected rather than reinterpreted. Status is not checked
    /// here: decode is best-effort and passes the byte through.
    pub fn validate(&self) -> Result<()> {
        if self.module_len as usize > MAX_NAME_LEN {
            return Err(Error::LengthOutOfRange {
                field: "module_len",
                value: self.module_len,
            });
        }

        if self.interface_len as usize > MAX_NAME_LEN {
            return Err(Error::LengthOutOfRange {
                field: "interface_len",
                value: self.interface_len,
            });
        }

        Ok(())
    }

    /// Convert to bytes
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];

        bytes[0] = self.module_len;
        bytes[1] = self.interface_len;
        bytes[2..6].copy_from_slice(&self.cost_time.to_le_bytes());
        bytes[6] = self.status;
        bytes[7..11].copy_from_slice(&self.code.to_be_bytes());
        bytes[11..13].copy_from_slice(&self.msg_len.to_be_bytes());
        bytes[13..17].copy_from_slice(&self.time_stamp.to_be_bytes());

        bytes
    }

    /// Parse from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::TruncatedInput {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }

        let header = Self {
            module_len: bytes[0],
            interface_len: bytes[1],
            cost_time: f32::from_le_bytes(bytes[2..6].try_into().unwrap()),
            status: bytes[6],
            code: u32::from_be_bytes(bytes[7..11].try_into().unwrap()),
            msg_len: u16::from_be_bytes(bytes[11..13].try_into().unwrap()),
            time_stamp: u32::from_be_bytes(bytes[13..17].try_into().unwrap()),
        };

        header.validate()?;
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = RecordHeader::new(4, 3, 10.01, 1, 200, 3, 1_700_000_000);
        let bytes = header.to_bytes();
        let decoded = RecordHeader::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.module_len(), 4);
        assert_eq!(decoded.interface_len(), 3);
        assert_eq!(decoded.cost_time(), 10.01);
        assert_eq!(decoded.status(), 1);
        assert_eq!(decoded.code(), 200);
        assert_eq!(decoded.msg_len(), 3);
        assert_eq!(decoded.time_stamp(), 1_700_000_000);
        assert_eq!(decoded.total_len(), 17 + 4 + 3 + 3);
    }

    #[test]
    fn test_field_offsets() {
        let header = RecordHeader::new(1, 2, 1.5, 1, 1, 0x0304, 0x0506_0708);
        let bytes = header.to_bytes();

        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[1], 2);
        // 1.5f32 little-endian
        assert_eq!(&bytes[2..6], &[0x00, 0x00, 0xC0, 0x3F]);
        assert_eq!(bytes[6], 1);
        // code 1 big-endian
        assert_eq!(&bytes[7..11], &[0x00, 0x00, 0x00, 0x01]);
        assert_eq!(&bytes[11..13], &[0x03, 0x04]);
        assert_eq!(&bytes[13..17], &[0x05, 0x06, 0x07, 0x08]);
    }

    #[test]
    fn test_short_header() {
        let result = RecordHeader::from_bytes(&[0u8; 16]);
        assert_eq!(
            result,
            Err(Error::TruncatedInput {
                needed: 17,
                got: 16
            })
        );
    }

    #[test]
    fn test_length_byte_high_bit_rejected() {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0] = 128;

        let result = RecordHeader::from_bytes(&bytes);
        assert!(matches!(
            result,
            Err(Error::LengthOutOfRange {
                field: "module_len",
                value: 128
            })
        ));

        bytes[0] = 0;
        bytes[1] = 255;
        let result = RecordHeader::from_bytes(&bytes);
        assert!(matches!(
            result,
            Err(Error::LengthOutOfRange {
                field: "interface_len",
                value: 255
            })
        ));
    }
}
