// src/common/frame.rs

use super::crc::validate;
use super::error::DecodeError;

/// Size of one inbound group: two data bytes and their checksum.
pub const GROUP_LEN: usize = 3;

/// A validated half-word from an inbound frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RawPair([u8; 2]);

impl RawPair {
    pub fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// The two data bytes in wire order.
    pub fn bytes(&self) -> [u8; 2] {
        self.0
    }

    /// The half-word as a big-endian integer.
    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

/// Splits an inbound frame into half-words, validating every group's checksum.
///
/// Any failing group fails the whole frame; no partial result is returned.
///
/// # Errors
///
/// * `DecodeError::InvalidLength` if `buf` is not a whole number of groups.
/// * `DecodeError::ChecksumMismatch` with the byte offset of the first bad group.
pub fn decode_pairs(buf: &[u8]) -> Result<Vec<RawPair>, DecodeError> {
    if buf.len() % GROUP_LEN != 0 {
        return Err(DecodeError::InvalidLength { len: buf.len() });
    }

    buf.chunks_exact(GROUP_LEN)
        .enumerate()
        .map(|(index, group)| {
            let data = [group[0], group[1]];
            if validate(data, group[2]) {
                Ok(RawPair(data))
            } else {
                Err(DecodeError::ChecksumMismatch { offset: index * GROUP_LEN })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::crc::checksum;

    fn group(bytes: [u8; 2]) -> [u8; 3] {
        [bytes[0], bytes[1], checksum(bytes)]
    }

    #[test]
    fn test_decode_valid_groups() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&group([0xBE, 0xEF]));
        buf.extend_from_slice(&group([0x00, 0x01]));
        let pairs = decode_pairs(&buf).unwrap();
        assert_eq!(pairs, vec![RawPair::new([0xBE, 0xEF]), RawPair::new([0x00, 0x01])]);
        assert_eq!(pairs[0].as_u16(), 0xBEEF);
        assert_eq!(pairs[1].as_u16(), 0x0001);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_pairs(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_rejects_partial_group() {
        assert_eq!(decode_pairs(&[0xBE, 0xEF]), Err(DecodeError::InvalidLength { len: 2 }));
        assert_eq!(
            decode_pairs(&[0xBE, 0xEF, 0x92, 0x00]),
            Err(DecodeError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn test_corruption_reports_group_offset() {
        let clean: Vec<u8> = [[0x01, 0x02], [0x03, 0x04], [0x05, 0x06], [0x07, 0x08]]
            .into_iter()
            .flat_map(group)
            .collect();
        assert!(decode_pairs(&clean).is_ok());

        for byte in 0..clean.len() {
            let mut corrupted = clean.clone();
            corrupted[byte] ^= 0x01;
            assert_eq!(
                decode_pairs(&corrupted),
                Err(DecodeError::ChecksumMismatch { offset: byte / GROUP_LEN * GROUP_LEN }),
                "corrupted byte {}",
                byte
            );
        }
    }

    #[test]
    fn test_first_bad_group_wins() {
        let buf = [0xFF; 9];
        assert_eq!(decode_pairs(&buf), Err(DecodeError::ChecksumMismatch { offset: 0 }));
    }
}
