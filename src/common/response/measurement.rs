// src/common/response/measurement.rs

use arrayvec::ArrayVec;

use super::MEASUREMENT_RESPONSE_LEN;
use crate::common::error::DecodeError;
use crate::common::frame::decode_pairs;
use crate::common::types::{Measurement, CHANNEL_COUNT};

/// Decodes the float-mode read-measurement response.
///
/// Each channel is two checksummed half-words whose four data bytes form a
/// big-endian IEEE754 single. The bytes are reassembled, not combined
/// arithmetically.
///
/// # Errors
///
/// * `DecodeError::ChecksumMismatch` with the absolute byte offset of the
///   first half-word group that fails validation.
pub fn decode_measurement(buf: &[u8; MEASUREMENT_RESPONSE_LEN]) -> Result<Measurement, DecodeError> {
    let pairs = decode_pairs(buf)?;

    let mut values = ArrayVec::<f32, CHANNEL_COUNT>::new();
    for channel in pairs.chunks_exact(2) {
        let [hi0, hi1] = channel[0].bytes();
        let [lo0, lo1] = channel[1].bytes();
        values.push(f32::from_bits(u32::from_be_bytes([hi0, hi1, lo0, lo1])));
    }

    let values = values
        .into_inner()
        .map_err(|_| DecodeError::InvalidLength { len: buf.len() })?;
    Ok(Measurement::from_channels(values))
}
