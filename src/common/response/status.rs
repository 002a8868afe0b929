// src/common/response/status.rs

use super::{STATUS_MEASURING, STATUS_RESPONSE_LEN};
use crate::common::error::DecodeError;
use crate::common::frame::decode_pairs;

/// Decodes the read-status response.
///
/// Returns `true` only for the exact value `0x0001`; every other validated
/// value means "not measuring" and is not an error.
pub fn decode_status(buf: &[u8; STATUS_RESPONSE_LEN]) -> Result<bool, DecodeError> {
    let pairs = decode_pairs(buf)?;
    Ok(pairs.first().map(|pair| pair.as_u16()) == Some(STATUS_MEASURING))
}
