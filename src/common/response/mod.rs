// src/common/response/mod.rs

mod measurement;
mod status;

pub use measurement::decode_measurement;
pub use status::decode_status;

/// Length of the read-measurement response in float mode: ten channels of
/// two checksummed half-words each.
pub const MEASUREMENT_RESPONSE_LEN: usize = 60;

/// Length of the read-status response: one checksummed half-word.
pub const STATUS_RESPONSE_LEN: usize = 3;

/// Status value reported while the sensor is in measurement mode.
pub const STATUS_MEASURING: u16 = 0x0001;
