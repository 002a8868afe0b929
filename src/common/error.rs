// src/common/error.rs

use core::fmt::Debug;

/// Error building an outbound command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Command arguments must form whole 2-byte pairs.
    #[error("invalid argument length {len}: arguments must be pairs of bytes")]
    InvalidArgumentLength { len: usize },
}

/// Error decoding an inbound response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The checksum of the 3-byte group starting at `offset` did not match.
    #[error("checksum mismatch in group at byte offset {offset}")]
    ChecksumMismatch { offset: usize },

    /// Response length is not a whole number of 3-byte groups.
    #[error("invalid response length {len}: expected a multiple of 3")]
    InvalidLength { len: usize },
}

/// Error returned by the sensor driver operations.
///
/// Generic over the transport's own error type so the underlying bus error
/// is preserved as the error source.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError<E>
where
    E: std::error::Error + 'static,
{
    /// The bus transaction failed on every attempt.
    #[error("bus transaction failed after {attempts} attempts: {source}")]
    TransportExhausted {
        attempts: u32,
        #[source]
        source: E,
    },

    /// Received data failed checksum validation. Never retried.
    #[error("checksum mismatch in response at byte offset {offset}")]
    ChecksumMismatch { offset: usize },

    /// A command was built with an odd number of argument bytes.
    #[error("invalid command argument length {len}")]
    InvalidArgumentLength { len: usize },

    /// A response buffer was not a whole number of 3-byte groups.
    #[error("invalid response length {len}")]
    InvalidResponseLength { len: usize },
}

impl<E> From<EncodeError> for ProtocolError<E>
where
    E: std::error::Error + 'static,
{
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::InvalidArgumentLength { len } => ProtocolError::InvalidArgumentLength { len },
        }
    }
}

impl<E> From<DecodeError> for ProtocolError<E>
where
    E: std::error::Error + 'static,
{
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::ChecksumMismatch { offset } => ProtocolError::ChecksumMismatch { offset },
            DecodeError::InvalidLength { len } => ProtocolError::InvalidResponseLength { len },
        }
    }
}

impl<E> ProtocolError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns `true` if the error indicates corrupted data rather than a bus fault.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, ProtocolError::ChecksumMismatch { .. })
    }
}

/// Wraps a bus error that only implements `Debug` (as embedded-hal errors do).
#[derive(Debug, thiserror::Error)]
#[error("I2C bus error: {0:?}")]
pub struct BusError<E: Debug>(pub E);
