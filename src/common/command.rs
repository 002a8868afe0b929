//! SPS30 command definitions and outbound frame encoding.
//!
//! See the SPS30 datasheet, section 6.3 "I2C Commands".

use core::fmt;

use super::crc::checksum;
use super::error::EncodeError;

/// Output format argument for [`Command::StartMeasurement`]: big-endian IEEE754 floats.
pub const OUTPUT_FORMAT_FLOAT: [u8; 2] = [0x03, 0x00];

/// Represents an SPS30 I2C command.
///
/// Every command is a 16-bit opcode, optionally followed by argument half-words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start Measurement (`0x0010`) - Switches the sensor to measurement mode.
    /// Takes the output format as a single argument half-word.
    StartMeasurement { output_format: [u8; 2] },

    /// Stop Measurement (`0x0104`) - Returns the sensor to idle mode.
    StopMeasurement,

    /// Read Measured Values (`0x0300`) - Followed by a 60-byte response in float mode.
    ReadMeasurement,

    /// Start Fan Cleaning (`0x5607`) - Runs the fan at maximum speed for 10 seconds.
    StartFanCleaning,

    /// Read Data-Ready Flag (`0x0202`) - Followed by a 3-byte response.
    ReadStatus,
}

impl Command {
    /// Start measurement with float output, as sent by the driver.
    pub const fn start_float() -> Self {
        Command::StartMeasurement { output_format: OUTPUT_FORMAT_FLOAT }
    }

    /// Returns the 16-bit opcode of the command.
    pub fn opcode(&self) -> u16 {
        match self {
            Command::StartMeasurement { .. } => 0x0010,
            Command::StopMeasurement => 0x0104,
            Command::ReadMeasurement => 0x0300,
            Command::StartFanCleaning => 0x5607,
            Command::ReadStatus => 0x0202,
        }
    }

    /// Returns the raw argument bytes, if the command takes any.
    pub fn arguments(&self) -> Option<&[u8]> {
        match self {
            Command::StartMeasurement { output_format } => Some(output_format.as_slice()),
            _ => None,
        }
    }

    /// Length in bytes of the response the command produces, if any.
    pub fn response_len(&self) -> Option<usize> {
        match self {
            Command::ReadMeasurement => Some(super::response::MEASUREMENT_RESPONSE_LEN),
            Command::ReadStatus => Some(super::response::STATUS_RESPONSE_LEN),
            _ => None,
        }
    }

    /// Builds the wire frame for this command.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        encode(self.opcode(), self.arguments())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::StartMeasurement { .. } => "start measurement",
            Command::StopMeasurement => "stop measurement",
            Command::ReadMeasurement => "read measurement",
            Command::StartFanCleaning => "start fan cleaning",
            Command::ReadStatus => "read status",
        };
        write!(f, "{} ({:#06x})", name, self.opcode())
    }
}

/// Encodes an outbound frame: the big-endian opcode followed by every
/// argument pair and its checksum.
///
/// # Errors
///
/// * `EncodeError::InvalidArgumentLength` if `args` has an odd length.
pub fn encode(opcode: u16, args: Option<&[u8]>) -> Result<Vec<u8>, EncodeError> {
    let args = args.unwrap_or_default();
    if args.len() % 2 != 0 {
        return Err(EncodeError::InvalidArgumentLength { len: args.len() });
    }

    let mut frame = Vec::with_capacity(2 + args.len() / 2 * 3);
    frame.extend_from_slice(&opcode.to_be_bytes());
    for pair in args.chunks_exact(2) {
        let pair = [pair[0], pair[1]];
        frame.extend_from_slice(&pair);
        frame.push(checksum(pair));
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::frame::decode_pairs;

    #[test]
    fn test_opcodes() {
        assert_eq!(Command::start_float().opcode(), 0x0010);
        assert_eq!(Command::StopMeasurement.opcode(), 0x0104);
        assert_eq!(Command::ReadMeasurement.opcode(), 0x0300);
        assert_eq!(Command::StartFanCleaning.opcode(), 0x5607);
        assert_eq!(Command::ReadStatus.opcode(), 0x0202);
    }

    #[test]
    fn test_start_measurement_frame() {
        let frame = Command::start_float().encode().unwrap();
        assert_eq!(frame, vec![0x00, 0x10, 0x03, 0x00, 0xAC]);
    }

    #[test]
    fn test_commands_without_arguments() {
        assert_eq!(Command::StopMeasurement.encode().unwrap(), vec![0x01, 0x04]);
        assert_eq!(Command::ReadMeasurement.encode().unwrap(), vec![0x03, 0x00]);
        assert_eq!(Command::StartFanCleaning.encode().unwrap(), vec![0x56, 0x07]);
        assert_eq!(Command::ReadStatus.encode().unwrap(), vec![0x02, 0x02]);
    }

    #[test]
    fn test_encode_length_for_even_arguments() {
        let args: Vec<u8> = (0..32).collect();
        for len in (0..=args.len()).step_by(2) {
            let frame = encode(0x1234, Some(&args[..len])).unwrap();
            assert_eq!(frame.len(), 2 + 3 * (len / 2), "len {}", len);
        }
        assert_eq!(encode(0x1234, None).unwrap(), vec![0x12, 0x34]);
    }

    #[test]
    fn test_encode_rejects_odd_arguments() {
        for len in [1usize, 3, 5, 11] {
            let args = vec![0u8; len];
            assert_eq!(
                encode(0x0010, Some(args.as_slice())),
                Err(EncodeError::InvalidArgumentLength { len })
            );
        }
    }

    #[test]
    fn test_arguments_survive_decode() {
        let args = [0x03, 0x00, 0xBE, 0xEF, 0x12, 0x34];
        let frame = encode(0x0010, Some(&args[..])).unwrap();
        let pairs = decode_pairs(&frame[2..]).unwrap();
        let decoded: Vec<u8> = pairs.iter().flat_map(|p| p.bytes()).collect();
        assert_eq!(decoded, args);
    }

    #[test]
    fn test_response_lengths() {
        assert_eq!(Command::ReadMeasurement.response_len(), Some(60));
        assert_eq!(Command::ReadStatus.response_len(), Some(3));
        assert_eq!(Command::StopMeasurement.response_len(), None);
        assert_eq!(Command::start_float().response_len(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::StartFanCleaning.to_string(), "start fan cleaning (0x5607)");
    }
}
