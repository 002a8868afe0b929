// src/common/crc.rs

use crc::{Algorithm, Crc};

/// CRC-8 used by Sensirion sensors on every transmitted half-word.
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789")
pub const SPS30_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SPS30_CRC);

/// Computes the checksum byte that follows a half-word on the wire.
#[inline]
pub fn checksum(bytes: [u8; 2]) -> u8 {
    CRC_COMPUTER.checksum(&bytes)
}

/// Returns `true` when `expected` is the checksum of `bytes`.
#[inline]
pub fn validate(bytes: [u8; 2], expected: u8) -> bool {
    checksum(bytes) == expected
}
