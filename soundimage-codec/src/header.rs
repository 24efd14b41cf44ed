//! Metadata record stored at the start of row 0
//!
//! # Layout
//! ```text
//! 0x00: sample_rate u32 (big-endian)
//! 0x04: channels u8
//! 0x05: bit_depth u8
//! ```

use crate::{Result, validate_format};

/// Grid header (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub sample_rate: u32,
    pub channels: u8,
    pub bit_depth: u8,
}

impl Header {
    pub const SIZE: usize = 6;

    pub fn new(sample_rate: u32, channels: u8, bit_depth: u8) -> Self {
        Self {
            sample_rate,
            channels,
            bit_depth,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let rate = self.sample_rate.to_be_bytes();
        [
            rate[0],
            rate[1],
            rate[2],
            rate[3],
            self.channels,
            self.bit_depth,
        ]
    }

    /// Read header from bytes
    ///
    /// Returns `None` if fewer than [`Header::SIZE`] bytes are available. The
    /// fields are not range-checked; see [`Header::validate`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            sample_rate: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            channels: bytes[4],
            bit_depth: bytes[5],
        })
    }

    /// Reject channel counts and bit depths the codec cannot lay out
    pub fn validate(&self) -> Result<()> {
        validate_format(self.channels, self.bit_depth)
    }
}
