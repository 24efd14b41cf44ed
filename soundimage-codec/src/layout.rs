//! Pixel channel layouts
//!
//! The single table both the encoder and the decoder walk. Each layout lists
//! the pixel's channel slots in byte order; a slot either carries a sample
//! (decodable), a shifted copy of one (filler), or a constant (filler).

use crate::{Error, Result, validate_format};

/// Pixel format of a grid, derived from (bit depth, channels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 8-bit mono, 1 byte per pixel
    Gray,
    /// 8-bit stereo, 3 bytes per pixel
    Rgb,
    /// 16-bit mono or stereo, 4 bytes per pixel
    Rgba,
}

/// What a single channel byte of a pixel holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Quantized sample of the given audio channel (0 = left, 1 = right)
    Sample(usize),
    /// Quantized `sample >> shift` of the given audio channel, not decoded
    Shifted { channel: usize, shift: u32 },
    /// Fixed byte value, not decoded
    Fill(u8),
}

const GRAY_MONO: &[Slot] = &[Slot::Sample(0)];

const RGB_STEREO: &[Slot] = &[Slot::Sample(0), Slot::Sample(1), Slot::Fill(128)];

const RGBA_MONO: &[Slot] = &[
    Slot::Sample(0),
    Slot::Shifted {
        channel: 0,
        shift: 1,
    },
    Slot::Shifted {
        channel: 0,
        shift: 2,
    },
    Slot::Fill(255),
];

const RGBA_STEREO: &[Slot] = &[
    Slot::Sample(0),
    Slot::Shifted {
        channel: 0,
        shift: 1,
    },
    Slot::Sample(1),
    Slot::Fill(255),
];

impl PixelLayout {
    /// Pick the layout for an audio format
    ///
    /// | bit depth | channels | layout |
    /// |-----------|----------|--------|
    /// | 8         | 1        | Gray   |
    /// | 8         | 2        | Rgb    |
    /// | 16        | 1 or 2   | Rgba   |
    pub fn for_format(bit_depth: u8, channels: u8) -> Result<Self> {
        validate_format(channels, bit_depth)?;
        Ok(Self::select(bit_depth, channels))
    }

    /// Table lookup for a format that has already been validated
    pub(crate) fn select(bit_depth: u8, channels: u8) -> Self {
        match (bit_depth, channels) {
            (8, 1) => PixelLayout::Gray,
            (8, _) => PixelLayout::Rgb,
            _ => PixelLayout::Rgba,
        }
    }

    /// Layout with the given number of bytes per pixel
    pub fn from_channels_per_pixel(channels_per_pixel: u8) -> Result<Self> {
        match channels_per_pixel {
            1 => Ok(PixelLayout::Gray),
            3 => Ok(PixelLayout::Rgb),
            4 => Ok(PixelLayout::Rgba),
            other => Err(Error::UnsupportedPixelFormat(other)),
        }
    }

    /// Bytes per pixel
    pub fn channels_per_pixel(self) -> u8 {
        match self {
            PixelLayout::Gray => 1,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Channel slots in byte order for a given audio channel count
    ///
    /// `channels` must be a count this layout was chosen for (see
    /// [`PixelLayout::for_format`]).
    pub fn slots(self, channels: u8) -> &'static [Slot] {
        match (self, channels) {
            (PixelLayout::Gray, _) => GRAY_MONO,
            (PixelLayout::Rgb, _) => RGB_STEREO,
            (PixelLayout::Rgba, 1) => RGBA_MONO,
            (PixelLayout::Rgba, _) => RGBA_STEREO,
        }
    }
}
