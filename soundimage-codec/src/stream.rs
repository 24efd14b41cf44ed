//! In-memory audio streams and pixel grids

use crate::{Error, PixelLayout, Result, validate_format};

/// Interleaved 16-bit PCM with its format parameters
///
/// Always holds a supported channel count and bit depth, and a whole number
/// of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioStream {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u8,
    bit_depth: u8,
}

impl AudioStream {
    /// Build a stream, checking channel count, bit depth and frame alignment
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u8, bit_depth: u8) -> Result<Self> {
        validate_format(channels, bit_depth)?;
        if samples.len() % channels as usize != 0 {
            return Err(Error::MisalignedSamples {
                samples: samples.len(),
                channels,
            });
        }
        Ok(Self {
            samples,
            sample_rate,
            channels,
            bit_depth,
        })
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// Number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Pixel layout this stream encodes to
    pub fn layout(&self) -> PixelLayout {
        PixelLayout::select(self.bit_depth, self.channels)
    }

    /// Iterate frames as `channels`-sized slices
    pub fn frames(&self) -> std::slice::ChunksExact<'_, i16> {
        self.samples.chunks_exact(self.channels as usize)
    }
}

/// Row-major raster buffer
///
/// The buffer always holds exactly `width * height * channels_per_pixel`
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl PixelGrid {
    /// Zero-filled grid
    pub fn zeroed(width: u32, height: u32, layout: PixelLayout) -> Self {
        let len = width as usize * height as usize * layout.channels_per_pixel() as usize;
        Self {
            pixels: vec![0; len],
            width,
            height,
            layout,
        }
    }

    /// Wrap a raw buffer as read from an image file
    pub fn from_raw(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        channels_per_pixel: u8,
    ) -> Result<Self> {
        let layout = PixelLayout::from_channels_per_pixel(channels_per_pixel)?;
        let expected = width as usize * height as usize * channels_per_pixel as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                channels_per_pixel,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            layout,
        })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn channels_per_pixel(&self) -> u8 {
        self.layout.channels_per_pixel()
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels_per_pixel() as usize
    }

    /// Row 0, where the header lives
    pub fn metadata_row(&self) -> &[u8] {
        &self.pixels[..self.stride().min(self.pixels.len())]
    }

    /// Rows 1..height, where the audio lives
    pub fn data_rows(&self) -> &[u8] {
        &self.pixels[self.stride().min(self.pixels.len())..]
    }
}
