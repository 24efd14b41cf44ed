//! Grid decoder
//!
//! Reads the header from row 0 and walks rows 1..height in the same slot
//! order the encoder wrote, keeping only the sample-carrying bytes.

use crate::{
    AudioStream, Error, Header, MIN_GRID_WIDTH, PixelGrid, PixelLayout, Result, Slot,
    pixel_to_sample,
};

/// Append the samples carried by one pixel, skipping filler slots
fn unpack_pixel(slots: &[Slot], pixel: &[u8], output: &mut Vec<i16>) {
    for (&byte, slot) in pixel.iter().zip(slots) {
        if let Slot::Sample(_) = slot {
            output.push(pixel_to_sample(byte));
        }
    }
}

/// Decode a pixel grid back to audio
///
/// Every pixel of rows 1..height yields one frame, including the zero
/// padding after the last encoded frame; there is no stored length to trim
/// it with.
///
/// # Errors
/// - [`Error::HeaderTooSmall`] if the grid is narrower than 6 pixels or empty
/// - [`Error::InvalidMetadata`] if the header names an unsupported format
/// - [`Error::LayoutMismatch`] if the grid's pixel format disagrees with the header
pub fn decode(grid: &PixelGrid) -> Result<AudioStream> {
    if grid.width() < MIN_GRID_WIDTH || grid.height() == 0 {
        return Err(Error::HeaderTooSmall {
            width: grid.width(),
        });
    }

    let header = Header::from_bytes(grid.metadata_row()).ok_or(Error::HeaderTooSmall {
        width: grid.width(),
    })?;
    header.validate()?;

    tracing::debug!(
        "Grid metadata: {} Hz, {} channels, {}-bit",
        header.sample_rate,
        header.channels,
        header.bit_depth
    );

    let layout = PixelLayout::for_format(header.bit_depth, header.channels)?;
    if layout != grid.layout() {
        return Err(Error::LayoutMismatch {
            expected: layout.channels_per_pixel(),
            found: grid.channels_per_pixel(),
        });
    }
    let slots = layout.slots(header.channels);
    let cpp = layout.channels_per_pixel() as usize;

    // Bounded by both the geometry and the bytes actually present
    let expected_pixels = (grid.height() as usize - 1) * grid.width() as usize;
    let data = grid.data_rows();
    let pixel_count = expected_pixels.min(data.len() / cpp);

    let mut samples = Vec::with_capacity(pixel_count * header.channels as usize);
    for pixel in data.chunks_exact(cpp).take(pixel_count) {
        unpack_pixel(slots, pixel, &mut samples);
    }

    tracing::debug!(
        "Decoded {} samples, first: {:?}",
        samples.len(),
        &samples[..samples.len().min(10)]
    );

    AudioStream::new(
        samples,
        header.sample_rate,
        header.channels,
        header.bit_depth,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode, sample_to_pixel};

    /// Build a grid with the given header bytes and data row contents
    fn grid_with(width: u32, height: u32, cpp: u8, header: [u8; 6], data: &[u8]) -> PixelGrid {
        let mut pixels = vec![0u8; width as usize * height as usize * cpp as usize];
        pixels[..6].copy_from_slice(&header);
        let stride = width as usize * cpp as usize;
        pixels[stride..stride + data.len()].copy_from_slice(data);
        PixelGrid::from_raw(pixels, width, height, cpp).unwrap()
    }

    #[test]
    fn test_decode_width_too_small() {
        let grid = PixelGrid::from_raw(vec![0; 5 * 4 * 4], 5, 4, 4).unwrap();
        assert!(matches!(
            decode(&grid),
            Err(Error::HeaderTooSmall { width: 5 })
        ));
    }

    #[test]
    fn test_decode_empty_grid() {
        let grid = PixelGrid::from_raw(vec![], 512, 0, 1).unwrap();
        assert!(matches!(decode(&grid), Err(Error::HeaderTooSmall { .. })));
    }

    #[test]
    fn test_decode_invalid_channels() {
        let grid = grid_with(8, 2, 4, [0, 0, 0x1F, 0x40, 3, 16], &[]);
        assert!(matches!(
            decode(&grid),
            Err(Error::InvalidMetadata {
                channels: 3,
                bit_depth: 16
            })
        ));
    }

    #[test]
    fn test_decode_invalid_bit_depth() {
        let grid = grid_with(8, 2, 1, [0, 0, 0x1F, 0x40, 1, 24], &[]);
        assert!(matches!(
            decode(&grid),
            Err(Error::InvalidMetadata { bit_depth: 24, .. })
        ));
    }

    #[test]
    fn test_decode_layout_mismatch() {
        // Header says 8-bit stereo (RGB) but the grid is RGBA
        let grid = grid_with(8, 2, 4, [0, 0, 0x1F, 0x40, 2, 8], &[]);
        assert!(matches!(
            decode(&grid),
            Err(Error::LayoutMismatch {
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_decode_rgb_skips_blue() {
        // 8000 Hz, stereo, 8-bit; one pixel (L=131, R=120, B=200)
        let grid = grid_with(6, 2, 3, [0, 0, 0x1F, 0x40, 2, 8], &[131, 120, 200]);
        let audio = decode(&grid).unwrap();

        assert_eq!(audio.sample_rate(), 8000);
        assert_eq!(audio.frame_count(), 6);
        assert_eq!(&audio.samples()[..2], &[pixel_to_sample(131), pixel_to_sample(120)]);
    }

    #[test]
    fn test_decode_gray_mono_values() {
        // 8000 Hz, mono, 8-bit; one sample per gray byte
        let grid = grid_with(6, 2, 1, [0, 0, 0x1F, 0x40, 1, 8], &[0, 128, 255, 131]);
        let audio = decode(&grid).unwrap();

        assert_eq!(audio.channels(), 1);
        assert_eq!(audio.bit_depth(), 8);
        assert_eq!(audio.frame_count(), 6);
        assert_eq!(audio.samples(), &[-32768, 0, 32512, 768, -32768, -32768]);
    }

    #[test]
    fn test_decode_rgba_mono_reads_red_only() {
        let grid = grid_with(6, 2, 4, [0, 0, 0x1F, 0x40, 1, 16], &[200, 10, 20, 30]);
        let audio = decode(&grid).unwrap();

        assert_eq!(audio.channels(), 1);
        assert_eq!(audio.samples()[0], 18432);
        assert_eq!(audio.frame_count(), 6);
    }

    #[test]
    fn test_decode_rgba_stereo_reads_red_and_blue() {
        let grid = grid_with(6, 2, 4, [0, 0, 0x1F, 0x40, 2, 16], &[200, 10, 20, 30]);
        let audio = decode(&grid).unwrap();

        assert_eq!(&audio.samples()[..2], &[18432, -27648]);
    }

    #[test]
    fn test_decode_keeps_padding() {
        let audio = AudioStream::new(vec![], 8000, 1, 8).unwrap();
        let decoded = decode(&encode(&audio)).unwrap();

        // One data row of zero bytes
        assert_eq!(decoded.frame_count(), 512);
        assert!(decoded.samples().iter().all(|&s| s == pixel_to_sample(0)));
    }

    #[test]
    fn test_decode_stereo_8_known_pair() {
        let audio = AudioStream::new(vec![1000, -2000], 44100, 2, 8).unwrap();
        let decoded = decode(&encode(&audio)).unwrap();

        assert_eq!(decoded.frame_count(), 512);
        assert_eq!(decoded.samples()[0], pixel_to_sample(sample_to_pixel(1000)));
        assert_eq!(decoded.samples()[1], pixel_to_sample(sample_to_pixel(-2000)));
        assert_eq!(&decoded.samples()[..2], &[768, -2048]);
    }
}
