//! Grid encoder
//!
//! Packs an [`AudioStream`] into a [`PixelGrid`]: header in row 0, one frame
//! per pixel from row 1 on, zero padding after the last frame.

use crate::{AudioStream, GRID_WIDTH, Header, PixelGrid, Slot, sample_to_pixel};

/// Grid height needed for `frame_count` frames at `width` pixels per row
///
/// One metadata row plus enough data rows for every frame, never fewer than
/// one data row.
pub fn grid_height(frame_count: usize, width: u32) -> u32 {
    let data_rows = frame_count.div_ceil(width as usize).max(1);
    data_rows as u32 + 1
}

/// Encode a single frame into one pixel following the layout's slot order
fn pack_pixel(slots: &[Slot], frame: &[i16], pixel: &mut [u8]) {
    for (byte, slot) in pixel.iter_mut().zip(slots) {
        *byte = match *slot {
            Slot::Sample(channel) => sample_to_pixel(frame[channel]),
            Slot::Shifted { channel, shift } => sample_to_pixel(frame[channel] >> shift),
            Slot::Fill(value) => value,
        };
    }
}

/// Encode audio into a pixel grid
///
/// Cannot fail: [`AudioStream`] already guarantees a supported format and a
/// whole number of frames.
pub fn encode(audio: &AudioStream) -> PixelGrid {
    let header = Header::new(audio.sample_rate(), audio.channels(), audio.bit_depth());
    let layout = audio.layout();
    let slots = layout.slots(header.channels);
    let cpp = layout.channels_per_pixel() as usize;

    let height = grid_height(audio.frame_count(), GRID_WIDTH);
    let mut grid = PixelGrid::zeroed(GRID_WIDTH, height, layout);

    tracing::debug!(
        "Grid dimensions: {}x{} with {} channels per pixel",
        GRID_WIDTH,
        height,
        cpp
    );

    let stride = grid.stride();
    let pixels = grid.pixels_mut();

    // Embed metadata in row 0
    pixels[..Header::SIZE].copy_from_slice(&header.to_bytes());

    // Start after the metadata row; capacity is guaranteed by grid_height
    let data = &mut pixels[stride..];
    for (frame, pixel) in audio.frames().zip(data.chunks_exact_mut(cpp)) {
        pack_pixel(slots, frame, pixel);
    }

    tracing::debug!(
        "Encoded {} frames, first pixels after metadata: {:?}",
        audio.frame_count(),
        &pixels[stride..stride + (10 * cpp).min(pixels.len() - stride)]
    );

    grid
}
