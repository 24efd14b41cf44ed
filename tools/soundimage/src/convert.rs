//! File conversions (WAV -> PNG, PNG -> WAV, and both in a row)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use soundimage_codec::{AudioStream, PixelGrid, decode_with, encode_with};

use crate::audio::{WavSink, WavSource};
use crate::paths::unique_path;
use crate::raster::{PngSink, PngSource};

/// Default image path for an audio input: `<stem>.png`, made unique
pub fn default_image_path(input: &Path) -> PathBuf {
    unique_path(&input.with_extension("png"))
}

/// Default audio path for an image input: `<stem>_decoded.wav`, made unique
pub fn default_audio_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    unique_path(&input.with_file_name(format!("{stem}_decoded.wav")))
}

/// Encode a WAV file to a PNG image
///
/// `bit_depth` overrides the depth detected from the WAV (8 or 16).
pub fn encode_file(input: &Path, output: &Path, bit_depth: Option<u8>) -> Result<PixelGrid> {
    let mut source = WavSource::new(input).with_bit_depth(bit_depth);
    let mut sink = PngSink::new(output);

    let grid = encode_with(&mut source, &mut sink)
        .with_context(|| format!("Failed to encode {:?} to {:?}", input, output))?;

    tracing::info!(
        "Encoded {:?} -> {:?} ({}x{}, {} channels per pixel)",
        input,
        output,
        grid.width(),
        grid.height(),
        grid.channels_per_pixel()
    );

    Ok(grid)
}

/// Decode a PNG image back to a WAV file
pub fn decode_file(input: &Path, output: &Path) -> Result<AudioStream> {
    let mut source = PngSource::new(input);
    let mut sink = WavSink::new(output);

    let audio = decode_with(&mut source, &mut sink)
        .with_context(|| format!("Failed to decode {:?} to {:?}", input, output))?;

    tracing::info!(
        "Decoded {:?} -> {:?} ({} Hz, {} channels, {}-bit, {} frames)",
        input,
        output,
        audio.sample_rate(),
        audio.channels(),
        audio.bit_depth(),
        audio.frame_count()
    );

    Ok(audio)
}

/// Files produced by [`roundtrip`]
#[derive(Debug, Clone)]
pub struct RoundtripOutputs {
    pub image: PathBuf,
    pub audio: PathBuf,
}

/// Encode a WAV file, then decode the resulting image
///
/// Outputs go next to the input (or into `dir`) under unique names.
pub fn roundtrip(
    input: &Path,
    dir: Option<&Path>,
    bit_depth: Option<u8>,
) -> Result<RoundtripOutputs> {
    let base = match dir {
        Some(dir) => {
            let name = input
                .file_name()
                .with_context(|| format!("Input has no file name: {:?}", input))?;
            dir.join(name)
        }
        None => input.to_path_buf(),
    };

    let image = default_image_path(&base);
    encode_file(input, &image, bit_depth)?;

    let audio = default_audio_path(&base);
    decode_file(&image, &audio)?;

    Ok(RoundtripOutputs { image, audio })
}
