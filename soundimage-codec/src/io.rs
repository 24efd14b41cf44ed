//! Collaborator interfaces
//!
//! The codec never opens files itself. Container readers and writers (WAV,
//! PNG, ...) implement these traits and report their failures as
//! [`crate::Error::SourceUnreadable`] / [`crate::Error::SinkUnwritable`].

use crate::{AudioStream, PixelGrid, Result, decode, encode};

/// Produces the audio to encode
pub trait AudioSource {
    fn read(&mut self) -> Result<AudioStream>;
}

/// Persists decoded audio
pub trait AudioSink {
    fn write(&mut self, audio: &AudioStream) -> Result<()>;
}

/// Produces the pixel grid to decode
pub trait ImageSource {
    fn read(&mut self) -> Result<PixelGrid>;
}

/// Persists an encoded pixel grid
pub trait ImageSink {
    fn write(&mut self, grid: &PixelGrid) -> Result<()>;
}

/// Read audio from `source`, encode it and hand the grid to `sink`
///
/// Returns the grid that was written.
pub fn encode_with<S, K>(source: &mut S, sink: &mut K) -> Result<PixelGrid>
where
    S: AudioSource + ?Sized,
    K: ImageSink + ?Sized,
{
    let audio = source.read()?;
    let grid = encode(&audio);
    sink.write(&grid)?;
    Ok(grid)
}

/// Read a grid from `source`, decode it and hand the audio to `sink`
///
/// Returns the audio that was written.
pub fn decode_with<S, K>(source: &mut S, sink: &mut K) -> Result<AudioStream>
where
    S: ImageSource + ?Sized,
    K: AudioSink + ?Sized,
{
    let grid = source.read()?;
    let audio = decode(&grid)?;
    sink.write(&audio)?;
    Ok(audio)
}

// In-memory collaborators, handy for tests and for callers that already hold
// their data.

impl AudioSource for AudioStream {
    fn read(&mut self) -> Result<AudioStream> {
        Ok(self.clone())
    }
}

impl ImageSource for PixelGrid {
    fn read(&mut self) -> Result<PixelGrid> {
        Ok(self.clone())
    }
}

impl AudioSink for Option<AudioStream> {
    fn write(&mut self, audio: &AudioStream) -> Result<()> {
        *self = Some(audio.clone());
        Ok(())
    }
}

impl ImageSink for Option<PixelGrid> {
    fn write(&mut self, grid: &PixelGrid) -> Result<()> {
        *self = Some(grid.clone());
        Ok(())
    }
}
