//! WAV audio source and sink (via hound)

use std::path::{Path, PathBuf};

use soundimage_codec::{AudioSink, AudioSource, AudioStream, Error, Result};

/// Reads a WAV file as 16-bit interleaved PCM
///
/// Any PCM or float WAV is accepted; samples are converted to i16. The bit
/// depth reported to the codec is 16 for 16-bit PCM files and 8 otherwise,
/// unless overridden.
#[derive(Debug, Clone)]
pub struct WavSource {
    path: PathBuf,
    bit_depth: Option<u8>,
}

impl WavSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bit_depth: None,
        }
    }

    /// Force the bit depth used to pick the pixel layout (8 or 16)
    pub fn with_bit_depth(mut self, bit_depth: Option<u8>) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioSource for WavSource {
    fn read(&mut self) -> Result<AudioStream> {
        let mut reader = hound::WavReader::open(&self.path).map_err(Error::source_unreadable)?;
        let spec = reader.spec();
        let expected = reader.len() as usize;

        let samples: Result<Vec<i16>, hound::Error> = match (spec.sample_format, spec.bits_per_sample)
        {
            (hound::SampleFormat::Int, 16) => reader.samples::<i16>().collect(),
            (hound::SampleFormat::Int, 8) => reader
                .samples::<i8>()
                .map(|s| s.map(|s| i16::from(s) << 8))
                .collect(),
            (hound::SampleFormat::Int, bits @ (24 | 32)) => reader
                .samples::<i32>()
                .map(|s| s.map(|s| (s >> (bits - 16)) as i16))
                .collect(),
            (hound::SampleFormat::Float, _) => reader
                .samples::<f32>()
                .map(|s| s.map(|s| (s.clamp(-1.0, 1.0) * 32767.0) as i16))
                .collect(),
            (_, bits) => {
                return Err(Error::source_unreadable(format!(
                    "unsupported bit depth: {bits}"
                )));
            }
        };
        let samples = samples.map_err(Error::source_unreadable)?;

        if samples.len() != expected {
            return Err(Error::source_unreadable(format!(
                "failed to read all samples: expected {expected}, read {}",
                samples.len()
            )));
        }

        let channels = u8::try_from(spec.channels).map_err(|_| {
            Error::source_unreadable(format!("unsupported channel count: {}", spec.channels))
        })?;
        let bit_depth = self.bit_depth.unwrap_or(
            match (spec.sample_format, spec.bits_per_sample) {
                (hound::SampleFormat::Int, 16) => 16,
                _ => 8,
            },
        );

        tracing::debug!(
            "Read {:?}: {} Hz, {} channels, {}-bit source -> {}-bit, first samples: {:?}",
            self.path,
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample,
            bit_depth,
            &samples[..samples.len().min(10)]
        );

        AudioStream::new(samples, spec.sample_rate, channels, bit_depth)
    }
}

/// Writes decoded audio as a PCM WAV file at the stream's bit depth
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
}

impl WavSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioSink for WavSink {
    fn write(&mut self, audio: &AudioStream) -> Result<()> {
        let spec = hound::WavSpec {
            channels: u16::from(audio.channels()),
            sample_rate: audio.sample_rate(),
            bits_per_sample: u16::from(audio.bit_depth()),
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer =
            hound::WavWriter::create(&self.path, spec).map_err(Error::sink_unwritable)?;

        for &sample in audio.samples() {
            let written = if audio.bit_depth() == 8 {
                writer.write_sample((sample >> 8) as i8)
            } else {
                writer.write_sample(sample)
            };
            written.map_err(Error::sink_unwritable)?;
        }

        writer.finalize().map_err(Error::sink_unwritable)?;

        tracing::debug!(
            "Wrote {:?}: {} frames, {} Hz, {} channels, {}-bit",
            self.path,
            audio.frame_count(),
            audio.sample_rate(),
            audio.channels(),
            audio.bit_depth()
        );

        Ok(())
    }
}
