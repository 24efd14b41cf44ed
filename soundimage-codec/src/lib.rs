//! soundimage-codec: PCM audio <-> pixel grid codec
//!
//! Maps interleaved 16-bit PCM into a raster pixel buffer and back. The grid
//! is the wire format: any implementation that reproduces the byte layout
//! below can read grids written by this one.
//!
//! **This is a pure codec** - it never touches files. Reading and writing WAV
//! or PNG containers is done by collaborators implementing the traits in
//! [`io`] (see the `soundimage` tool crate).
//!
//! # Grid Layout
//!
//! ```text
//! Row 0 (metadata, never audio):
//!   0x00: sample_rate (u32 BE)
//!   0x04: channels (u8, 1 or 2)
//!   0x05: bit_depth (u8, 8 or 16)
//!   rest: zero
//!
//! Rows 1..H-1 (audio, one frame per pixel, row-major):
//!   8-bit mono    L8    [L]
//!   8-bit stereo  RGB8  [L, R, 128]
//!   16-bit        RGBA8 [L, L>>1, R or L>>2, 255]
//!   pixels past the last frame are zero
//! ```
//!
//! Width is always [`GRID_WIDTH`]; height is `ceil(frames / width) + 1` with
//! at least one data row.
//!
//! # Quantization
//!
//! Each stored channel keeps the top byte of the unsigned-shifted sample, so
//! decoding is lossy: `original - decoded` is always in `0..256`.
//!
//! # Usage
//!
//! ```
//! use soundimage_codec::{AudioStream, decode, encode};
//!
//! let audio = AudioStream::new(vec![0i16; 1000], 44100, 1, 16).unwrap();
//! let grid = encode(&audio);
//! assert_eq!(grid.width(), 512);
//! assert_eq!(grid.height(), 3);
//!
//! let decoded = decode(&grid).unwrap();
//! assert_eq!(decoded.sample_rate(), 44100);
//! assert_eq!(decoded.frame_count(), 1024); // padding is kept
//! ```

mod decode;
mod encode;
mod header;
pub mod io;
mod layout;
mod stream;

pub use decode::decode;
pub use encode::{encode, grid_height};
pub use header::Header;
pub use io::{AudioSink, AudioSource, ImageSink, ImageSource, decode_with, encode_with};
pub use layout::{PixelLayout, Slot};
pub use stream::{AudioStream, PixelGrid};

// =============================================================================
// Constants
// =============================================================================

/// Width of every encoded grid, in pixels
pub const GRID_WIDTH: u32 = 512;

/// Smallest width whose metadata row can hold a [`Header`]
pub const MIN_GRID_WIDTH: u32 = Header::SIZE as u32;

/// Supported audio channel counts
pub const SUPPORTED_CHANNELS: [u8; 2] = [1, 2];

/// Supported bit depths
pub const SUPPORTED_BIT_DEPTHS: [u8; 2] = [8, 16];

// =============================================================================
// Error Type
// =============================================================================

/// Boxed error raised by a collaborator (file reader/writer)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the codec and at its collaborator boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The audio or image source could not be read
    #[error("source unreadable: {0}")]
    SourceUnreadable(#[source] BoxError),

    /// The audio or image sink could not persist its data
    #[error("sink unwritable: {0}")]
    SinkUnwritable(#[source] BoxError),

    /// Grid is too narrow (or empty) to hold the metadata row
    #[error("grid width {width} too small to contain metadata (need at least 6)")]
    HeaderTooSmall { width: u32 },

    /// Channel count or bit depth outside the supported set
    #[error("invalid metadata (channels: {channels}, bit depth: {bit_depth})")]
    InvalidMetadata { channels: u8, bit_depth: u8 },

    /// Grid pixel format disagrees with the layout named by its header
    #[error("grid has {found} channels per pixel, header requires {expected}")]
    LayoutMismatch { expected: u8, found: u8 },

    /// Interleaved sample count is not a whole number of frames
    #[error("{samples} samples is not a multiple of {channels} channels")]
    MisalignedSamples { samples: usize, channels: u8 },

    /// Pixel buffer length disagrees with the grid geometry
    #[error("pixel buffer is {actual} bytes, {width}x{height}x{channels_per_pixel} needs {expected}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        channels_per_pixel: u8,
        expected: usize,
        actual: usize,
    },

    /// Channels per pixel is not 1, 3 or 4
    #[error("unsupported pixel format: {0} channels per pixel")]
    UnsupportedPixelFormat(u8),
}

impl Error {
    /// Wrap a collaborator read failure
    pub fn source_unreadable(err: impl Into<BoxError>) -> Self {
        Error::SourceUnreadable(err.into())
    }

    /// Wrap a collaborator write failure
    pub fn sink_unwritable(err: impl Into<BoxError>) -> Self {
        Error::SinkUnwritable(err.into())
    }
}

/// Result alias for codec operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

// =============================================================================
// Helper Functions
// =============================================================================

/// Quantize a 16-bit sample to an 8-bit channel value
///
/// Keeps the top byte of `sample + 32768`, i.e. `floor((sample + 32768) / 256)`.
#[inline]
pub fn sample_to_pixel(sample: i16) -> u8 {
    ((i32::from(sample) + 32768) >> 8) as u8
}

/// Expand an 8-bit channel value back to a 16-bit sample
#[inline]
pub fn pixel_to_sample(pixel: u8) -> i16 {
    (i32::from(pixel) * 256 - 32768) as i16
}

/// Check a (channels, bit depth) pair against the supported set
pub(crate) fn validate_format(channels: u8, bit_depth: u8) -> Result<()> {
    if SUPPORTED_CHANNELS.contains(&channels) && SUPPORTED_BIT_DEPTHS.contains(&bit_depth) {
        Ok(())
    } else {
        Err(Error::InvalidMetadata {
            channels,
            bit_depth,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
