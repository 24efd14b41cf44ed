//! soundimage library
//!
//! File-backed collaborators for `soundimage-codec` (WAV via `hound`, PNG via
//! `image`) and the conversion commands built on them.

pub mod audio;
pub mod convert;
pub mod paths;
pub mod raster;

pub use audio::{WavSink, WavSource};
pub use convert::{decode_file, encode_file, roundtrip};
pub use paths::unique_path;
pub use raster::{PngSink, PngSource};

// Re-export the codec so callers only need one dependency
pub use soundimage_codec as codec;
