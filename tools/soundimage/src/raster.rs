//! PNG image source and sink (via image)

use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use soundimage_codec::{Error, ImageSink, ImageSource, PixelGrid, PixelLayout, Result};

/// Writes a pixel grid as an 8-bit gray, RGB or RGBA PNG
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for PngSink {
    fn write(&mut self, grid: &PixelGrid) -> Result<()> {
        let color = match grid.layout() {
            PixelLayout::Gray => ColorType::L8,
            PixelLayout::Rgb => ColorType::Rgb8,
            PixelLayout::Rgba => ColorType::Rgba8,
        };

        image::save_buffer_with_format(
            &self.path,
            grid.pixels(),
            grid.width(),
            grid.height(),
            color,
            ImageFormat::Png,
        )
        .map_err(Error::sink_unwritable)?;

        tracing::debug!(
            "Wrote {:?}: {}x{}, {} channels per pixel",
            self.path,
            grid.width(),
            grid.height(),
            grid.channels_per_pixel()
        );

        Ok(())
    }
}

/// Reads an image file as a raw pixel grid
///
/// Gray, RGB and RGBA 8-bit images keep their native channel count; other
/// color types are converted to the closest of the three.
#[derive(Debug, Clone)]
pub struct PngSource {
    path: PathBuf,
}

impl PngSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flatten an image to (channels per pixel, raw bytes)
fn into_raw_pixels(img: DynamicImage) -> (u8, Vec<u8>) {
    match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => match other.color().channel_count() {
            1 => (1, other.to_luma8().into_raw()),
            3 => (3, other.to_rgb8().into_raw()),
            _ => (4, other.to_rgba8().into_raw()),
        },
    }
}

impl ImageSource for PngSource {
    fn read(&mut self) -> Result<PixelGrid> {
        let img = image::open(&self.path).map_err(Error::source_unreadable)?;
        let (width, height) = img.dimensions();
        let (channels_per_pixel, pixels) = into_raw_pixels(img);

        tracing::debug!(
            "Read {:?}: {}x{}, {} channels per pixel",
            self.path,
            width,
            height,
            channels_per_pixel
        );

        PixelGrid::from_raw(pixels, width, height, channels_per_pixel)
    }
}
