//! Decoder/encoder boundary.
//!
//! The core only knows the [`Decoder`] and [`Encoder`] traits. [`ImageCodec`]
//! implements both on top of the `image` crate for PNG and JPEG.
//!
//! - `read_file`: read and decode an image file into a `PixelBuffer`.
//! - `write_file`: encode a `PixelBuffer` and write it, creating parent dirs.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::raster::PixelBuffer;

/// Bytes in some container format -> RGB buffer
pub trait Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer>;
}

/// RGB buffer -> bytes in some container format
pub trait Encoder {
    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>>;

    /// File extension (without the dot) matching the encoded format
    fn extension(&self) -> &str;
}

/// Container formats the bundled codec can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless; round-trips channel values exactly
    #[default]
    Png,
    /// Lossy
    Jpeg,
}

impl OutputFormat {
    /// Guess from a path extension (`png`, `jpg`, `jpeg`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Format for `path`, falling back to PNG for unknown extensions
    pub fn for_path_or_png(path: &Path) -> Self {
        Self::from_path(path).unwrap_or_else(|| {
            warn!(
                "unrecognised output extension on {}, writing PNG",
                path.display()
            );
            Self::Png
        })
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// `image`-crate backed decoder/encoder. Decoding accepts any enabled format and
/// converts to 8-bit RGB; encoding writes `format`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec {
    format: OutputFormat,
}

impl ImageCodec {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Decoder for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| RasterError::Decode(e.to_string()))?
            .into_rgb8();
        let (w, h) = img.dimensions();
        debug!("decoded {}x{} image ({} bytes)", w, h, bytes.len());
        PixelBuffer::from_raw(w, h, img.as_raw())
    }
}

impl Encoder for ImageCodec {
    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        let (w, h) = buffer.dimensions();
        let img = RgbImage::from_raw(w, h, buffer.to_rgb_bytes())
            .ok_or_else(|| RasterError::Encode(format!("buffer does not fit {}x{}", w, h)))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, self.format.image_format())
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }

    fn extension(&self) -> &str {
        self.format.extension()
    }
}

/// Read and decode an image file
pub fn read_file(path: &Path, decoder: &dyn Decoder) -> Result<PixelBuffer> {
    let bytes = fs::read(path)
        .map_err(|e| RasterError::Decode(format!("failed to read {}: {e}", path.display())))?;
    decoder.decode(&bytes)
}

/// Encode a buffer and write it to disk, creating parent directories
pub fn write_file(path: &Path, buffer: &PixelBuffer, encoder: &dyn Encoder) -> Result<()> {
    let bytes = encoder.encode(buffer)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                RasterError::Encode(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    fs::write(path, &bytes)
        .map_err(|e| RasterError::Encode(format!("failed to write {}: {e}", path.display())))?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let src = PixelBuffer::from_fn(5, 3, |x, y| Color::new(x as u8 * 50, y as u8 * 80, 17))
            .unwrap();
        let codec = ImageCodec::new(OutputFormat::Png);
        let bytes = codec.encode(&src).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(codec.decode(&bytes).unwrap(), src);
    }

    #[test]
    fn test_jpeg_keeps_dimensions() {
        let src = PixelBuffer::blank(16, 8, Color::new(120, 60, 30)).unwrap();
        let codec = ImageCodec::new(OutputFormat::Jpeg);
        let bytes = codec.encode(&src).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(codec.decode(&bytes).unwrap().dimensions(), (16, 8));
        assert_eq!(codec.extension(), "jpg");
    }

    #[test]
    fn test_decode_garbage_fails() {
        let codec = ImageCodec::default();
        assert!(matches!(
            codec.decode(b"definitely not an image"),
            Err(RasterError::Decode(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/collage.JPG")),
            Some(OutputFormat::Jpeg)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("a.png")),
            Some(OutputFormat::Png)
        );
        assert_eq!(OutputFormat::from_path(Path::new("a.bmp")), None);
        assert_eq!(
            OutputFormat::for_path_or_png(Path::new("noext")),
            OutputFormat::Png
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/nonexistent/input.png"), &ImageCodec::default());
        assert!(matches!(err, Err(RasterError::Decode(_))));
    }
}
