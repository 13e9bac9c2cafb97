//! Image loading for embedding in the report
//!
//! Images are decoded up front so a corrupt chart or logo is reported as an
//! error instead of failing deep inside document packing. Every image is
//! re-encoded as PNG.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// EMU (English Metric Units) per centimetre, as used by OOXML drawings
pub const EMU_PER_CM: u32 = 360_000;

/// EMU per inch
pub const EMU_PER_INCH: u32 = 914_400;

/// Decoded image ready to be placed in a document
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    /// PNG bytes
    pub png: Vec<u8>,
    /// Width in pixels
    pub width_px: u32,
    /// Height in pixels
    pub height_px: u32,
}

impl EmbeddedImage {
    /// Load and normalise an image file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read image: {}", path.display()))?;
        Self::from_bytes(&data).with_context(|| format!("Failed to decode image: {}", path.display()))
    }

    /// Decode image bytes of any supported format
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).context("Unsupported or corrupt image data")?;
        let (width_px, height_px) = img.dimensions();

        Ok(Self {
            png: encode_png(&img)?,
            width_px,
            height_px,
        })
    }

    /// Display size in EMU for a given width, keeping the aspect ratio
    pub fn size_for_width(&self, width_emu: u32) -> (u32, u32) {
        if self.width_px == 0 {
            return (width_emu, 0);
        }
        let height = width_emu as u64 * self.height_px as u64 / self.width_px as u64;
        (width_emu, height as u32)
    }
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_load_and_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        RgbImage::from_pixel(200, 50, Rgb([10, 20, 30])).save(&path).unwrap();

        let image = EmbeddedImage::load(&path).unwrap();
        assert_eq!((image.width_px, image.height_px), (200, 50));
        assert!(!image.png.is_empty());

        let (w, h) = image.size_for_width(4 * EMU_PER_CM);
        assert_eq!(w, 1_440_000);
        assert_eq!(h, 360_000);
    }

    #[test]
    fn test_corrupt_image_is_an_error() {
        assert!(EmbeddedImage::from_bytes(b"not an image").is_err());
    }

    #[test]
    fn test_missing_image_is_an_error() {
        assert!(EmbeddedImage::load(Path::new("/nonexistent/logo.png")).is_err());
    }
}
