use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{MaskError, Result};

/// Decode an image file into RGBA8.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    checked(img.to_rgba8())
}

/// Decode an in-memory encoded image (PNG, JPEG, ...) into RGBA8.
pub fn load_source_from_memory(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    checked(img.to_rgba8())
}

/// Save an RGBA8 image as PNG.
pub fn save_rgba_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn checked(img: RgbaImage) -> Result<RgbaImage> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(MaskError::InvalidDimensions { width, height });
    }
    Ok(img)
}
