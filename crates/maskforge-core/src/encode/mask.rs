use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::consts::{
    EDIT_PIXEL, MASK_CHANNEL_COUNT, MAX_MASK_PIXELS, PARALLEL_PIXEL_THRESHOLD, PRESERVE_PIXEL,
};
use crate::error::{MaskError, Result};
use crate::geometry::DisplayGeometry;
use crate::io::image_io::save_rgba_png;
use crate::raster::MarkBuffer;

/// Source-resolution mask handed to the inpainting API.
///
/// alpha = 0 marks a pixel for regeneration, alpha = 255 preserves it.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskRaster {
    image: RgbaImage,
}

impl MaskRaster {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0[3])
    }

    /// True if the pixel at `(x, y)` is to be regenerated.
    pub fn is_edit(&self, x: u32, y: u32) -> bool {
        self.alpha_at(x, y) == Some(0)
    }

    /// Number of pixels with alpha = 0.
    pub fn edit_pixel_count(&self) -> usize {
        self.image
            .as_raw()
            .chunks_exact(MASK_CHANNEL_COUNT)
            .filter(|px| px[3] == 0)
            .count()
    }

    /// Fail with [`MaskError::MaskDimensionMismatch`] unless the mask is exactly `(width, height)`.
    pub fn validate_for(&self, width: u32, height: u32) -> Result<()> {
        if self.dimensions() != (width, height) {
            return Err(MaskError::MaskDimensionMismatch {
                expected: (width, height),
                actual: self.dimensions(),
            });
        }
        Ok(())
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode as an RGBA PNG in memory.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Save as an RGBA PNG, regardless of the path's extension.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        save_rgba_png(&self.image, path)
    }
}

/// Resample the display-resolution mark buffer up to a `(source_w, source_h)` mask.
///
/// Every output pixel starts as opaque white. Its centre is mapped back into
/// display space with the geometry's inverse scale, the mark buffer is sampled
/// nearest-neighbor (clamped to its edges), and marked samples become fully
/// transparent. The output always has exactly the requested dimensions.
pub fn encode_mask(
    buffer: &MarkBuffer,
    geometry: &DisplayGeometry,
    source_w: u32,
    source_h: u32,
) -> Result<MaskRaster> {
    if source_w == 0 || source_h == 0 {
        return Err(MaskError::InvalidDimensions {
            width: source_w,
            height: source_h,
        });
    }
    let pixel_count = source_w as u64 * source_h as u64;
    if pixel_count > MAX_MASK_PIXELS {
        return Err(MaskError::MaskTooLarge {
            width: source_w,
            height: source_h,
        });
    }
    if (source_w, source_h) != (geometry.source_width, geometry.source_height) {
        warn!(
            source_w,
            source_h,
            geometry_w = geometry.source_width,
            geometry_h = geometry.source_height,
            "Encoding at dimensions that differ from the session geometry"
        );
    }

    let w = source_w as usize;
    let row_bytes = w * MASK_CHANNEL_COUNT;
    let byte_len = pixel_count as usize * MASK_CHANNEL_COUNT;
    let mut pixels: Vec<u8> = Vec::new();
    pixels
        .try_reserve_exact(byte_len)
        .map_err(|_| MaskError::MaskTooLarge {
            width: source_w,
            height: source_h,
        })?;
    pixels.extend(PRESERVE_PIXEL.iter().copied().cycle().take(byte_len));

    // Column lookup is identical for every row.
    let col_lut: Vec<i64> = (0..w)
        .map(|x| display_index(x, geometry.sx))
        .collect();
    let sy = geometry.sy;

    let fill_row = |(y, row): (usize, &mut [u8])| {
        let dy = display_index(y, sy);
        for (px, &dx) in row.chunks_exact_mut(MASK_CHANNEL_COUNT).zip(&col_lut) {
            if buffer.sample_clamped(dx, dy) {
                px.copy_from_slice(&EDIT_PIXEL);
            }
        }
    };

    if pixel_count as usize >= PARALLEL_PIXEL_THRESHOLD {
        pixels.par_chunks_mut(row_bytes).enumerate().for_each(fill_row);
    } else {
        pixels.chunks_mut(row_bytes).enumerate().for_each(fill_row);
    }

    let image = RgbaImage::from_raw(source_w, source_h, pixels).ok_or(
        MaskError::InvalidDimensions {
            width: source_w,
            height: source_h,
        },
    )?;
    let mask = MaskRaster { image };

    debug!(
        width = source_w,
        height = source_h,
        edit_pixels = mask.edit_pixel_count(),
        "Mask encoded"
    );
    Ok(mask)
}

/// Display-space index of the output pixel whose centre is at `i + 0.5`.
fn display_index(i: usize, scale: f32) -> i64 {
    ((i as f32 + 0.5) / scale).floor() as i64
}
