use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::consts::{PREVIEW_TINT, PREVIEW_TINT_ALPHA};
use crate::error::Result;
use crate::io::image_io::save_rgba_png;
use crate::raster::MarkBuffer;

/// Display-resolution composite of the source with the marked region tinted.
///
/// For showing the user what will be regenerated without decoding the mask.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskPreview {
    image: RgbaImage,
}

impl MaskPreview {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        save_rgba_png(&self.image, path)
    }
}

/// Downscale `source` to the mark buffer's size and tint every marked pixel.
pub fn render_preview(source: &RgbaImage, buffer: &MarkBuffer) -> MaskPreview {
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let mut image = if source.dimensions() == (w, h) {
        source.clone()
    } else {
        imageops::resize(source, w, h, FilterType::Triangle)
    };

    for (x, y, px) in image.enumerate_pixels_mut() {
        if buffer.get(x as usize, y as usize) == Some(true) {
            *px = tint(*px);
        }
    }

    MaskPreview { image }
}

fn tint(px: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = px.0;
    let mix = |c: u8, t: u8| {
        (c as f32 * (1.0 - PREVIEW_TINT_ALPHA) + t as f32 * PREVIEW_TINT_ALPHA).round() as u8
    };
    Rgba([
        mix(r, PREVIEW_TINT[0]),
        mix(g, PREVIEW_TINT[1]),
        mix(b, PREVIEW_TINT[2]),
        a,
    ])
}
