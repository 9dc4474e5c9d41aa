use serde::{Deserialize, Serialize};

use crate::error::{MaskError, Result};

/// A 2D position. Which space (display or source) it lives in is up to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Fit `(source_w, source_h)` inside `(max_w, max_h)` preserving aspect ratio.
///
/// Never upscales: a source that already fits is returned unchanged.
/// Each axis is rounded to the nearest integer and kept >= 1.
pub fn fit(source_w: u32, source_h: u32, max_w: u32, max_h: u32) -> Result<(u32, u32)> {
    if source_w == 0 || source_h == 0 {
        return Err(MaskError::InvalidDimensions {
            width: source_w,
            height: source_h,
        });
    }
    if max_w == 0 || max_h == 0 {
        return Err(MaskError::InvalidDimensions {
            width: max_w,
            height: max_h,
        });
    }

    if source_w <= max_w && source_h <= max_h {
        return Ok((source_w, source_h));
    }

    let scale = (max_w as f64 / source_w as f64).min(max_h as f64 / source_h as f64);
    let dw = ((source_w as f64 * scale).round() as u32).clamp(1, max_w);
    let dh = ((source_h as f64 * scale).round() as u32).clamp(1, max_h);
    Ok((dw, dh))
}

/// Relationship between the on-screen drawing surface and the source image.
///
/// Computed once per session from the source dimensions and the viewport bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayGeometry {
    pub source_width: u32,
    pub source_height: u32,
    pub display_width: u32,
    pub display_height: u32,
    /// Source pixels per display unit, horizontally (`W / dw`).
    pub sx: f32,
    /// Source pixels per display unit, vertically (`H / dh`).
    pub sy: f32,
}

impl DisplayGeometry {
    pub fn new(source_w: u32, source_h: u32, max_w: u32, max_h: u32) -> Result<Self> {
        let (dw, dh) = fit(source_w, source_h, max_w, max_h)?;
        Ok(Self {
            source_width: source_w,
            source_height: source_h,
            display_width: dw,
            display_height: dh,
            sx: source_w as f32 / dw as f32,
            sy: source_h as f32 / dh as f32,
        })
    }

    pub fn to_source(&self, p: Point) -> Point {
        Point::new(p.x * self.sx, p.y * self.sy)
    }

    pub fn to_display(&self, p: Point) -> Point {
        Point::new(p.x / self.sx, p.y / self.sy)
    }

    pub fn contains_display(&self, p: Point) -> bool {
        p.x >= 0.0
            && p.y >= 0.0
            && p.x < self.display_width as f32
            && p.y < self.display_height as f32
    }

    /// True when the display surface is a downscaled view of the source.
    pub fn is_downscaled(&self) -> bool {
        self.display_width != self.source_width || self.display_height != self.source_height
    }
}
