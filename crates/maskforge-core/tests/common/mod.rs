use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use maskforge_core::config::{BrushConfig, SessionOptions, ViewportConfig};
use maskforge_core::geometry::{DisplayGeometry, Point};
use maskforge_core::stroke::Tool;
use maskforge_core::surface::SurfaceController;

/// Build an RGBA image with a simple horizontal/vertical gradient.
pub fn make_source(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ])
    })
}

/// Build a uniformly coloured RGBA image.
pub fn make_flat_source(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Save a gradient PNG into a temp dir. Keep the `TempDir` alive while using the path.
pub fn write_test_png(width: u32, height: u32) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("source.png");
    make_source(width, height).save(&path).expect("write PNG");
    (dir, path)
}

pub fn options_with_viewport(max_width: u32, max_height: u32) -> SessionOptions {
    SessionOptions {
        viewport: ViewportConfig {
            max_width,
            max_height,
        },
        ..SessionOptions::default()
    }
}

/// Controller over a `(w, h)` source shown at most `(max_w, max_h)`.
pub fn make_controller(w: u32, h: u32, max_w: u32, max_h: u32) -> SurfaceController {
    let geometry = DisplayGeometry::new(w, h, max_w, max_h).expect("valid geometry");
    SurfaceController::new(geometry, BrushConfig::default())
}

/// Draw one complete stroke through `points` with the given tool and radius.
pub fn draw_stroke(controller: &mut SurfaceController, tool: Tool, radius: f32, points: &[Point]) {
    controller.set_tool(tool);
    controller.set_radius(radius);
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    controller.start(first);
    for &p in rest {
        controller.move_to(p);
    }
    controller.release();
}
