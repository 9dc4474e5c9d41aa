/// Minimum output pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default viewport bound (logical units) on each axis of the drawing surface.
pub const DEFAULT_VIEWPORT_MAX: u32 = 512;

/// Smallest brush radius accepted by the drawing surface, in display units.
pub const MIN_BRUSH_RADIUS: f32 = 5.0;

/// Largest brush radius accepted by the drawing surface, in display units.
pub const MAX_BRUSH_RADIUS: f32 = 100.0;

/// Brush radius used when none has been chosen (or a NaN was supplied).
pub const DEFAULT_BRUSH_RADIUS: f32 = 20.0;

/// Distance between interpolated stamps as a fraction of the brush radius.
/// 0.25 keeps consecutive discs overlapping by three quarters of their radius.
pub const STAMP_SPACING_FRACTION: f32 = 0.25;

/// Lower bound on stamp spacing so tiny radii do not explode the stamp count.
pub const MIN_STAMP_SPACING: f32 = 0.5;

/// Upper bound on output pixels (w*h) the mask encoder will allocate.
/// 2^28 pixels = 1 GiB of RGBA8.
pub const MAX_MASK_PIXELS: u64 = 1 << 28;

/// Bytes per pixel of the RGBA8 mask raster.
pub const MASK_CHANNEL_COUNT: usize = 4;

/// Output pixel for regions that must be preserved: opaque white.
pub const PRESERVE_PIXEL: [u8; 4] = [255, 255, 255, 255];

/// Output pixel for regions the inpainting model should regenerate.
/// Only alpha = 0 is significant; color is zeroed for determinism.
pub const EDIT_PIXEL: [u8; 4] = [0, 0, 0, 0];

/// Overlay color blended over marked pixels in the preview composite.
pub const PREVIEW_TINT: [u8; 3] = [255, 64, 64];

/// Blend weight of [`PREVIEW_TINT`] over the source in the preview.
pub const PREVIEW_TINT_ALPHA: f32 = 0.5;
