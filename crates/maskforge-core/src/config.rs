use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRUSH_RADIUS, DEFAULT_VIEWPORT_MAX, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};
use crate::stroke::Tool;

/// Bound on the on-screen drawing surface, in logical units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_viewport_max")]
    pub max_width: u32,
    #[serde(default = "default_viewport_max")]
    pub max_height: u32,
}

fn default_viewport_max() -> u32 {
    DEFAULT_VIEWPORT_MAX
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_VIEWPORT_MAX,
            max_height: DEFAULT_VIEWPORT_MAX,
        }
    }
}

/// Active brush settings of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    #[serde(default)]
    pub tool: Tool,
    /// Brush radius in display units. Clamped on use, see [`clamp_radius`].
    #[serde(default = "default_radius")]
    pub radius: f32,
}

fn default_radius() -> f32 {
    DEFAULT_BRUSH_RADIUS
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

/// Clamp a brush radius to `[MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS]`.
///
/// NaN maps to [`DEFAULT_BRUSH_RADIUS`]. Never fails.
pub fn clamp_radius(radius: f32) -> f32 {
    if radius.is_nan() {
        return DEFAULT_BRUSH_RADIUS;
    }
    radius.clamp(MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS)
}

/// Options the host supplies when opening an edit session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Also render a display-resolution preview composite on completion.
    #[serde(default)]
    pub preview: bool,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub brush: BrushConfig,
}
