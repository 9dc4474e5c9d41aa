use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;
use crate::error::{MaskError, Result};
use crate::geometry::Point;
use crate::stroke::Tool;
use crate::surface::{PointerEvent, SurfaceController};

/// One recorded input to the drawing surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    Tool { tool: Tool },
    Radius { radius: f32 },
    Start { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release,
    Leave,
    Reset,
}

/// A recorded editing session: which image to edit, where to write the mask,
/// and the gesture stream to replay. Coordinates are in display space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeScript {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PathBuf>,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Default for StrokeScript {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("mask.png"),
            preview: None,
            viewport: ViewportConfig::default(),
            events: vec![
                ScriptEvent::Tool { tool: Tool::Paint },
                ScriptEvent::Radius { radius: 20.0 },
                ScriptEvent::Start { x: 100.0, y: 100.0 },
                ScriptEvent::Move { x: 200.0, y: 120.0 },
                ScriptEvent::Release,
                ScriptEvent::Tool { tool: Tool::Erase },
                ScriptEvent::Radius { radius: 8.0 },
                ScriptEvent::Start { x: 150.0, y: 110.0 },
                ScriptEvent::Release,
            ],
        }
    }
}

impl StrokeScript {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MaskError::Script(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MaskError::Script(e.to_string()))
    }

    /// Read a script from disk. Relative `input`/`output`/`preview` paths are
    /// resolved against the script's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut script = Self::from_toml_str(&contents)?;
        if let Some(base) = path.parent() {
            script.resolve_paths(base);
        }
        Ok(script)
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.input);
        resolve(&mut self.output);
        if let Some(ref mut preview) = self.preview {
            resolve(preview);
        }
    }

    /// Feed every event into the controller, in order.
    ///
    /// Returns the number of events that changed the surface.
    pub fn replay_into(&self, controller: &mut SurfaceController) -> usize {
        let mut applied = 0;
        for event in &self.events {
            let changed = match *event {
                ScriptEvent::Tool { tool } => {
                    controller.set_tool(tool);
                    true
                }
                ScriptEvent::Radius { radius } => {
                    controller.set_radius(radius);
                    true
                }
                ScriptEvent::Start { x, y } => {
                    controller.handle(PointerEvent::Start(Point::new(x, y)))
                }
                ScriptEvent::Move { x, y } => controller.handle(PointerEvent::Move(Point::new(x, y))),
                ScriptEvent::Release => controller.handle(PointerEvent::Release),
                ScriptEvent::Leave => controller.handle(PointerEvent::Leave),
                ScriptEvent::Reset => {
                    controller.reset();
                    true
                }
            };
            if changed {
                applied += 1;
            }
        }
        applied
    }
}
