use tracing::{debug, trace};

use crate::config::{clamp_radius, BrushConfig};
use crate::geometry::{DisplayGeometry, Point};
use crate::raster::{replay, stamp_disc, stamp_segment, MarkBuffer};
use crate::stroke::{Stroke, Tool};

use super::event::{PointerEvent, SurfaceState};

/// Owns the interaction state of one editing session's drawing surface.
///
/// Input is processed synchronously; every accepted event is stamped into the
/// mark buffer before `handle` returns.
#[derive(Clone, Debug)]
pub struct SurfaceController {
    geometry: DisplayGeometry,
    brush: BrushConfig,
    strokes: Vec<Stroke>,
    current: Option<Stroke>,
    buffer: MarkBuffer,
}

impl SurfaceController {
    pub fn new(geometry: DisplayGeometry, brush: BrushConfig) -> Self {
        Self {
            buffer: MarkBuffer::new(geometry.display_width, geometry.display_height),
            geometry,
            brush: BrushConfig {
                tool: brush.tool,
                radius: clamp_radius(brush.radius),
            },
            strokes: Vec::new(),
            current: None,
        }
    }

    pub fn state(&self) -> SurfaceState {
        if self.current.is_some() {
            SurfaceState::Drawing
        } else {
            SurfaceState::Idle
        }
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn tool(&self) -> Tool {
        self.brush.tool
    }

    pub fn radius(&self) -> f32 {
        self.brush.radius
    }

    /// Select the tool for the next stroke. A stroke already in progress keeps its own.
    pub fn set_tool(&mut self, tool: Tool) {
        self.brush.tool = tool;
    }

    /// Set the radius for the next stroke, silently clamped to the allowed range.
    pub fn set_radius(&mut self, radius: f32) {
        self.brush.radius = clamp_radius(radius);
    }

    /// Completed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    pub fn mark_buffer(&self) -> &MarkBuffer {
        &self.buffer
    }

    /// Feed one input event. Returns `true` if the event changed state.
    ///
    /// Events that make no sense in the current state (a move while idle, a
    /// second start while drawing) are ignored.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match (event, self.current.as_mut()) {
            (PointerEvent::Start(p), None) => {
                let stroke = Stroke::new(self.brush.tool, self.brush.radius, p);
                stamp_disc(&mut self.buffer, p, stroke.radius, stroke.tool.mark_value());
                trace!(tool = %stroke.tool, radius = stroke.radius, x = p.x, y = p.y, "stroke started");
                self.current = Some(stroke);
                true
            }
            (PointerEvent::Move(p), Some(stroke)) => {
                if let Some(prev) = stroke.last_point() {
                    stamp_segment(&mut self.buffer, prev, p, stroke.radius, stroke.tool.mark_value());
                }
                stroke.push(p);
                true
            }
            (PointerEvent::Release | PointerEvent::Leave, Some(_)) => {
                if let Some(stroke) = self.current.take() {
                    trace!(points = stroke.len(), "stroke finished");
                    self.strokes.push(stroke);
                }
                true
            }
            _ => false,
        }
    }

    pub fn start(&mut self, p: Point) -> bool {
        self.handle(PointerEvent::Start(p))
    }

    pub fn move_to(&mut self, p: Point) -> bool {
        self.handle(PointerEvent::Move(p))
    }

    pub fn release(&mut self) -> bool {
        self.handle(PointerEvent::Release)
    }

    /// Discard all history and the mark buffer. The only undo there is.
    pub fn reset(&mut self) {
        debug!(strokes = self.strokes.len(), "surface reset");
        self.strokes.clear();
        self.current = None;
        self.buffer.clear();
    }

    /// Replay completed strokes (and the in-progress one) into a fresh buffer.
    pub fn rebuild(&self) -> MarkBuffer {
        let mut all: Vec<Stroke> = self.strokes.clone();
        if let Some(ref stroke) = self.current {
            all.push(stroke.clone());
        }
        replay(
            self.geometry.display_width,
            self.geometry.display_height,
            &all,
        )
    }
}
