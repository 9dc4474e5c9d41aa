use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// What a stroke does to the pixels it covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Mark covered pixels for regeneration.
    #[default]
    Paint,
    /// Clear the mark from covered pixels.
    Erase,
}

impl Tool {
    /// The mark value written into the buffer by this tool.
    pub fn mark_value(self) -> bool {
        matches!(self, Tool::Paint)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paint => write!(f, "Paint"),
            Self::Erase => write!(f, "Erase"),
        }
    }
}

/// One continuous paint-or-erase gesture in display space.
///
/// `tool` and `radius` are captured when the gesture starts and never change
/// afterwards; points are append-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub tool: Tool,
    pub radius: f32,
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(tool: Tool, radius: f32, start: Point) -> Self {
        Self {
            tool,
            radius,
            points: vec![start],
        }
    }

    /// Build a stroke from a full path. Used for replay and tests.
    pub fn from_points(tool: Tool, radius: f32, points: Vec<Point>) -> Self {
        Self {
            tool,
            radius,
            points,
        }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
