use crate::geometry::Point;

/// Pointer or touch input delivered to the drawing surface, in display space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button press or touch down.
    Start(Point),
    /// Pointer moved while pressed.
    Move(Point),
    /// Button release or touch end.
    Release,
    /// Pointer left the surface.
    Leave,
}

/// Interaction state of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    Idle,
    Drawing,
}

impl std::fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Drawing => write!(f, "Drawing"),
        }
    }
}
