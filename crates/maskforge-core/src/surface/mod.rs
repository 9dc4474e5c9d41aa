mod controller;
mod event;

pub use controller::SurfaceController;
pub use event::{PointerEvent, SurfaceState};
