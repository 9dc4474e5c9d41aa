pub mod image_io;
pub mod script;

pub use script::{ScriptEvent, StrokeScript};
