pub mod mark_buffer;
pub mod stamp;

pub use mark_buffer::MarkBuffer;
pub use stamp::{apply_stroke, replay, stamp_disc, stamp_segment};
