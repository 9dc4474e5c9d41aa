mod mask;
mod preview;
mod worker;

pub use mask::{encode_mask, MaskRaster};
pub use preview::{render_preview, MaskPreview};
pub use worker::spawn_encode;
