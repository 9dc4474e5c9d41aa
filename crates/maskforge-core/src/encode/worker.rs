use std::thread::JoinHandle;

use crate::error::Result;
use crate::geometry::DisplayGeometry;
use crate::raster::MarkBuffer;

use super::mask::{encode_mask, MaskRaster};

/// Run [`encode_mask`] on a background thread.
///
/// `on_done` is called exactly once, from the worker thread, with the whole
/// result. The buffer is moved in so the caller's session state stays untouched.
pub fn spawn_encode<F>(
    buffer: MarkBuffer,
    geometry: DisplayGeometry,
    source_w: u32,
    source_h: u32,
    on_done: F,
) -> Result<JoinHandle<()>>
where
    F: FnOnce(Result<MaskRaster>) + Send + 'static,
{
    let handle = std::thread::Builder::new()
        .name("maskforge-encode".into())
        .spawn(move || {
            on_done(encode_mask(&buffer, &geometry, source_w, source_h));
        })?;
    Ok(handle)
}
