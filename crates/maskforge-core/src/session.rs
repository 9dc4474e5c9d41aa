use std::path::Path;

use image::{DynamicImage, RgbaImage};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SessionOptions;
use crate::encode::{encode_mask, render_preview, MaskPreview, MaskRaster};
use crate::error::{MaskError, Result};
use crate::geometry::DisplayGeometry;
use crate::io::image_io::load_source;
use crate::surface::SurfaceController;

/// Receiver for the outcome of an edit session.
///
/// Exactly one of the two methods is called per session.
pub trait SessionSink {
    /// The user committed the edit. `mask` is exactly the source image's size.
    fn on_complete(&mut self, mask: MaskRaster, preview: Option<MaskPreview>);

    /// The user dismissed the editor. All session state is already gone.
    fn on_cancel(&mut self) {}
}

/// A [`SessionSink`] that just keeps what it receives.
#[derive(Debug, Default)]
pub struct MaskCollector {
    pub mask: Option<MaskRaster>,
    pub preview: Option<MaskPreview>,
    pub cancelled: bool,
}

impl SessionSink for MaskCollector {
    fn on_complete(&mut self, mask: MaskRaster, preview: Option<MaskPreview>) {
        self.mask = Some(mask);
        self.preview = preview;
    }

    fn on_cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Encoding failed. The session is handed back so the user can retry
/// without redrawing.
#[derive(Error, Debug)]
#[error("Mask encoding failed: {error}")]
pub struct CompleteError {
    pub session: Box<EditSession>,
    #[source]
    pub error: MaskError,
}

/// One image-editing session: the loaded source, its display geometry and
/// the drawing surface. Nothing outlives the session except the mask.
#[derive(Debug)]
pub struct EditSession {
    source: RgbaImage,
    controller: SurfaceController,
    options: SessionOptions,
}

impl EditSession {
    /// Decode `path` and prepare an interactive surface for it.
    ///
    /// A decode failure returns an error and no surface is created.
    pub fn open(path: &Path, options: SessionOptions) -> Result<Self> {
        let source = load_source(path)?;
        info!(
            path = %path.display(),
            width = source.width(),
            height = source.height(),
            "Source image loaded"
        );
        Self::from_rgba(source, options)
    }

    pub fn from_image(img: DynamicImage, options: SessionOptions) -> Result<Self> {
        Self::from_rgba(img.to_rgba8(), options)
    }

    pub fn from_rgba(source: RgbaImage, options: SessionOptions) -> Result<Self> {
        let (w, h) = source.dimensions();
        let geometry = DisplayGeometry::new(
            w,
            h,
            options.viewport.max_width,
            options.viewport.max_height,
        )?;
        debug!(
            display_w = geometry.display_width,
            display_h = geometry.display_height,
            sx = geometry.sx,
            sy = geometry.sy,
            "Display geometry computed"
        );
        let controller = SurfaceController::new(geometry, options.brush);
        Ok(Self {
            source,
            controller,
            options,
        })
    }

    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    pub fn source_dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        self.controller.geometry()
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn controller(&self) -> &SurfaceController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SurfaceController {
        &mut self.controller
    }

    /// Encode the mask (and optional preview) without ending the session.
    pub fn encode(&self) -> Result<(MaskRaster, Option<MaskPreview>)> {
        let (w, h) = self.source_dimensions();
        let buffer = self.controller.mark_buffer();
        let mask = encode_mask(buffer, self.controller.geometry(), w, h)?;
        mask.validate_for(w, h)?;
        let preview = self
            .options
            .preview
            .then(|| render_preview(&self.source, buffer));
        Ok((mask, preview))
    }

    /// Encode and deliver the mask to `sink`, consuming the session.
    pub fn complete<S: SessionSink + ?Sized>(
        self,
        sink: &mut S,
    ) -> std::result::Result<(), CompleteError> {
        match self.encode() {
            Ok((mask, preview)) => {
                info!(
                    strokes = self.controller.strokes().len(),
                    edit_pixels = mask.edit_pixel_count(),
                    "Edit session complete"
                );
                drop(self);
                sink.on_complete(mask, preview);
                Ok(())
            }
            Err(error) => Err(CompleteError {
                session: Box::new(self),
                error,
            }),
        }
    }

    /// Discard all session state and notify `sink`.
    pub fn cancel<S: SessionSink + ?Sized>(self, sink: &mut S) {
        debug!(strokes = self.controller.strokes().len(), "Edit session cancelled");
        drop(self);
        sink.on_cancel();
    }
}
